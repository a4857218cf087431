use crate::error::RenderError;

/// Heading levels that carry a dotted number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    Section,
    Subsection,
    Subsubsection,
}

/// Numbering and nesting state for one rendering pass.
///
/// A fresh context is created per pass and threaded through every call, so
/// separate conversions never share counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    pub section: u32,
    pub subsection: u32,
    pub subsubsection: u32,
    pub list_depth: usize,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the counters for a heading and returns its dotted number
    pub fn enter_heading(&mut self, level: HeadingLevel) -> String {
        match level {
            HeadingLevel::Section => {
                self.section += 1;
                self.subsection = 0;
                self.subsubsection = 0;
                self.section.to_string()
            }
            HeadingLevel::Subsection => {
                self.subsection += 1;
                self.subsubsection = 0;
                format!("{}.{}", self.section, self.subsection)
            }
            HeadingLevel::Subsubsection => {
                self.subsubsection += 1;
                format!(
                    "{}.{}.{}",
                    self.section, self.subsection, self.subsubsection
                )
            }
        }
    }

    /// Runs `f` one list level deeper.
    ///
    /// The previous depth is restored even when `f` fails.
    pub fn with_list_scope<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, RenderError>,
    ) -> Result<T, RenderError> {
        let saved = self.list_depth;
        self.list_depth += 1;
        let result = f(self);
        self.list_depth = saved;
        result
    }

    /// Tab indentation for list lines at the current depth
    pub fn indent(&self) -> String {
        "\t".repeat(self.list_depth.saturating_sub(1))
    }
}

/// Core rendering trait for tree content
pub trait Render {
    fn render(&self, context: &mut RenderContext) -> Result<String, RenderError>;
}

impl<T: Render> Render for Option<T> {
    fn render(&self, context: &mut RenderContext) -> Result<String, RenderError> {
        match self {
            Some(inner) => inner.render(context),
            None => Ok(String::new()),
        }
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self, context: &mut RenderContext) -> Result<String, RenderError> {
        (**self).render(context)
    }
}
