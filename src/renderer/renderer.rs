use tracing::debug;

use crate::ast::Node;
use crate::error::RenderError;
use crate::renderer::traits::*;

/// Entry point for converting a whole document tree to Markdown
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Renders `root` with a fresh context
    pub fn render_document(&self, root: &Node) -> Result<String, RenderError> {
        let mut context = RenderContext::new();
        self.render_with(root, &mut context)
    }

    /// Renders `root` threading a caller-owned context, which holds the final
    /// counter state afterwards
    pub fn render_with(
        &self,
        root: &Node,
        context: &mut RenderContext,
    ) -> Result<String, RenderError> {
        debug!(kind = %root.kind, nodes = root.node_count(), "rendering document");
        let output = root.render(context)?;
        debug!(
            bytes = output.len(),
            sections = context.section,
            "rendered document"
        );
        Ok(output)
    }
}
