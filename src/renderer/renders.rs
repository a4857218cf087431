use tracing::{debug, trace, warn};

use crate::ast::{Node, NodeKind};
use crate::error::RenderError;
use crate::renderer::components::*;
use crate::renderer::traits::*;

impl Render for Node {
    fn render(&self, context: &mut RenderContext) -> Result<String, RenderError> {
        trace!(kind = %self.kind, "rendering node");

        match self.kind {
            NodeKind::ListItem => render_list_item(self, context),
            NodeKind::PlainString => render_string(self, context),
            NodeKind::Section => render_heading(self, HeadingLevel::Section, context),
            NodeKind::Subsection => render_heading(self, HeadingLevel::Subsection, context),
            NodeKind::Subsubsection => render_heading(self, HeadingLevel::Subsubsection, context),
            NodeKind::Itemize | NodeKind::Enumerate => render_list(self, context),
            NodeKind::Verbatim => Ok(render_verbatim(self)),
            NodeKind::Bold | NodeKind::Italic => Ok(InlineRenderer.render_run(self)),
            NodeKind::Title => Ok(render_title(self)),
            NodeKind::Date => Ok(render_date(self)),
            NodeKind::Figure => Ok(render_figure(self)),
            NodeKind::Reference => Ok(format!("{}{}\n\n", self.kind.marker(), self.text)),
            NodeKind::HorizontalRule => Ok(format!("\n\n{}\n\n", self.kind.marker())),
            NodeKind::Paragraph => render_paragraph(self),
            NodeKind::Hyperlink => Ok(render_hyperlink(self)),
            NodeKind::Table => render_table(self, context),
            NodeKind::Document
            | NodeKind::Underline
            | NodeKind::TableRow
            | NodeKind::TableCell
            | NodeKind::Caption
            | NodeKind::ImageInclude
            | NodeKind::Label
            | NodeKind::TableRule
            | NodeKind::SquareRoot
            | NodeKind::FormattedText
            | NodeKind::Code => render_children(self, context),
        }
    }
}

fn shape_violation(node: &Node, expected: &'static str) -> RenderError {
    RenderError::ShapeViolation {
        kind: node.kind,
        expected,
    }
}

/// Concatenates the rendering of every child
pub fn render_children(node: &Node, context: &mut RenderContext) -> Result<String, RenderError> {
    let mut output = String::new();
    for child in &node.children {
        output.push_str(&child.render(context)?);
    }
    Ok(output)
}

fn render_list_item(node: &Node, context: &mut RenderContext) -> Result<String, RenderError> {
    let content = node
        .first_child()
        .ok_or_else(|| shape_violation(node, "item content"))?;
    content.render(context)
}

// The first child's children are rendered a second time after all children.
// Front ends wrap paragraph-like runs this way inside string nodes.
fn render_string(node: &Node, context: &mut RenderContext) -> Result<String, RenderError> {
    let mut output = node.text.clone();

    for child in &node.children {
        output.push(' ');
        output.push_str(&child.render(context)?);
    }

    if let Some(first) = node.first_child() {
        for grandchild in &first.children {
            output.push(' ');
            output.push_str(&grandchild.render(context)?);
        }
    }

    Ok(output)
}

fn render_heading(
    node: &Node,
    level: HeadingLevel,
    context: &mut RenderContext,
) -> Result<String, RenderError> {
    let number = context.enter_heading(level);
    debug!(number = %number, title = %node.text, "entering heading");

    let body = render_children(node, context)?;
    Ok(format!(
        "{} {} {}\n\n{}\n\n",
        node.kind.marker(),
        number,
        node.text,
        body
    ))
}

fn render_list(node: &Node, context: &mut RenderContext) -> Result<String, RenderError> {
    let bullet = match node.kind {
        NodeKind::Enumerate => "1.",
        _ => "-",
    };

    let lines = context.with_list_scope(|ctx| {
        let body = node
            .first_child()
            .ok_or_else(|| shape_violation(node, "list body"))?;

        let prefix = format!("{}{}", ctx.indent(), bullet);
        let mut output = String::from("\n");
        for item in &body.children {
            let rendered = item.render(ctx)?;
            output.push_str(&prefix);
            output.push_str(&rendered);
            output.push('\n');
        }
        output.push('\n');
        Ok(output)
    })?;

    Ok(ListPostprocessor.collapse_empty_enumerators(&lines))
}

fn render_verbatim(node: &Node) -> String {
    let fence = node.kind.marker();
    format!("\n\n{}\n{}\n{}\n\n", fence, node.text, fence)
}

fn render_title(node: &Node) -> String {
    if node.text.is_empty() {
        return String::new();
    }
    format!("{} {}\n\n", node.kind.marker(), node.text)
}

fn render_date(node: &Node) -> String {
    if node.text.is_empty() {
        return String::new();
    }
    format!("{}{}\n\n", node.kind.marker(), node.text)
}

fn render_figure(node: &Node) -> String {
    let mut output = format!("{}({})", node.kind.marker(), node.text);

    for caption in node.children.iter().filter(|c| c.kind == NodeKind::Caption) {
        output.push_str(&format!(" {} \"{}\"", caption.kind.marker(), caption.text));
    }

    output.push_str("\n\n");
    output
}

fn render_paragraph(node: &Node) -> Result<String, RenderError> {
    let body = node
        .first_child()
        .ok_or_else(|| shape_violation(node, "paragraph body"))?;

    let mut output = String::new();
    for run in &body.children {
        output.push_str(&InlineRenderer.render_run(run));
    }

    output.push_str("\n\n");
    Ok(output)
}

fn render_hyperlink(node: &Node) -> String {
    let (link, label) = split_link(&node.text);
    format!("{}[{}]({}) \n", node.kind.marker(), label, link)
}

/// Renders the rows found directly under `rows`, returning the text and the
/// number of cell parts seen
fn render_rows(
    rows: &[Node],
    context: &mut RenderContext,
) -> Result<(String, usize), RenderError> {
    let mut output = String::new();
    let mut cell_count = 0;

    for row in rows.iter().filter(|r| is_row(r)) {
        let mut cells = Vec::new();
        for cell in &row.children {
            if !is_cell(cell) {
                warn!(kind = %cell.kind, "skipping non-cell node inside table row");
                continue;
            }

            let mut parts = Vec::new();
            for inner in &cell.children {
                if is_cell(inner) {
                    parts.push(inner.render(context)?);
                }
                cell_count += 1;
            }
            cells.push(parts);
        }

        output.push_str(&TableFormatter.format_row(&cells));
        output.push('\n');
    }

    Ok((output, cell_count))
}

// Rows are collected twice: once under the table itself and once under its
// first child. Only the first pass contributes to the column count.
fn render_table(node: &Node, context: &mut RenderContext) -> Result<String, RenderError> {
    let (mut output, cell_count) = render_rows(&node.children, context)?;

    let first = node
        .first_child()
        .ok_or_else(|| shape_violation(node, "rows"))?;
    let (nested, _) = render_rows(&first.children, context)?;
    output.push_str(&nested);

    TableFormatter.insert_separator(&mut output, cell_count);

    output.push_str("\n\n");
    Ok(output)
}
