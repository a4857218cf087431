use crate::ast::{Node, NodeKind};

/// Helper for inline emphasis runs
pub struct InlineRenderer;

impl InlineRenderer {
    /// Wraps the node's text in its kind's marker, followed by one space
    pub fn render_run(&self, node: &Node) -> String {
        let marker = node.kind.marker();
        format!("{}{}{} ", marker, node.text, marker)
    }
}

/// Helper for post-processing generated list text
pub struct ListPostprocessor;

impl ListPostprocessor {
    /// Drops bare `1.` lines left behind when a list sits directly under
    /// another list marker.
    ///
    /// A bare `1.` line survives only when the last kept line ends in `.`.
    pub fn collapse_empty_enumerators(&self, text: &str) -> String {
        let mut output = String::new();
        let mut previous = "";

        for line in text.lines() {
            let trimmed = line.trim_start_matches(|c: char| c.is_ascii_whitespace());
            if trimmed == "1." && !previous.ends_with('.') {
                continue;
            }
            output.push_str(line);
            output.push('\n');
            previous = line;
        }

        output
    }
}

/// Helper for the row and separator layout of tables
pub struct TableFormatter;

impl TableFormatter {
    /// Cells of a row whose nested content is ready to join
    pub fn format_row(&self, cells: &[Vec<String>]) -> String {
        let mut row = String::new();
        for cell in cells {
            let mut cell_data = String::from(" | ");
            for part in cell {
                cell_data.push_str(part);
                cell_data.push_str(" | ");
            }
            row.push_str(&cell_data);
            row.push_str(" | ");
        }

        // Drop the trailing " | "
        if !row.is_empty() {
            row.truncate(row.len() - 3);
        }
        row
    }

    /// Dash line as wide as `header`, with `|` at evenly spaced column
    /// boundaries for `cell_count` cells
    pub fn separator(&self, header: &str, cell_count: usize) -> String {
        let width = header.chars().count();
        let mut separator = vec!['-'; width];

        if cell_count > 0 && width > 0 {
            let column_width = width / cell_count;
            for i in 1..cell_count {
                separator[i * column_width] = '|';
            }
        }

        separator.into_iter().collect()
    }

    /// Inserts the separator line right after the first line of `rows`
    pub fn insert_separator(&self, rows: &mut String, cell_count: usize) {
        if let Some(pos) = rows.find('\n') {
            let separator = self.separator(&rows[..pos], cell_count);
            rows.insert_str(pos + 1, &format!("{}\n", separator));
        }
    }
}

/// Splits hyperlink text of the form `link#label`
pub fn split_link(text: &str) -> (&str, &str) {
    text.split_once('#').unwrap_or((text, ""))
}

/// Whether `node` may appear where a table row is expected
pub fn is_row(node: &Node) -> bool {
    node.kind == NodeKind::TableRow
}

/// Whether `node` may appear where a table cell is expected
pub fn is_cell(node: &Node) -> bool {
    node.kind == NodeKind::TableCell
}
