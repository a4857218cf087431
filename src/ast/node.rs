use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::parser::RawNode;

/// Tag identifying the role a node plays in the document tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Document,
    Section,
    Subsection,
    Subsubsection,
    Bold,
    Italic,
    Underline,
    #[serde(rename = "string")]
    PlainString,
    Itemize,
    Enumerate,
    #[serde(rename = "item")]
    ListItem,
    Paragraph,
    Table,
    TableRow,
    TableCell,
    Figure,
    Caption,
    #[serde(rename = "include_graphics")]
    ImageInclude,
    Label,
    Reference,
    TableRule,
    SquareRoot,
    Title,
    Date,
    Verbatim,
    HorizontalRule,
    Hyperlink,
    #[serde(rename = "text")]
    FormattedText,
    Code,
}

impl NodeKind {
    pub const ALL: [NodeKind; 29] = [
        NodeKind::Document,
        NodeKind::Section,
        NodeKind::Subsection,
        NodeKind::Subsubsection,
        NodeKind::Bold,
        NodeKind::Italic,
        NodeKind::Underline,
        NodeKind::PlainString,
        NodeKind::Itemize,
        NodeKind::Enumerate,
        NodeKind::ListItem,
        NodeKind::Paragraph,
        NodeKind::Table,
        NodeKind::TableRow,
        NodeKind::TableCell,
        NodeKind::Figure,
        NodeKind::Caption,
        NodeKind::ImageInclude,
        NodeKind::Label,
        NodeKind::Reference,
        NodeKind::TableRule,
        NodeKind::SquareRoot,
        NodeKind::Title,
        NodeKind::Date,
        NodeKind::Verbatim,
        NodeKind::HorizontalRule,
        NodeKind::Hyperlink,
        NodeKind::FormattedText,
        NodeKind::Code,
    ];

    /// Name used in the JSON interchange format
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Document => "document",
            NodeKind::Section => "section",
            NodeKind::Subsection => "subsection",
            NodeKind::Subsubsection => "subsubsection",
            NodeKind::Bold => "bold",
            NodeKind::Italic => "italic",
            NodeKind::Underline => "underline",
            NodeKind::PlainString => "string",
            NodeKind::Itemize => "itemize",
            NodeKind::Enumerate => "enumerate",
            NodeKind::ListItem => "item",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Table => "table",
            NodeKind::TableRow => "table_row",
            NodeKind::TableCell => "table_cell",
            NodeKind::Figure => "figure",
            NodeKind::Caption => "caption",
            NodeKind::ImageInclude => "include_graphics",
            NodeKind::Label => "label",
            NodeKind::Reference => "reference",
            NodeKind::TableRule => "table_rule",
            NodeKind::SquareRoot => "square_root",
            NodeKind::Title => "title",
            NodeKind::Date => "date",
            NodeKind::Verbatim => "verbatim",
            NodeKind::HorizontalRule => "horizontal_rule",
            NodeKind::Hyperlink => "hyperlink",
            NodeKind::FormattedText => "text",
            NodeKind::Code => "code",
        }
    }

    /// Markdown marker emitted around or before content of this kind.
    ///
    /// Kinds without a configured marker map to the empty string.
    pub fn marker(&self) -> &'static str {
        match self {
            NodeKind::Section => "##",
            NodeKind::Subsection => "###",
            NodeKind::Subsubsection => "####",
            NodeKind::ListItem => "- ",
            NodeKind::Bold => "**",
            NodeKind::Italic => "*",
            NodeKind::Underline => "<u>",
            NodeKind::Figure | NodeKind::ImageInclude => "![]",
            NodeKind::Date => "Date: ",
            NodeKind::Title => "#",
            NodeKind::Verbatim => "```",
            NodeKind::HorizontalRule => "---",
            _ => "",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(kind) = NodeKind::ALL.iter().find(|k| k.as_str() == s) {
            return Ok(*kind);
        }

        // Command names used by the LaTeX front end
        let kind = match s {
            "textbf" => NodeKind::Bold,
            "textit" => NodeKind::Italic,
            "par" => NodeKind::Paragraph,
            "tabular" => NodeKind::Table,
            "row" => NodeKind::TableRow,
            "cell" => NodeKind::TableCell,
            "includegraphics" => NodeKind::ImageInclude,
            "ref" => NodeKind::Reference,
            "hline" => NodeKind::TableRule,
            "sqrt" => NodeKind::SquareRoot,
            "hrule" => NodeKind::HorizontalRule,
            "href" => NodeKind::Hyperlink,
            other => {
                return Err(ParseError::UnknownKind {
                    kind: other.to_string(),
                    path: String::new(),
                })
            }
        };
        Ok(kind)
    }
}

/// A node of the document tree.
///
/// Children are owned by value, so dropping a node drops its whole subtree.
/// Deserializing goes through [`RawNode`] and the tree parser, so the same
/// kind names and aliases are accepted either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNode")]
pub struct Node {
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub attributes: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self::with_attributes(kind, "", "")
    }

    pub fn with_text(kind: NodeKind, text: impl Into<String>) -> Self {
        Self::with_attributes(kind, text, "")
    }

    pub fn with_attributes(
        kind: NodeKind,
        text: impl Into<String>,
        attributes: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            text: text.into(),
            attributes: attributes.into(),
            children: Vec::new(),
        }
    }

    /// Appends `child`, taking ownership of it
    pub fn attach(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Builder-style variant of [`Node::attach`]
    pub fn child(mut self, child: Node) -> Self {
        self.attach(child);
        self
    }

    pub fn first_child(&self) -> Option<&Node> {
        self.children.first()
    }

    /// Number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }

    /// Indented listing of the subtree, produced lazily when formatted
    pub fn dump(&self, depth: usize) -> Dump<'_> {
        Dump { node: self, depth }
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::new(NodeKind::PlainString)
    }
}

/// Diagnostic listing returned by [`Node::dump`]
pub struct Dump<'a> {
    node: &'a Node,
    depth: usize,
}

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node;
        writeln!(
            f,
            "{}{}: {} ({})",
            "\t".repeat(self.depth),
            node.kind.as_str().to_uppercase(),
            node.text,
            node.attributes
        )?;
        for child in &node.children {
            write!(f, "{}", child.dump(self.depth + 1))?;
        }
        Ok(())
    }
}
