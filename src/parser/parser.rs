use std::path::Path;

use tracing::debug;

use crate::ast::{Node, NodeFactory, NodeKind};
use crate::error::ParseError;
use crate::parser::types::RawNode;

/// Builds document trees from the front end's JSON output
pub struct TreeParser {
    factory: NodeFactory,
}

impl TreeParser {
    pub fn new() -> Self {
        Self {
            factory: NodeFactory::new(),
        }
    }

    pub fn parse_file(&self, path: &Path) -> Result<Node, ParseError> {
        let content = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.parse_str(&content)
    }

    pub fn parse_str(&self, json: &str) -> Result<Node, ParseError> {
        let raw: RawNode = serde_json::from_str(json)?;
        let root = self.build(raw, "root")?;
        debug!(nodes = root.node_count(), kind = %root.kind, "parsed document tree");
        Ok(root)
    }

    fn build(&self, raw: RawNode, path: &str) -> Result<Node, ParseError> {
        let kind = raw.kind.parse::<NodeKind>().map_err(|_| ParseError::UnknownKind {
            kind: raw.kind.clone(),
            path: path.to_string(),
        })?;

        let mut node = self
            .factory
            .node_with_attributes(kind, &raw.text, &raw.attributes);

        for (i, child) in raw.children.into_iter().enumerate() {
            let child_path = format!("{}.children[{}]", path, i);
            let child = self.build(child, &child_path)?;
            self.factory.attach(&mut node, child);
        }

        Ok(node)
    }
}

impl TryFrom<RawNode> for Node {
    type Error = ParseError;

    fn try_from(raw: RawNode) -> Result<Self, Self::Error> {
        TreeParser::new().build(raw, "root")
    }
}

impl Default for TreeParser {
    fn default() -> Self {
        Self::new()
    }
}
