use crate::ast::node::{Node, NodeKind};

/// Creates tree nodes on behalf of the front end.
///
/// Holds no state; every call yields a fresh, childless node.
#[derive(Debug, Default, Clone, Copy)]
pub struct NodeFactory;

impl NodeFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn node(&self, kind: NodeKind) -> Node {
        Node::new(kind)
    }

    pub fn text_node(&self, kind: NodeKind, text: &str) -> Node {
        Node::with_text(kind, text)
    }

    pub fn node_with_attributes(&self, kind: NodeKind, text: &str, attributes: &str) -> Node {
        Node::with_attributes(kind, text, attributes)
    }

    /// Plain string node carrying `text`
    pub fn string(&self, text: &str) -> Node {
        Node::with_text(NodeKind::PlainString, text)
    }

    pub fn default_node(&self) -> Node {
        Node::default()
    }

    pub fn attach(&self, parent: &mut Node, child: Node) {
        parent.attach(child);
    }
}
