//! Error types for loading, rendering and emitting documents.

use crate::ast::NodeKind;

/// Error raised while turning the front end's output into a tree.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The serialized tree is not valid JSON or does not match the node schema.
    #[error("malformed tree: {0}")]
    Json(#[from] serde_json::Error),

    /// A node names a kind the renderer does not know.
    #[error("unknown node kind `{kind}` at {path}")]
    UnknownKind { kind: String, path: String },

    /// The tree file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Error raised while rendering a tree.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A node lacks a child its kind requires.
    #[error("shape contract violated: {kind} node has no {expected}")]
    ShapeViolation {
        kind: NodeKind,
        expected: &'static str,
    },
}

/// Error raised by an output sink.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("Unable to open file: {destination}")]
    Open {
        destination: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to write to {destination}")]
    Write {
        destination: String,
        #[source]
        source: std::io::Error,
    },
}
