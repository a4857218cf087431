//! Converts LaTeX document trees into Markdown.
//!
//! The front end hands over a [`Node`] tree (usually as JSON, see
//! [`TreeParser`]); [`MarkdownRenderer`] walks it with a fresh
//! [`RenderContext`] per pass and the result goes to an [`OutputSink`].

pub mod ast;
pub mod error;
pub mod parser;
pub mod renderer;
pub mod sink;

pub use ast::*;
pub use error::*;
pub use parser::TreeParser;
pub use renderer::*;
pub use sink::*;

#[cfg(test)]
mod tests;
