use serde::Deserialize;

/// Node as serialized by the LaTeX front end.
///
/// `kind` stays a string here so unknown kinds can be reported with their
/// position in the tree instead of a bare serde message.
#[derive(Debug, Deserialize)]
pub struct RawNode {
    pub kind: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub attributes: String,
    #[serde(default)]
    pub children: Vec<RawNode>,
}
