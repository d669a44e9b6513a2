//! Node and scalar types stored in a [`Document`].

use serde::{Deserialize, Serialize};

use super::tree::Document;

/// A leaf value in the document.
///
/// Attribute values coming from a plan are strings; the destroy flags are
/// booleans. Numbers are kept as [`serde_json::Number`] so integers survive
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Boolean value.
    Bool(bool),
    /// Numeric value.
    Number(serde_json::Number),
    /// String value.
    String(String),
}

/// A slot in the document: either a leaf or a nested document, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// Scalar leaf.
    Leaf(Scalar),
    /// Nested document.
    Branch(Document),
}

impl Default for Scalar {
    fn default() -> Self {
        Self::String(String::new())
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl Node {
    /// Returns the scalar if this node is a leaf.
    #[must_use]
    pub const fn as_leaf(&self) -> Option<&Scalar> {
        match self {
            Self::Leaf(scalar) => Some(scalar),
            Self::Branch(_) => None,
        }
    }

    /// Returns the nested document if this node is a branch.
    #[must_use]
    pub const fn as_branch(&self) -> Option<&Document> {
        match self {
            Self::Branch(document) => Some(document),
            Self::Leaf(_) => None,
        }
    }

    /// Returns true if this node is a leaf.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Turns this node into a branch, discarding a leaf, and returns the
    /// nested document.
    pub(super) fn make_branch(&mut self) -> &mut Document {
        match self {
            Self::Branch(document) => document,
            leaf @ Self::Leaf(_) => {
                *leaf = Self::Branch(Document::new());
                leaf.make_branch()
            }
        }
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::String(value) => write!(f, "{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scalar_is_empty_string() {
        assert_eq!(Scalar::default(), Scalar::String(String::new()));
    }

    #[test]
    fn test_scalar_untagged_decoding() {
        let values: Vec<Scalar> = serde_json::from_str(r#"[true, 42, "10.0.0.0/16"]"#).unwrap();
        assert_eq!(values[0], Scalar::Bool(true));
        assert_eq!(values[1], Scalar::from(42_i64));
        assert_eq!(values[2], Scalar::from("10.0.0.0/16"));
    }

    #[test]
    fn test_make_branch_replaces_leaf() {
        let mut node = Node::Leaf(Scalar::from("old"));
        node.make_branch();
        assert_eq!(node, Node::Branch(Document::new()));
    }

    #[test]
    fn test_make_branch_returns_fresh_document_for_leaf() {
        let mut node = Node::Leaf(Scalar::from(true));
        node.make_branch().insert::<&str>(&[], "cidr_block", "10.0.0.0/16");

        let branch = node.as_branch().unwrap();
        assert_eq!(branch.len(), 1);
        assert_eq!(branch.get("cidr_block"), Some(&Node::Leaf(Scalar::from("10.0.0.0/16"))));
    }

    #[test]
    fn test_make_branch_keeps_existing_branch() {
        let mut inner = Document::new();
        inner.insert::<&str>(&[], "kept", true);
        let mut node = Node::Branch(inner.clone());
        node.make_branch();
        assert_eq!(node.as_branch(), Some(&inner));
    }
}
