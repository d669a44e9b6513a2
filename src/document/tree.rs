//! The nested document and path insertion.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map;
use tracing::debug;

use super::node::{Node, Scalar};

/// Path segment that denotes the top-level module.
///
/// A path starting with this segment is inserted at the document root; the
/// marker itself never becomes a key.
pub const ROOT_MARKER: &str = "root";

/// A nested, key-sorted document.
///
/// Keys live in a [`BTreeMap`], so iteration and serialization always follow
/// lexicographic key order regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    entries: BTreeMap<String, Node>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Sets `key` to `value` inside the document found by walking `path`.
    ///
    /// A leading [`ROOT_MARKER`] segment is dropped. Intermediate documents are
    /// created as needed; a leaf sitting on the walked path is replaced by an
    /// empty document. The final write always overwrites whatever `key` held,
    /// including a nested document.
    pub fn insert<S: AsRef<str>>(&mut self, path: &[S], key: &str, value: impl Into<Scalar>) {
        let mut current = self;
        for segment in strip_root(path) {
            current = current.descend(segment.as_ref());
        }

        let previous = current
            .entries
            .insert(key.to_string(), Node::Leaf(value.into()));
        if let Some(Node::Branch(_)) = previous {
            debug!("Replaced nested document at '{key}' with a scalar");
        }
    }

    /// Returns the child document under `segment`, creating it if needed.
    fn descend(&mut self, segment: &str) -> &mut Self {
        let slot = self
            .entries
            .entry(segment.to_string())
            .or_insert_with(|| Node::Branch(Self::new()));
        if slot.is_leaf() {
            debug!("Replacing scalar at '{segment}' with a nested document");
        }
        slot.make_branch()
    }

    /// Returns the node stored under `key` at this level.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    /// Returns the node found by walking `path` from this document.
    ///
    /// Like [`Document::insert`], a leading [`ROOT_MARKER`] is ignored. An
    /// empty path after stripping yields `None`.
    #[must_use]
    pub fn get_path<S: AsRef<str>>(&self, path: &[S]) -> Option<&Node> {
        let (last, parents) = strip_root(path).split_last()?;
        let mut current = self;
        for segment in parents {
            current = current.get(segment.as_ref())?.as_branch()?;
        }
        current.get(last.as_ref())
    }

    /// Returns the number of keys at this level.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the document has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over this level's entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Node> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a Node);
    type IntoIter = btree_map::Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Drops a leading root marker from a path.
fn strip_root<S: AsRef<str>>(path: &[S]) -> &[S] {
    match path.split_first() {
        Some((first, rest)) if first.as_ref() == ROOT_MARKER => rest,
        _ => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(value: impl Into<Scalar>) -> Node {
        Node::Leaf(value.into())
    }

    #[test]
    fn test_insert_at_empty_path() {
        let mut doc = Document::new();
        doc.insert::<&str>(&[], "destroy", false);

        assert_eq!(doc.len(), 1);
        assert_eq!(doc.get("destroy"), Some(&leaf(false)));
    }

    #[test]
    fn test_root_marker_is_stripped() {
        let mut with_root = Document::new();
        with_root.insert(&["root", "a", "b"], "k", "v");

        let mut without_root = Document::new();
        without_root.insert(&["a", "b"], "k", "v");

        assert_eq!(with_root, without_root);
        assert!(with_root.get(ROOT_MARKER).is_none());
    }

    #[test]
    fn test_lone_root_marker_targets_document_root() {
        let mut doc = Document::new();
        doc.insert(&["root"], "destroy", true);

        assert_eq!(doc.get("destroy"), Some(&leaf(true)));
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_root_marker_only_stripped_in_first_position() {
        let mut doc = Document::new();
        doc.insert(&["a", "root"], "k", 1_i64);

        assert_eq!(doc.get_path(&["a", "root", "k"]), Some(&leaf(1_i64)));
    }

    #[test]
    fn test_reinsertion_is_idempotent() {
        let mut doc = Document::new();
        doc.insert(&["mod", "aws_vpc.main"], "cidr_block", "10.0.0.0/16");
        let snapshot = doc.clone();

        doc.insert(&["mod", "aws_vpc.main"], "cidr_block", "10.0.0.0/16");
        assert_eq!(doc, snapshot);
    }

    #[test]
    fn test_branch_replaces_leaf_on_path() {
        let mut doc = Document::new();
        doc.insert::<&str>(&[], "k", "scalar");
        doc.insert(&["k"], "inner", true);

        let branch = doc.get("k").and_then(Node::as_branch).unwrap();
        assert_eq!(branch.len(), 1);
        assert_eq!(branch.get("inner"), Some(&leaf(true)));
    }

    #[test]
    fn test_leaf_replaces_branch_at_key() {
        let mut doc = Document::new();
        doc.insert(&["k"], "inner", true);
        doc.insert::<&str>(&[], "k", "scalar");

        assert_eq!(doc.get("k"), Some(&leaf("scalar")));
    }

    #[test]
    fn test_existing_branch_is_reused() {
        let mut doc = Document::new();
        doc.insert(&["a"], "first", 1_i64);
        doc.insert(&["a"], "second", 2_i64);

        let branch = doc.get("a").and_then(Node::as_branch).unwrap();
        assert_eq!(branch.len(), 2);
    }

    #[test]
    fn test_keys_iterate_sorted() {
        let mut doc = Document::new();
        for key in ["zeta", "destroy", "aws_vpc.main", "Upper"] {
            doc.insert::<&str>(&[], key, true);
        }

        let keys: Vec<&str> = doc.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["Upper", "aws_vpc.main", "destroy", "zeta"]);
    }

    #[test]
    fn test_get_path_misses() {
        let mut doc = Document::new();
        doc.insert(&["a"], "k", "v");

        assert!(doc.get_path::<&str>(&[]).is_none());
        assert!(doc.get_path(&["root"]).is_none());
        assert!(doc.get_path(&["a", "k", "deeper"]).is_none());
        assert!(doc.get_path(&["b", "k"]).is_none());
    }

    #[test]
    fn test_serializes_nested_and_sorted() {
        let mut doc = Document::new();
        doc.insert(&["b"], "y", false);
        doc.insert::<&str>(&[], "a", "x");

        let json = serde_json::to_string(&doc).unwrap();
        assert_eq!(json, r#"{"a":"x","b":{"y":false}}"#);
    }
}
