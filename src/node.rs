//! Node implementation for the radix trie.
//!
//! A `TrieNode` owns its label, its optional value and its children by value.
//! Splitting and merging move ownership between parent and child; no node is
//! ever shared between two parents.

use crate::util::{first_char, longest_common_prefix};

/// A single node of the radix trie.
///
/// The label is the path segment from the parent. A node carrying a value marks
/// the end of a stored key; a valueless node only exists to share its label
/// among its descendants.
///
/// Children are kept sorted by the first character of their labels, and no two
/// children start with the same character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieNode<V> {
    /// The path segment stored at this node
    pub(crate) label: String,

    /// The value stored at this node, if any
    pub(crate) value: Option<V>,

    /// Child nodes ordered by the first character of their label
    pub(crate) children: Vec<TrieNode<V>>,
}

impl<V> TrieNode<V> {
    /// Creates a new childless node holding a value.
    pub fn leaf(label: impl Into<String>, value: V) -> Self {
        TrieNode {
            label: label.into(),
            value: Some(value),
            children: Vec::new(),
        }
    }

    /// Creates a valueless node over the given children.
    pub(crate) fn branch(label: impl Into<String>, children: Vec<TrieNode<V>>) -> Self {
        TrieNode {
            label: label.into(),
            value: None,
            children,
        }
    }

    /// The path segment stored at this node.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The value stored at this node, if this node ends a stored key.
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// The children of this node, ordered by the first character of their label.
    pub fn children(&self) -> &[TrieNode<V>] {
        &self.children
    }

    /// Returns whether this node is a leaf node (has no children)
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of values stored in this subtree
    pub fn subtree_size(&self) -> usize {
        let own = if self.value.is_some() { 1 } else { 0 };
        own + self.children.iter().map(TrieNode::subtree_size).sum::<usize>()
    }

    /// Returns the number of nodes in this subtree, this one included
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TrieNode::node_count).sum::<usize>()
    }

    /// Splits this node's label at byte offset `at`.
    ///
    /// Afterwards this node holds `label[..at]` and no value, and its only child
    /// holds `label[at..]` together with the value and children this node had.
    /// `at` must lie strictly inside the label on a char boundary.
    pub(crate) fn split_at(&mut self, at: usize) {
        debug_assert!(at > 0 && at < self.label.len());

        let tail = self.label.split_off(at);
        let moved = TrieNode {
            label: tail,
            value: self.value.take(),
            children: std::mem::take(&mut self.children),
        };

        tracing::trace!(prefix = %self.label, suffix = %moved.label, "split node");
        self.children.push(moved);
    }

    /// Folds the only child into this node, concatenating the labels.
    ///
    /// Only valueless nodes with exactly one child are merged; anything else is
    /// left untouched and `false` is returned.
    pub(crate) fn absorb_only_child(&mut self) -> bool {
        if self.value.is_some() || self.children.len() != 1 {
            return false;
        }

        let child = match self.children.pop() {
            Some(child) => child,
            None => return false,
        };

        tracing::trace!(parent = %self.label, child = %child.label, "merge node with only child");
        self.label.push_str(&child.label);
        self.value = child.value;
        self.children = child.children;
        true
    }

    /// Adds a child, keeping the children ordered.
    ///
    /// The caller guarantees no existing child starts with the same character.
    pub(crate) fn insert_child(&mut self, child: TrieNode<V>) {
        let found = search_siblings(&self.children, &child.label);
        debug_assert!(found.is_err(), "child label overlaps an existing sibling");

        let pos = match found {
            Ok(pos) | Err(pos) => pos,
        };
        self.children.insert(pos, child);
    }

    /// Length of the prefix this node's label shares with `key`.
    pub(crate) fn common_prefix_len(&self, key: &str) -> usize {
        longest_common_prefix(key, &self.label)
    }
}

/// Locates the sibling whose label starts with the same character as `key`.
///
/// Returns `Ok(index)` when such a sibling exists, and `Err(index)` with the
/// position a new sibling would take to keep the collection ordered otherwise.
/// An empty `key` never matches.
pub(crate) fn search_siblings<V>(nodes: &[TrieNode<V>], key: &str) -> Result<usize, usize> {
    let first = match first_char(key) {
        Some(c) => c,
        None => return Err(0),
    };

    nodes.binary_search_by(|node| first_char(&node.label).cmp(&Some(first)))
}
