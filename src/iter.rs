//! Depth-first traversal over stored keys.

use std::collections::VecDeque;

use crate::node::TrieNode;

/// An iterator over the entries below a set of sibling nodes.
///
/// Each stored key is yielded together with a reference to its value. A node is
/// yielded before its descendants and siblings are visited in order, so keys come
/// out in lexicographic order.
pub struct Iter<'a, V> {
    /// Nodes left to visit, each with the full key of its parent
    stack: VecDeque<(&'a TrieNode<V>, String)>,
}

impl<'a, V> Iter<'a, V> {
    /// Walks `nodes` and their descendants, prepending `prefix` to every key.
    pub(crate) fn new(nodes: &'a [TrieNode<V>], prefix: &str) -> Self {
        let stack = nodes
            .iter()
            .map(|node| (node, prefix.to_string()))
            .collect();

        Iter { stack }
    }

    pub(crate) fn empty() -> Self {
        Iter {
            stack: VecDeque::new(),
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (String, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, mut key)) = self.stack.pop_front() {
            key.push_str(&node.label);

            // Visit children before remaining siblings
            for child in node.children.iter().rev() {
                self.stack.push_front((child, key.clone()));
            }

            // Valueless nodes only share a prefix, keep descending
            if let Some(value) = &node.value {
                return Some((key, value));
            }
        }

        None
    }
}

/// An iterator over the stored keys below a set of sibling nodes.
pub struct Keys<'a, V> {
    inner: Iter<'a, V>,
}

impl<'a, V> Keys<'a, V> {
    pub(crate) fn new(inner: Iter<'a, V>) -> Self {
        Keys { inner }
    }
}

impl<'a, V> Iterator for Keys<'a, V> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }
}
