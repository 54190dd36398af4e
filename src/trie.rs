//! The main trie implementation.
//!
//! This module contains the `RadixTrie` type, which provides the primary API for
//! working with the radix trie data structure.

use std::iter::FromIterator;

use crate::config::{PrefixScan, RemovalStrategy, TrieConfig};
use crate::iter::{Iter, Keys};
use crate::node::{search_siblings, TrieNode};
use crate::validate::{check_nodes, MalformedTrieError};
use crate::{Error, Result};

/// A mutable radix trie over string keys.
///
/// Keys sharing a prefix share the nodes holding that prefix. Root nodes, like the
/// children of any node, never start with the same character and are kept in
/// order, so every traversal yields keys in lexicographic order.
#[derive(Debug, Clone)]
pub struct RadixTrie<V> {
    /// The root-level nodes of the trie
    pub(crate) roots: Vec<TrieNode<V>>,

    /// The number of values stored in the trie
    size: usize,

    config: TrieConfig,
}

/// A radix trie storing keys without payloads.
pub type RadixSet = RadixTrie<()>;

impl<V> RadixTrie<V> {
    /// Creates a new, empty trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_dict::RadixTrie;
    ///
    /// let trie = RadixTrie::<i32>::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Creates a new, empty trie with the given configuration.
    pub fn with_config(config: TrieConfig) -> Self {
        RadixTrie {
            roots: Vec::new(),
            size: 0,
            config,
        }
    }

    /// The configuration this trie was created with.
    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// Returns the number of values stored in the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_dict::RadixTrie;
    ///
    /// let mut trie = RadixTrie::new();
    /// assert_eq!(trie.len(), 0);
    ///
    /// trie.insert("hello", 42).unwrap();
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the trie contains no values.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes every key from the trie.
    pub fn clear(&mut self) {
        self.roots.clear();
        self.size = 0;
    }

    /// The root-level nodes, ordered by the first character of their label.
    pub fn roots(&self) -> &[TrieNode<V>] {
        &self.roots
    }

    /// Returns the number of nodes in the trie.
    pub fn node_count(&self) -> usize {
        self.roots.iter().map(TrieNode::node_count).sum()
    }

    /// Returns an iterator over every key and value in lexicographic key order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(&self.roots, "")
    }

    /// Returns an iterator over every stored key in lexicographic order.
    pub fn keys(&self) -> Keys<'_, V> {
        Keys::new(self.iter())
    }

    /// Inserts a key-value pair into the trie.
    ///
    /// If the key already exists its value is replaced and the previous value is
    /// returned; the shape of the tree does not change. An empty key is rejected
    /// and leaves the trie untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_dict::{Error, RadixTrie};
    ///
    /// let mut trie = RadixTrie::new();
    /// assert_eq!(trie.insert("group", 1), Ok(None));
    /// assert_eq!(trie.insert("group", 2), Ok(Some(1)));
    /// assert_eq!(trie.insert("", 3), Err(Error::EmptyKey));
    /// ```
    pub fn insert(&mut self, key: &str, value: V) -> Result<Option<V>> {
        if key.is_empty() {
            tracing::debug!("rejected insert of empty key");
            return Err(Error::EmptyKey);
        }

        let replaced = Self::insert_into(&mut self.roots, key, value);
        if replaced.is_none() {
            self.size += 1;
        }

        Ok(replaced)
    }

    // Descends the sibling collections, splitting the one node sharing a prefix with the key
    fn insert_into(nodes: &mut Vec<TrieNode<V>>, key: &str, value: V) -> Option<V> {
        let idx = match search_siblings(nodes, key) {
            Ok(idx) => idx,
            Err(pos) => {
                // Nothing shares a leading character with the key
                tracing::trace!(key, "append leaf");
                nodes.insert(pos, TrieNode::leaf(key, value));
                return None;
            }
        };

        let node = &mut nodes[idx];
        let common_len = node.common_prefix_len(key);

        if common_len == node.label.len() {
            if common_len == key.len() {
                tracing::trace!(key, "update value");
                return node.value.replace(value);
            }

            return Self::insert_into(&mut node.children, &key[common_len..], value);
        }

        // The key ends inside the label or diverges from it
        node.split_at(common_len);
        if common_len == key.len() {
            node.value = Some(value);
        } else {
            node.insert_child(TrieNode::leaf(&key[common_len..], value));
        }

        None
    }

    /// Retrieves a reference to the value stored for the given key, if any.
    ///
    /// A key that only exists as a shared prefix of other keys has no value.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_dict::RadixTrie;
    ///
    /// let mut trie = RadixTrie::new();
    /// trie.insert("group", 1).unwrap();
    /// trie.insert("grouper", 2).unwrap();
    ///
    /// assert_eq!(trie.get("grouper"), Some(&2));
    /// assert_eq!(trie.get("grou"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<&V> {
        let mut nodes = &self.roots[..];
        let mut remaining = key;

        loop {
            let idx = search_siblings(nodes, remaining).ok()?;
            let node = &nodes[idx];
            let common_len = node.common_prefix_len(remaining);

            // The key diverges from or ends inside this label
            if common_len < node.label.len() {
                return None;
            }

            if common_len == remaining.len() {
                return node.value.as_ref();
            }

            remaining = &remaining[common_len..];
            nodes = &node.children;
        }
    }

    /// Retrieves a mutable reference to the value stored for the given key, if any.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        Self::find_node_mut(&mut self.roots, key).and_then(|node| node.value.as_mut())
    }

    fn find_node_mut<'a>(nodes: &'a mut [TrieNode<V>], key: &str) -> Option<&'a mut TrieNode<V>> {
        let idx = search_siblings(nodes, key).ok()?;
        let node = &mut nodes[idx];
        let common_len = node.common_prefix_len(key);

        if common_len < node.label.len() {
            return None;
        }

        if common_len == key.len() {
            return Some(node);
        }

        Self::find_node_mut(&mut node.children, &key[common_len..])
    }

    /// Returns `true` if the trie contains a value for the given key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns every stored key that starts with `query`, in lexicographic order.
    ///
    /// An empty query yields nothing; use [`keys`](Self::keys) to list everything.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_dict::RadixSet;
    ///
    /// let mut set = RadixSet::new();
    /// for word in &["group", "grouper", "groupie", "goon"] {
    ///     set.insert(word, ()).unwrap();
    /// }
    ///
    /// assert_eq!(set.complete("gro"), vec!["group", "grouper", "groupie"]);
    /// assert!(set.complete("x").is_empty());
    /// ```
    pub fn complete(&self, query: &str) -> Vec<String> {
        self.complete_entries(query)
            .into_iter()
            .map(|(key, _)| key)
            .collect()
    }

    /// Like [`complete`](Self::complete), but returns each value alongside its key.
    pub fn complete_entries(&self, query: &str) -> Vec<(String, &V)> {
        match self.config.prefix_scan {
            PrefixScan::Anchored => self.prefix_iter(query).collect(),
            PrefixScan::Segmented => Self::scan_segments(&self.roots, query),
        }
    }

    /// Returns an iterator over the entries whose key starts with `query`.
    ///
    /// This always uses anchored matching, whatever the configured prefix scan.
    pub fn prefix_iter(&self, query: &str) -> Iter<'_, V> {
        if query.is_empty() {
            return Iter::empty();
        }

        let mut nodes = &self.roots[..];
        let mut remaining = query;
        let mut path = String::new();

        loop {
            let idx = match search_siblings(nodes, remaining) {
                Ok(idx) => idx,
                Err(_) => return Iter::empty(),
            };
            let node = &nodes[idx];
            let common_len = node.common_prefix_len(remaining);

            // Query consumed, whether it ends at or inside this label
            if common_len == remaining.len() {
                return Iter::new(std::slice::from_ref(node), &path);
            }

            if common_len < node.label.len() {
                return Iter::empty();
            }

            path.push_str(&node.label);
            remaining = &remaining[common_len..];
            nodes = &node.children;
        }
    }

    // Matches the query against every sibling, and below non-matching siblings
    // against the start of their descendants' labels
    fn scan_segments<'a>(nodes: &'a [TrieNode<V>], query: &str) -> Vec<(String, &'a V)> {
        if nodes.is_empty() || query.is_empty() {
            return Vec::new();
        }

        let mut matches = Vec::new();

        for node in nodes {
            let common_len = node.common_prefix_len(query);

            if common_len == 0 {
                matches.extend(Self::scan_segments(&node.children, query));
                continue;
            }

            if common_len == query.len() {
                return Iter::new(std::slice::from_ref(node), "").collect();
            }

            let found = Self::scan_segments(&node.children, &query[common_len..]);
            if !found.is_empty() {
                return found
                    .into_iter()
                    .map(|(key, value)| (format!("{}{}", node.label, key), value))
                    .collect();
            }
        }

        matches
    }

    /// Removes a key from the trie, returning its value if it was present.
    ///
    /// Removing a key that is absent, or that only exists as a shared prefix,
    /// leaves the trie unchanged. With [`RemovalStrategy::Compact`] the tree is
    /// kept minimal: a node left valueless with a single child is merged with it.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_dict::RadixTrie;
    ///
    /// let mut trie = RadixTrie::new();
    /// trie.insert("goon", 1).unwrap();
    /// trie.insert("goons", 2).unwrap();
    ///
    /// assert_eq!(trie.remove("goon"), Some(1));
    /// assert_eq!(trie.remove("goon"), None);
    /// assert_eq!(trie.roots()[0].label(), "goons");
    /// ```
    pub fn remove(&mut self, key: &str) -> Option<V> {
        if key.is_empty() {
            return None;
        }

        let removed = Self::remove_from(&mut self.roots, key, self.config.removal)?;
        self.size -= 1;
        Some(removed)
    }

    /// Removes a key from the trie, returning whether it was present.
    pub fn delete(&mut self, key: &str) -> bool {
        self.remove(key).is_some()
    }

    fn remove_from(
        nodes: &mut Vec<TrieNode<V>>,
        key: &str,
        removal: RemovalStrategy,
    ) -> Option<V> {
        let idx = search_siblings(nodes, key).ok()?;
        let node = &mut nodes[idx];
        let common_len = node.common_prefix_len(key);

        if common_len < node.label.len() {
            return None;
        }

        let removed = if common_len == key.len() {
            node.value.take()?
        } else {
            Self::remove_from(&mut node.children, &key[common_len..], removal)?
        };

        // Reshape the node the key ran through, it may now be valueless
        if node.value.is_none() {
            if node.children.is_empty() {
                tracing::trace!(label = %node.label, "prune node");
                nodes.remove(idx);
            } else if removal == RemovalStrategy::Compact {
                node.absorb_only_child();
            } else {
                tracing::trace!(label = %node.label, "tombstone node");
            }
        }

        Some(removed)
    }

    /// Checks that the trie is a well-formed radix trie.
    ///
    /// Every label is non-empty, siblings are ordered and never share a leading
    /// character, every leaf carries a value, and the recorded length matches
    /// the stored values. With [`RemovalStrategy::Compact`] no valueless node may
    /// have a single child.
    pub fn check_invariants(&self) -> Result<()> {
        let actual = check_nodes(&self.roots, self.config.removal)?;
        if actual != self.size {
            return Err(MalformedTrieError::LengthMismatch {
                expected: self.size,
                actual,
            }
            .into());
        }

        Ok(())
    }
}

// Default implementation
impl<V> Default for RadixTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

// Structural equality; the configuration is not compared
impl<V: PartialEq> PartialEq for RadixTrie<V> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.roots == other.roots
    }
}

impl<V: Eq> Eq for RadixTrie<V> {}

impl<S: AsRef<str>, V> Extend<(S, V)> for RadixTrie<V> {
    fn extend<I: IntoIterator<Item = (S, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            // Empty keys are skipped, as with any rejected insert
            let _ = self.insert(key.as_ref(), value);
        }
    }
}

impl<S: AsRef<str>, V> FromIterator<(S, V)> for RadixTrie<V> {
    fn from_iter<I: IntoIterator<Item = (S, V)>>(iter: I) -> Self {
        let mut trie = RadixTrie::new();
        trie.extend(iter);
        trie
    }
}

impl<'a, V> IntoIterator for &'a RadixTrie<V> {
    type Item = (String, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
