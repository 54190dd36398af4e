//! Structural self-check for a radix trie.
//!
//! The checker walks every node and reports the first place where the tree
//! stops being a well-formed, minimal radix trie.

use crate::config::RemovalStrategy;
use crate::node::TrieNode;
use crate::util::first_char;

/// An issue with the well-formed-ness of the trie.
///
/// Keys reported here are full keys (labels concatenated from a root).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedTrieError {
    /// A node below `parent` has an empty label
    #[error("node below '{parent}' has an empty label")]
    EmptyLabel {
        /// Full key of the parent, empty for roots
        parent: String,
    },

    /// Two siblings start with the same character
    #[error("siblings '{first}' and '{second}' share a leading character")]
    SiblingOverlap {
        /// Full key of the first sibling
        first: String,
        /// Full key of the second sibling
        second: String,
    },

    /// Two siblings are not ordered by their leading character
    #[error("sibling '{second}' is ordered after '{first}'")]
    SiblingOrder {
        /// Full key of the earlier sibling
        first: String,
        /// Full key of the later sibling
        second: String,
    },

    /// A childless node carries no value
    #[error("leaf '{key}' carries no value")]
    ValuelessLeaf {
        /// Full key of the leaf
        key: String,
    },

    /// A valueless node has a single child and should have been merged with it
    #[error("valueless node '{key}' has a single child")]
    RedundantBranch {
        /// Full key of the node
        key: String,
    },

    /// The recorded length differs from the number of stored values
    #[error("trie records {expected} entries but stores {actual}")]
    LengthMismatch {
        /// The length recorded by the trie
        expected: usize,
        /// The number of values found in the nodes
        actual: usize,
    },
}

/// Checks `roots` and everything below them, returning the number of stored values.
pub(crate) fn check_nodes<V>(
    roots: &[TrieNode<V>],
    removal: RemovalStrategy,
) -> Result<usize, MalformedTrieError> {
    check_siblings(roots, "", removal)
}

fn check_siblings<V>(
    nodes: &[TrieNode<V>],
    parent: &str,
    removal: RemovalStrategy,
) -> Result<usize, MalformedTrieError> {
    let mut count = 0;

    for (idx, node) in nodes.iter().enumerate() {
        let lead = match first_char(&node.label) {
            Some(c) => c,
            None => {
                return Err(MalformedTrieError::EmptyLabel {
                    parent: parent.to_string(),
                })
            }
        };

        let key = format!("{}{}", parent, node.label);

        if let Some(next) = nodes.get(idx + 1) {
            let next_key = || format!("{}{}", parent, next.label);
            match first_char(&next.label) {
                Some(c) if c == lead => {
                    return Err(MalformedTrieError::SiblingOverlap {
                        first: key,
                        second: next_key(),
                    })
                }
                Some(c) if c < lead => {
                    return Err(MalformedTrieError::SiblingOrder {
                        first: key,
                        second: next_key(),
                    })
                }
                // Empty labels are reported when the sibling itself is visited
                _ => {}
            }
        }

        if node.value.is_none() {
            match node.children.len() {
                0 => return Err(MalformedTrieError::ValuelessLeaf { key }),
                1 if removal == RemovalStrategy::Compact => {
                    return Err(MalformedTrieError::RedundantBranch { key })
                }
                _ => {}
            }
        } else {
            count += 1;
        }

        count += check_siblings(&node.children, &key, removal)?;
    }

    Ok(count)
}
