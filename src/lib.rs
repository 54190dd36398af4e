//! # Radix Dict
//!
//! An in-memory radix trie over string keys.
//!
//! Keys sharing a prefix share the nodes that hold it, so the trie works as a compact
//! ordered dictionary for autocomplete lists, symbol tables or routing tables keyed by
//! string.
//!
//! ## Features
//!
//! - **Exact lookup**: `get`, `get_mut` and `contains_key` by full key
//! - **Completion**: list every stored key starting with a query, in lexicographic order
//! - **Compaction**: removal keeps the tree minimal by merging nodes left without a purpose
//! - **Self-check**: `check_invariants` verifies the structure of the whole tree
//!
//! ## Example
//!
//! ```rust
//! use radix_dict::RadixTrie;
//!
//! let mut trie = RadixTrie::new();
//! trie.insert("group", 1).unwrap();
//! trie.insert("grouper", 2).unwrap();
//! trie.insert("groupie", 3).unwrap();
//!
//! assert_eq!(trie.get("grouper"), Some(&2));
//! assert_eq!(trie.get("grou"), None);
//! assert_eq!(trie.complete("group"), vec!["group", "grouper", "groupie"]);
//!
//! assert!(trie.delete("group"));
//! assert_eq!(trie.complete("group"), vec!["grouper", "groupie"]);
//! ```
//!
//! The trie has no internal synchronization. Share it between threads behind a
//! single lock, e.g. `RwLock<RadixTrie<V>>`.

pub mod config;
mod iter;
pub mod node;
mod trie;
mod util;
mod validate;

// Re-export public types
pub use crate::config::{PrefixScan, RemovalStrategy, TrieConfig};
pub use crate::iter::{Iter, Keys};
pub use crate::node::TrieNode;
pub use crate::trie::{RadixSet, RadixTrie};
pub use crate::util::longest_common_prefix;
pub use crate::validate::MalformedTrieError;

/// Errors that can occur in trie operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Keys must contain at least one character
    #[error("empty key not allowed")]
    EmptyKey,

    /// The trie failed its structural self-check
    #[error("malformed trie: {0}")]
    Malformed(#[from] MalformedTrieError),
}

/// Result type for trie operations
pub type Result<T> = std::result::Result<T, Error>;
