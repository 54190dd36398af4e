//! Behavioural options for a [`RadixTrie`](crate::RadixTrie).

/// How [`RadixTrie::remove`](crate::RadixTrie::remove) reshapes the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalStrategy {
    /// Keep the tree minimal.
    ///
    /// A node left without a value and with a single child is merged with that
    /// child, and a node left without a value or children is pruned.
    Compact,

    /// Clear the value and keep the node as long as it still has children.
    ///
    /// Valueless single-child nodes are allowed to remain; childless valueless
    /// nodes are still pruned.
    Tombstone,
}

/// How [`RadixTrie::complete`](crate::RadixTrie::complete) matches a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixScan {
    /// Standard completion: returns every stored key that starts with the query.
    Anchored,

    /// Also looks for the query at the start of any node label below a
    /// non-matching sibling.
    ///
    /// Matches found this way are reported relative to the node where the query
    /// started matching, not as full keys.
    Segmented,
}

/// Configuration for a radix trie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieConfig {
    /// Reshaping applied when a key is removed.
    pub removal: RemovalStrategy,

    /// Matching used by completion queries.
    pub prefix_scan: PrefixScan,
}

impl TrieConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the removal strategy.
    pub fn with_removal(mut self, removal: RemovalStrategy) -> Self {
        self.removal = removal;
        self
    }

    /// Sets the completion matching mode.
    pub fn with_prefix_scan(mut self, prefix_scan: PrefixScan) -> Self {
        self.prefix_scan = prefix_scan;
        self
    }
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self {
            removal: RemovalStrategy::Compact,
            prefix_scan: PrefixScan::Anchored,
        }
    }
}
