use radix_dict::{PrefixScan, RadixSet, RadixTrie, RemovalStrategy, TrieConfig, TrieNode};

fn labels<V>(nodes: &[TrieNode<V>]) -> Vec<&str> {
    nodes.iter().map(TrieNode::label).collect()
}

fn set_of(words: &[&str]) -> RadixSet {
    words.iter().map(|word| (*word, ())).collect()
}

#[test]
fn test_group_completions() {
    let mut trie = RadixTrie::new();
    for (i, word) in ["group", "grouper", "groupie", "groupies"].iter().enumerate() {
        trie.insert(word, i).unwrap();
    }

    let mut found = trie.complete("group");
    found.sort();
    assert_eq!(found, vec!["group", "grouper", "groupie", "groupies"]);

    assert_eq!(trie.get("grou"), None);
    assert_eq!(trie.get("groupies"), Some(&3));
    assert!(trie.check_invariants().is_ok());
}

#[test]
fn test_fart_branch_splits() {
    let mut trie = RadixTrie::new();
    trie.insert("fart", "fart").unwrap();
    trie.insert("farts", "farts").unwrap();
    trie.insert("fartso", "fartso").unwrap();

    // Everything so far hangs off a single chain
    assert_eq!(labels(trie.roots()), vec!["fart"]);
    assert_eq!(labels(trie.roots()[0].children()), vec!["s"]);

    trie.insert("farty", "farty").unwrap();

    // "farty" branches off next to "s"
    let fart = &trie.roots()[0];
    assert_eq!(labels(fart.children()), vec!["s", "y"]);
    assert_eq!(labels(fart.children()[0].children()), vec!["o"]);

    assert_eq!(trie.get("fart"), Some(&"fart"));
    assert_eq!(trie.get("farty"), Some(&"farty"));
    assert!(trie.check_invariants().is_ok());
}

#[test]
fn test_goon_deletion_compacts() {
    let mut trie = RadixTrie::new();
    trie.insert("goon", 1).unwrap();
    trie.insert("goons", 2).unwrap();
    trie.insert("goonsquad", 3).unwrap();

    assert!(trie.delete("goon"));

    // No intermediate "goon" node is left behind
    assert_eq!(labels(trie.roots()), vec!["goons"]);
    assert_eq!(labels(trie.roots()[0].children()), vec!["quad"]);
    assert_eq!(trie.node_count(), 2);

    assert_eq!(trie.get("goon"), None);
    assert_eq!(trie.get("goons"), Some(&2));
    assert_eq!(trie.get("goonsquad"), Some(&3));
    assert_eq!(trie.len(), 2);
    assert!(trie.check_invariants().is_ok());
}

#[test]
fn test_delete_nonexistent_leaves_tree_unchanged() {
    let mut trie = set_of(&["groupies", "guppie", "loon", "goon", "goons"]);
    let before = trie.clone();

    assert!(!trie.delete("nonexistent"));
    assert!(!trie.delete("goo"));
    assert!(!trie.delete("g"));
    assert_eq!(trie, before);
}

#[test]
fn test_disjoint_single_characters() {
    let trie = set_of(&["a", "b", "c"]);

    assert_eq!(labels(trie.roots()), vec!["a", "b", "c"]);
    assert!(trie.roots().iter().all(TrieNode::is_leaf));
    assert_eq!(trie.complete("a"), vec!["a"]);
}

#[test]
fn test_redux_sequence() {
    let mut trie: RadixTrie<String> = RadixTrie::new();
    for word in &[
        "groupies", "groupie", "group", "grouper", "grouper", "grouper", "farts", "fartso",
        "farty", "fartsalot", "fartsalsa",
    ] {
        trie.insert(word, word.to_string()).unwrap();
    }
    assert_eq!(trie.len(), 9);

    assert_eq!(trie.get("groupies").map(String::as_str), Some("groupies"));
    assert_eq!(trie.get("farts").map(String::as_str), Some("farts"));
    assert_eq!(trie.get("start"), None);

    assert!(trie.delete("groupie"));
    assert!(trie.delete("farty"));
    assert!(!trie.delete("ooo"));

    assert_eq!(trie.insert("groupies", "whatitdo".to_string()), Ok(Some("groupies".to_string())));
    assert_eq!(trie.insert("fart", "fartfart".to_string()), Ok(None));

    assert_eq!(trie.get("groupies").map(String::as_str), Some("whatitdo"));
    assert_eq!(trie.get("fart").map(String::as_str), Some("fartfart"));
    assert_eq!(trie.get("groupie"), None);
    assert_eq!(
        trie.complete("farts"),
        vec!["farts", "fartsalot", "fartsalsa", "fartso"]
    );
    assert!(trie.check_invariants().is_ok());
}

#[test]
fn test_completion_listing() {
    let trie = set_of(&[
        "groupies",
        "guppie",
        "loon",
        "groupie",
        "group",
        "grouper",
        "guppies",
        "guppiescene",
        "guppiescenesters",
        "guppiers",
        "guppiersers",
        "goon",
        "goons",
        "goonsquad",
    ]);

    assert_eq!(trie.complete("group"), vec!["group", "grouper", "groupie", "groupies"]);
    assert_eq!(trie.complete("goon"), vec!["goon", "goons", "goonsquad"]);
    assert!(trie.complete("fart").is_empty());
    assert_eq!(
        trie.complete("guppies"),
        vec!["guppies", "guppiescene", "guppiescenesters"]
    );

    // Every stored key is listed exactly once
    assert_eq!(trie.keys().count(), trie.len());
    assert_eq!(trie.complete("g").len() + trie.complete("l").len(), trie.len());
}

#[test]
fn test_segmented_completion_listing() {
    let config = TrieConfig::new().with_prefix_scan(PrefixScan::Segmented);
    let mut trie = RadixSet::with_config(config);
    for word in &["guppie", "guppies", "guppiescene", "guppiescenesters", "goon", "goons", "goonsquad"] {
        trie.insert(word, ()).unwrap();
    }

    assert_eq!(trie.complete("goon"), vec!["goon", "goons", "goonsquad"]);

    // Each non-matching branch contributes the segments found below it
    assert_eq!(
        trie.complete("s"),
        vec!["s", "squad", "s", "scene", "scenesters"]
    );
}

#[test]
fn test_tombstone_strategy_keeps_placeholders() {
    let config = TrieConfig::new().with_removal(RemovalStrategy::Tombstone);
    let mut trie = RadixSet::with_config(config);
    for word in &["goon", "goons", "goonsquad"] {
        trie.insert(word, ()).unwrap();
    }
    let nodes_before = trie.node_count();

    assert!(trie.delete("goon"));
    assert_eq!(trie.node_count(), nodes_before);
    assert!(!trie.contains_key("goon"));
    assert!(trie.contains_key("goonsquad"));
    assert_eq!(trie.complete("go"), vec!["goons", "goonsquad"]);
    assert!(trie.check_invariants().is_ok());

    // Re-inserting fills the placeholder without reshaping
    trie.insert("goon", ()).unwrap();
    assert_eq!(trie.node_count(), nodes_before);
}

#[test]
fn test_get_after_deleting_everything() {
    let words = ["a", "ab", "abc", "abd", "b"];
    let mut trie: RadixTrie<usize> = words.iter().map(|w| (*w, w.len())).collect();

    for word in &words {
        assert_eq!(trie.remove(word), Some(word.len()));
        assert!(trie.check_invariants().is_ok());
    }

    assert!(trie.is_empty());
    assert!(trie.roots().is_empty());
    assert_eq!(trie, RadixTrie::new());
}
