#![allow(dead_code)]

use tree_paths::graphs::{Edge, Tree};

pub const TWO_HOP_PAYLOAD: &str = r#"{"A": {"A": ["B"], "B": ["A","C"], "C": ["B"]}}"#;

pub const UNREACHABLE_PAYLOAD: &str = r#"{"A": {"A": ["B"], "B": ["A"], "C": []}}"#;

/// The word ladder tree rooted at "dot":
///
/// ```text
/// hi---hit---hot---hoh---oh
///             |
///      lot--dot--dog
///                / \
///             log   cog
/// ```
pub fn word_tree() -> Tree {
    let mut tree = Tree::new();
    for (tail, head) in [
        ("dot", "hot"),
        ("dot", "lot"),
        ("dot", "dog"),
        ("hot", "hoh"),
        ("hot", "hit"),
        ("hoh", "oh"),
        ("hit", "hi"),
        ("dog", "cog"),
        ("dog", "log"),
    ] {
        tree.insert_edge_bidirectional(&Edge::new(tail, head));
    }
    tree
}

/// The same tree as [`word_tree`] but with edges pointing away from "dot"
/// only, the way a breadth first search from "dot" records it.
pub fn directed_word_tree() -> Tree {
    serde_json::from_str(
        r#"{
            "dog": ["cog", "log"],
            "dot": ["hot", "lot", "dog"],
            "hit": ["hi"],
            "hoh": ["oh"],
            "hot": ["hoh", "hit"]
        }"#,
    )
    .unwrap()
}
