use ahash::{HashMap, HashMapExt};
use itertools::Itertools;
use serde::{Deserialize, Serialize, Serializer};

use super::{Edge, Vertex};

/// Adjacency lists of a spanning tree.
///
/// Neighbor order is kept exactly as read, it decides which branch the
/// search explores first. A vertex without an entry simply has no neighbors.
/// Serialized with vertices in sorted order.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Tree {
    adjacency: HashMap<Vertex, Vec<Vertex>>,
}

impl Tree {
    pub fn new() -> Self {
        Tree {
            adjacency: HashMap::new(),
        }
    }

    pub fn neighbors(&self, vertex: &str) -> &[Vertex] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains(&self, vertex: &str) -> bool {
        self.adjacency.contains_key(vertex)
    }

    pub fn has_edge(&self, edge: &Edge) -> bool {
        self.neighbors(&edge.tail).contains(&edge.head)
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.adjacency.len() as u32
    }

    /// Number of stored adjacency entries, an undirected edge counts twice.
    pub fn number_of_edges(&self) -> u32 {
        self.adjacency
            .values()
            .map(|neighbors| neighbors.len() as u32)
            .sum()
    }

    pub fn insert_edge(&mut self, edge: &Edge) {
        self.adjacency.entry(edge.head.clone()).or_default();
        self.adjacency
            .entry(edge.tail.clone())
            .or_default()
            .push(edge.head.clone());
    }

    pub fn insert_edge_bidirectional(&mut self, edge: &Edge) {
        self.insert_edge(edge);
        self.insert_edge(&edge.reversed());
    }
}

impl Serialize for Tree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.adjacency.iter().sorted_by(|(a, _), (b, _)| a.cmp(b)))
    }
}

impl FromIterator<(Vertex, Vec<Vertex>)> for Tree {
    fn from_iter<I: IntoIterator<Item = (Vertex, Vec<Vertex>)>>(iter: I) -> Self {
        Tree {
            adjacency: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Tree;
    use crate::graphs::Edge;

    #[test]
    fn missing_vertex_has_no_neighbors() {
        let tree = Tree::new();
        assert!(tree.neighbors("A").is_empty());
        assert!(!tree.contains("A"));
    }

    #[test]
    fn keeps_neighbor_order() {
        let tree: Tree = serde_json::from_str(r#"{"A": ["C", "B", "D"]}"#).unwrap();
        assert_eq!(tree.neighbors("A"), ["C", "B", "D"]);
    }

    #[test]
    fn bidirectional_insert() {
        let mut tree = Tree::new();
        tree.insert_edge_bidirectional(&Edge::new("A", "B"));
        tree.insert_edge_bidirectional(&Edge::new("B", "C"));

        assert_eq!(tree.neighbors("B"), ["A", "C"]);
        assert!(tree.has_edge(&Edge::new("C", "B")));
        assert_eq!(tree.number_of_vertices(), 3);
        assert_eq!(tree.number_of_edges(), 4);
    }

    #[test]
    fn serializes_vertices_sorted() {
        let mut tree = Tree::new();
        tree.insert_edge_bidirectional(&Edge::new("C", "B"));
        tree.insert_edge_bidirectional(&Edge::new("B", "A"));

        assert_eq!(
            serde_json::to_string(&tree).unwrap(),
            r#"{"A":["B"],"B":["C","A"],"C":["B"]}"#
        );
    }
}
