pub mod forest;
pub mod path;
pub mod tree;

pub use forest::SpanningForest;
pub use path::{Path, PathRequest};
pub use tree::Tree;

/// Vertices are opaque string tokens compared by exact equality.
pub type Vertex = String;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub tail: Vertex,
    pub head: Vertex,
}

impl Edge {
    pub fn new(tail: &str, head: &str) -> Self {
        Edge {
            tail: tail.to_string(),
            head: head.to_string(),
        }
    }

    pub fn reversed(&self) -> Edge {
        Edge {
            tail: self.head.clone(),
            head: self.tail.clone(),
        }
    }
}
