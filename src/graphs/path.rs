use itertools::Itertools;
use serde::Serialize;

use super::{Edge, Tree, Vertex};

/// Represents a request for finding the path between two vertices of a
/// tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathRequest {
    pub source: Vertex,
    pub destination: Vertex,
}

impl PathRequest {
    pub fn new(source: &str, destination: &str) -> PathRequest {
        PathRequest {
            source: source.to_string(),
            destination: destination.to_string(),
        }
    }
}

/// Represents a path in a tree.
///
/// The vertices run from the source to the destination, both inclusive.
/// Paths found by a search are never empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path {
    vertices: Vec<Vertex>,
}

impl Path {
    pub fn single(vertex: &str) -> Path {
        Path {
            vertices: vec![vertex.to_string()],
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn source(&self) -> Option<&str> {
        self.vertices.first().map(String::as_str)
    }

    pub fn destination(&self) -> Option<&str> {
        self.vertices.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn reversed(&self) -> Path {
        Path {
            vertices: self.vertices.iter().rev().cloned().collect(),
        }
    }

    /// Checks that every consecutive pair of vertices is an edge of `tree`.
    pub fn is_walk_in(&self, tree: &Tree) -> bool {
        self.vertices
            .iter()
            .tuple_windows()
            .all(|(tail, head)| tree.has_edge(&Edge::new(tail, head)))
    }
}

impl<S: Into<Vertex>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Path {
            vertices: iter.into_iter().map(Into::into).collect(),
        }
    }
}
