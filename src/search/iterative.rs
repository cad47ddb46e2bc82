use std::slice::Iter;

use crate::graphs::{Path, Tree, Vertex};

/// A vertex on the current branch together with the neighbors still to be
/// explored from it.
pub(crate) struct Frame<'a> {
    pub vertex: &'a str,
    pub neighbors: Iter<'a, Vertex>,
}

impl<'a> Frame<'a> {
    pub fn new(tree: &'a Tree, vertex: &'a str) -> Self {
        Frame {
            vertex,
            neighbors: tree.neighbors(vertex).iter(),
        }
    }
}

/// Vertex that the top frame was entered from, if any.
pub(crate) fn parent<'a>(stack: &[Frame<'a>]) -> Option<&'a str> {
    stack
        .len()
        .checked_sub(2)
        .map(|index| stack[index].vertex)
}

/// Builds the path from the frames on the stack followed by `destination`.
pub(crate) fn path_from_stack(stack: &[Frame], destination: &str) -> Path {
    stack
        .iter()
        .map(|frame| frame.vertex)
        .chain(std::iter::once(destination))
        .collect()
}

/// Finds the path from `source` to `destination` by depth first search with
/// an explicit stack.
///
/// Explores neighbors in the same order as the recursive search and returns
/// the same path, but does not consume call stack. A cycle reachable from
/// `source` keeps the search running forever.
pub fn find_path(tree: &Tree, source: &str, destination: &str) -> Option<Path> {
    if source == destination {
        return Some(Path::single(source));
    }

    let mut stack = vec![Frame::new(tree, source)];

    while let Some(frame) = stack.last_mut() {
        let Some(neighbor) = frame.neighbors.next() else {
            stack.pop();
            continue;
        };

        if Some(neighbor.as_str()) == parent(&stack) {
            continue;
        }

        if neighbor == destination {
            return Some(path_from_stack(&stack, destination));
        }

        stack.push(Frame::new(tree, neighbor));
    }

    None
}
