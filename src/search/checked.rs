use ahash::{HashSet, HashSetExt};

use super::iterative::{parent, path_from_stack, Frame};
use crate::{
    error::{Error, Result},
    graphs::{Path, Tree},
};

/// Iterative depth first search that refuses to walk a cycle.
///
/// Stepping back to the parent is allowed, every other edge into an
/// already visited vertex fails with [`Error::MalformedTree`].
pub fn find_path(tree: &Tree, source: &str, destination: &str) -> Result<Option<Path>> {
    if source == destination {
        return Ok(Some(Path::single(source)));
    }

    let mut visited = HashSet::new();
    visited.insert(source);

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
            return Ok(Some(path_from_stack(&stack, destination)));
        }

        if !visited.insert(neighbor.as_str()) {
            return Err(Error::MalformedTree {
                vertex: neighbor.clone(),
            });
        }

        stack.push(Frame::new(tree, neighbor));
    }

    Ok(None)
}
