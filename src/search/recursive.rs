use crate::graphs::{Path, Tree};

/// Finds the path from `source` to `destination` by recursive depth first
/// search.
///
/// Recursion depth grows with the depth of the tree, and a cycle reachable
/// from `source` recurses until the stack is exhausted.
pub fn find_path(tree: &Tree, source: &str, destination: &str) -> Option<Path> {
    let mut vertices = search(tree, source, None, destination)?;

    // The path was collected while unwinding, destination first.
    vertices.reverse();

    Some(Path::from_iter(vertices))
}

fn search<'a>(
    tree: &'a Tree,
    current: &'a str,
    parent: Option<&str>,
    destination: &str,
) -> Option<Vec<&'a str>> {
    if current == destination {
        return Some(vec![current]);
    }

    for neighbor in tree.neighbors(current) {
        if Some(neighbor.as_str()) == parent {
            continue;
        }
        if let Some(mut vertices) = search(tree, neighbor, Some(current), destination) {
            vertices.push(current);
            return Some(vertices);
        }
    }

    None
}
