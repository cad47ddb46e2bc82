use clap::ValueEnum;
use log::debug;

use crate::{
    error::Result,
    graphs::{Path, PathRequest, Tree},
};

pub mod checked;
pub mod iterative;
pub mod recursive;

/// Depth first search variants over a tree.
///
/// All variants visit neighbors in stored order, never step back to the
/// vertex they came from, and stop at the first path found. Only `Checked`
/// keeps a visited set and can therefore detect cycles.
#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStrategy {
    Recursive,
    #[default]
    Iterative,
    Checked,
}

impl SearchStrategy {
    pub fn find_path(&self, tree: &Tree, request: &PathRequest) -> Result<Option<Path>> {
        debug!(
            "searching {} -> {} with {:?} strategy",
            request.source, request.destination, self
        );
        let path = match self {
            SearchStrategy::Recursive => {
                recursive::find_path(tree, &request.source, &request.destination)
            }
            SearchStrategy::Iterative => {
                iterative::find_path(tree, &request.source, &request.destination)
            }
            SearchStrategy::Checked => {
                checked::find_path(tree, &request.source, &request.destination)?
            }
        };
        Ok(path)
    }
}
