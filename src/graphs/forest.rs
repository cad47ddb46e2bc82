use ahash::HashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize, Serializer};

use super::{Tree, Vertex};

/// One spanning tree per possible source vertex.
///
/// Serialized with roots in sorted order, so equal forests always give the
/// same JSON.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct SpanningForest {
    trees: HashMap<Vertex, Tree>,
}

impl SpanningForest {
    pub fn tree(&self, source: &str) -> Option<&Tree> {
        self.trees.get(source)
    }

    pub fn roots(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.trees.keys()
    }

    pub fn number_of_trees(&self) -> u32 {
        self.trees.len() as u32
    }
}

impl Serialize for SpanningForest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.trees.iter().sorted_by(|(a, _), (b, _)| a.cmp(b)))
    }
}

impl FromIterator<(Vertex, Tree)> for SpanningForest {
    fn from_iter<I: IntoIterator<Item = (Vertex, Tree)>>(iter: I) -> Self {
        SpanningForest {
            trees: iter.into_iter().collect(),
        }
    }
}
