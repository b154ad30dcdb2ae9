use std::{iter::Copied, slice::Iter};

use super::*;

/// Neighborhood of a single node, stored as a sorted `Vec<Node>` without duplicates.
///
/// Sorting keeps the iteration order (and thus every traversal) deterministic and allows
/// membership tests by binary search.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct SortedNeighborhood(Vec<Node>);

impl SortedNeighborhood {
    /// Creates an empty neighborhood
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of neighbors in the Neighborhood
    pub fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    /// Returns an iterator over all neighbors in increasing order
    pub fn neighbors(&self) -> Copied<Iter<'_, Node>> {
        self.0.iter().copied()
    }

    /// Returns *true* if `v` is in the Neighborhood
    pub fn has_neighbor(&self, v: Node) -> bool {
        self.0.binary_search(&v).is_ok()
    }

    /// Tries to add a neighbor to the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before.
    pub fn try_add_neighbor(&mut self, u: Node) -> bool {
        match self.0.binary_search(&u) {
            Ok(_) => true,
            Err(pos) => {
                self.0.insert(pos, u);
                false
            }
        }
    }

    /// Returns a slice-reference of the neighborhood
    pub fn as_slice(&self) -> &[Node] {
        &self.0
    }
}
