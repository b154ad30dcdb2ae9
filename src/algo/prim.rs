use super::*;

/// Prim's algorithm for the total weight of a minimum spanning tree
pub trait MinimumSpanningTree: WeightedAdjacency + Sized {
    /// Returns the total weight of a minimum spanning tree, grown from node `0`.
    ///
    /// # Errors
    /// Returns `GraphError::Unreachable` if the graph consists of more than one island.
    ///
    /// # Examples
    /// ```
    /// use mgraphs::{prelude::*, algo::*};
    ///
    /// let g = MatrixGraph::try_new(3, [(1, 2, 5), (2, 3, 7), (1, 3, 20)], false, true).unwrap();
    /// assert_eq!(g.minimum_spanning_tree_cost().unwrap(), 12);
    /// ```
    fn minimum_spanning_tree_cost(&self) -> Result<Weight> {
        self.prim_from(0)
    }

    /// Returns the total weight of a minimum spanning tree grown from `start`.
    ///
    /// The tree is grown along out-edges; for directed graphs the result is thus only a
    /// spanning arborescence rooted at `start` if one exists and need not be minimal.
    ///
    /// # Errors
    /// Returns `GraphError::OutOfRange` if `start >= n` and `GraphError::Unreachable` (naming the
    /// smallest node missing from the tree) if not every node can be attached to the tree.
    #[tracing::instrument(skip(self), level = "debug", ret)]
    fn prim_from(&self, start: Node) -> Result<Weight> {
        self.check_node(start)?;

        let mut search = PrimSearch::new(self, start);
        let total = search
            .by_ref()
            .fold(0 as Weight, |acc, (_, weight)| acc.saturating_add(weight));

        match search.first_unfinalized() {
            None => Ok(total),
            Some(missing) => Err(GraphError::Unreachable {
                from: start,
                to: missing,
            }),
        }
    }
}

impl<G> MinimumSpanningTree for G where G: WeightedAdjacency + Sized {}
