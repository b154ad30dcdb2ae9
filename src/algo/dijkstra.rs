use super::*;

/// Minimum-cost paths for graphs with non-negative weights.
///
/// Unweighted graphs are treated as having unit weights, hence the costs then equal hop
/// distances. Negative weights are not rejected, but the results are meaningless.
pub trait Dijkstra: WeightedAdjacency + Sized {
    /// Returns the minimum total cost of a path from `root` to `target`, `0` if both are equal
    /// and [`INFINITE_WEIGHT`] if `target` is unreachable.
    /// The search stops as soon as `target` is finalized.
    ///
    /// # Errors
    /// Returns `GraphError::OutOfRange` if `root >= n` or `target >= n`.
    ///
    /// # Examples
    /// ```
    /// use mgraphs::{prelude::*, algo::*};
    ///
    /// let g = MatrixGraph::try_new(3, [(1, 2, 5), (2, 3, 7), (1, 3, 20)], false, true).unwrap();
    /// assert_eq!(g.dijkstra(0, 2).unwrap(), 12);
    /// ```
    #[tracing::instrument(skip(self), level = "debug", ret)]
    fn dijkstra(&self, root: Node, target: Node) -> Result<Weight> {
        self.check_node(root)?;
        self.check_node(target)?;

        Ok(DijkstraSearch::new(self, root)
            .find(|&(u, _)| u == target)
            .map_or(INFINITE_WEIGHT, |(_, cost)| cost))
    }

    /// Returns the minimum cost from `root` to every node, [`INFINITE_WEIGHT`] for unreachable
    /// nodes.
    ///
    /// # Errors
    /// Returns `GraphError::OutOfRange` if `root >= n`.
    fn dijkstra_from(&self, root: Node) -> Result<Vec<Weight>> {
        self.check_node(root)?;
        Ok(path_costs(self, root))
    }
}

impl<G> Dijkstra for G where G: WeightedAdjacency + Sized {}

/// ** Panics if `root >= n` **
pub(super) fn path_costs<G: WeightedAdjacency>(graph: &G, root: Node) -> Vec<Weight> {
    let mut costs = vec![INFINITE_WEIGHT; graph.len()];
    for (u, cost) in DijkstraSearch::new(graph, root) {
        costs[u as usize] = cost;
    }
    costs
}
