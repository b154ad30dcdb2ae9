use itertools::Itertools;

use super::*;

/// Reachability and islands (weakly connected components)
pub trait Connectivity: AdjacencyList + Traversal + Sized {
    /// Returns all nodes reachable from `root` (including `root`) in increasing order.
    /// Edges are only followed along their orientation.
    ///
    /// # Errors
    /// Returns `GraphError::OutOfRange` if `root >= n`.
    ///
    /// # Examples
    /// ```
    /// use mgraphs::{prelude::*, algo::*};
    ///
    /// let g = MatrixGraph::try_new(4, [(1, 2), (2, 3)], true, false).unwrap();
    /// assert_eq!(g.reachable_from(0).unwrap(), vec![0, 1, 2]);
    /// assert_eq!(g.reachable_from(2).unwrap(), vec![2]);
    /// ```
    fn reachable_from(&self, root: Node) -> Result<Vec<Node>> {
        Ok(self.dfs(root)?.sorted_unstable().collect())
    }

    /// Returns *true* if there is a directed path from `u` to `v`
    ///
    /// # Errors
    /// Returns `GraphError::OutOfRange` if `u >= n` or `v >= n`.
    fn is_reachable(&self, u: Node, v: Node) -> Result<bool> {
        self.check_node(v)?;
        let mut dfs = self.dfs(u)?;
        Ok(dfs.any(|x| x == v))
    }

    /// Returns an iterator over the islands of the graph. An island is a maximal set of nodes that
    /// are connected if edge orientation is ignored. Each island is emitted in DFS order starting
    /// at its smallest node; islands are emitted in increasing order of their smallest node.
    fn islands(&self) -> Islands<'_, Self> {
        Islands::new(self)
    }

    /// Returns the sizes of all islands in decreasing order
    ///
    /// # Examples
    /// ```
    /// use mgraphs::{prelude::*, algo::*};
    ///
    /// let g = MatrixGraph::try_new(4, [(1, 2), (2, 3)], true, false).unwrap();
    /// assert_eq!(g.island_sizes(), vec![3, 1]);
    /// ```
    fn island_sizes(&self) -> Vec<NumNodes> {
        let sizes = self
            .islands()
            .map(|island| island.len() as NumNodes)
            .sorted_unstable_by(|a, b| b.cmp(a))
            .collect_vec();

        tracing::debug!(islands = sizes.len(), "computed island sizes");
        sizes
    }

    /// Returns the number of islands
    fn number_of_islands(&self) -> NumNodes {
        self.islands().count() as NumNodes
    }

    /// Returns *true* if the graph consists of a single island
    fn is_connected(&self) -> bool {
        self.islands().nth(1).is_none()
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Sized {}

/// Iterator over the islands of a graph.
/// Runs a single direction-agnostic DFS that is restarted at the smallest unvisited node
/// whenever it runs dry.
pub struct Islands<'a, G>
where
    G: AdjacencyList,
{
    dfs: DFS<'a, G>,
}

impl<'a, G> Islands<'a, G>
where
    G: AdjacencyList,
{
    /// Creates the iterator for a graph
    /// ** Panics if the graph has no nodes **
    pub fn new(graph: &'a G) -> Self {
        assert!(
            !graph.is_empty(),
            "Can't iterate islands in a graph with no nodes!"
        );
        Self {
            dfs: DFS::new(graph, 0).ignoring_direction(),
        }
    }
}

impl<G> Iterator for Islands<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let island = self.dfs.by_ref().collect_vec();
            if !island.is_empty() {
                return Some(island);
            }

            if !self.dfs.try_restart_at_unvisited() {
                return None;
            }
        }
    }
}
