use super::*;

/// Hop-minimal paths computed by a breadth-first search in discovery mode
pub trait ShortestPath: AdjacencyList + Sized {
    /// Computes a path from `root` to `target` with the minimum number of edges.
    ///
    /// The search stops as soon as `target` is discovered as an unvisited neighbor of the node
    /// being expanded. Returns the path `[root, ..., target]`, `[root]` if `root == target`,
    /// and an empty path if `target` is unreachable.
    ///
    /// # Errors
    /// Returns `GraphError::OutOfRange` if `root >= n` or `target >= n`.
    ///
    /// # Examples
    /// ```
    /// use mgraphs::{prelude::*, algo::*};
    ///
    /// let g = MatrixGraph::try_new(4, [(1, 2), (2, 3), (3, 4), (1, 3)], false, false).unwrap();
    /// assert_eq!(g.shortest_path(0, 3).unwrap(), vec![0, 2, 3]);
    /// ```
    fn shortest_path(&self, root: Node, target: Node) -> Result<Vec<Node>> {
        self.check_node(target)?;
        let mut bfs = self.bfs_with_predecessor(root)?;

        if root == target {
            return Ok(vec![root]);
        }

        let mut parents: Vec<Node> = self.vertices().collect();
        while let Some(item) = bfs.next() {
            if let Some(p) = item.predecessor() {
                parents[item.item() as usize] = p;
            }

            // `target` was discovered while expanding the node just yielded
            if bfs.did_visit_node(target) {
                parents[target as usize] = item.item();
                return Ok(path_from_parent_array(&parents, target).unwrap_or_default());
            }
        }

        tracing::trace!(root, target, "target not reachable");
        Ok(Vec::new())
    }

    /// Returns the minimum number of edges on a path from `root` to `target`.
    ///
    /// # Errors
    /// Returns `GraphError::OutOfRange` if `root >= n` or `target >= n` and
    /// `GraphError::Unreachable` if there is no such path.
    fn bfs_distance(&self, root: Node, target: Node) -> Result<NumNodes> {
        let path = self.shortest_path(root, target)?;
        if path.is_empty() {
            Err(GraphError::Unreachable {
                from: root,
                to: target,
            })
        } else {
            Ok((path.len() - 1) as NumNodes)
        }
    }

    /// Returns the hop distance from `root` to every node, `None` for unreachable nodes.
    ///
    /// # Errors
    /// Returns `GraphError::OutOfRange` if `root >= n`.
    fn bfs_distances_from(&self, root: Node) -> Result<Vec<Option<NumNodes>>> {
        self.check_node(root)?;
        Ok(hop_distances(self, root))
    }
}

/// ** Panics if `root >= n` **
pub(super) fn hop_distances<G: AdjacencyList>(graph: &G, root: Node) -> Vec<Option<NumNodes>> {
    let mut distances = vec![None; graph.len()];
    distances[root as usize] = Some(0);

    for item in BFSWithPredecessor::new(graph, root).discovering() {
        if let Some(p) = item.predecessor() {
            distances[item.item() as usize] = distances[p as usize].map(|d: NumNodes| d + 1);
        }
    }

    distances
}

impl<G> ShortestPath for G where G: AdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn triangle_prefers_direct_edge() {
        let graph = MatrixGraph::try_new(3, [(1, 2, 5), (2, 3, 7), (1, 3, 20)], false, true).unwrap();
        // hop count only, weights are ignored
        assert_eq!(graph.shortest_path(0, 2).unwrap(), [0, 2]);
        assert_eq!(graph.bfs_distance(0, 2).unwrap(), 1);
    }

    #[test]
    fn trivial_and_unreachable() {
        let graph = MatrixGraph::try_new(4, [(1, 2), (2, 3)], true, false).unwrap();

        assert_eq!(graph.shortest_path(2, 2).unwrap(), [2]);
        assert_eq!(graph.bfs_distance(2, 2).unwrap(), 0);

        assert_eq!(graph.shortest_path(0, 2).unwrap(), [0, 1, 2]);
        assert!(graph.shortest_path(2, 0).unwrap().is_empty());
        assert!(graph.shortest_path(0, 3).unwrap().is_empty());
        assert!(matches!(
            graph.bfs_distance(0, 3),
            Err(GraphError::Unreachable { from: 0, to: 3 })
        ));
        assert!(matches!(
            graph.shortest_path(0, 4),
            Err(GraphError::OutOfRange { node: 4, .. })
        ));
    }

    #[test]
    fn distances_from_root() {
        let graph = directed(5, [(0, 1), (1, 2), (0, 2), (2, 3)]);
        assert_eq!(
            graph.bfs_distances_from(0).unwrap(),
            [Some(0), Some(1), Some(1), Some(2), None]
        );
    }

    #[test]
    fn paths_are_valid_and_minimal() {
        let rng = &mut Pcg64Mcg::seed_from_u64(42);

        for _ in 0..30 {
            let n = rng.random_range(2..30);
            let records = random_records(rng, n, 2 * n, false);
            let graph = MatrixGraph::try_new(n, records, rng.random_bool(0.5), false).unwrap();

            for root in graph.vertices() {
                let distances = graph.bfs_distances_from(root).unwrap();

                for target in graph.vertices() {
                    let path = graph.shortest_path(root, target).unwrap();

                    match distances[target as usize] {
                        None => assert!(path.is_empty()),
                        Some(d) => {
                            assert_eq!(path.len(), d as usize + 1);
                            assert_eq!(path.first(), Some(&root));
                            assert_eq!(path.last(), Some(&target));
                            assert!(path.iter().tuple_windows().all(|(&u, &v)| graph.has_edge(u, v)));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn bfs_never_longer_than_dfs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(43);

        for _ in 0..30 {
            let n = rng.random_range(2..25);
            let graph = random_connected_graph(rng, n, n, false);
            let (root, target) = (rng.random_range(0..n), rng.random_range(0..n));

            let bfs = graph.shortest_path(root, target).unwrap();
            let dfs = graph.dfs_path(root, target).unwrap().unwrap();
            assert!(bfs.len() <= dfs.len());
        }
    }
}
