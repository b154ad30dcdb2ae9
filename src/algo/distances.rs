use super::*;

/// All-pairs distance tables obtained by one search per root
pub trait DistanceMatrix: WeightedAdjacency + Sized {
    /// Entry `[u][v]` is the minimum number of edges on a path from `u` to `v` or `None` if `v`
    /// is unreachable from `u`. The diagonal is `0`.
    fn bfs_distance_matrix(&self) -> Vec<Vec<Option<NumNodes>>> {
        self.vertices()
            .map(|u| super::shortest_path::hop_distances(self, u))
            .collect()
    }

    /// Entry `[u][v]` is the minimum cost of a path from `u` to `v` or [`INFINITE_WEIGHT`] if `v`
    /// is unreachable from `u`. The diagonal is `0`.
    ///
    /// # Examples
    /// ```
    /// use mgraphs::{prelude::*, algo::*};
    ///
    /// let g = MatrixGraph::try_new(3, [(1, 2, 5), (2, 3, 7)], true, true).unwrap();
    /// let dist = g.dijkstra_distance_matrix();
    /// assert_eq!(dist[0], vec![0, 5, 12]);
    /// assert_eq!(dist[2], vec![INFINITE_WEIGHT, INFINITE_WEIGHT, 0]);
    /// ```
    #[tracing::instrument(skip_all, level = "debug", fields(n = self.number_of_nodes()))]
    fn dijkstra_distance_matrix(&self) -> Vec<Vec<Weight>> {
        self.vertices()
            .map(|u| super::dijkstra::path_costs(self, u))
            .collect()
    }
}

impl<G> DistanceMatrix for G where G: WeightedAdjacency + Sized {}
