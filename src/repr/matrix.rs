use super::*;

/// A graph stored as a dense `n x n` matrix of optional weights plus sorted out- and
/// in-neighborhoods for `O(degree)` iteration.
///
/// The matrix is the ground truth; the neighborhoods are a derived index that always equals
/// `{ v : matrix[u][v].is_some() }` (resp. the transposed relation for in-neighborhoods).
///
/// A `MatrixGraph` can only be obtained from a builder ([`EdgeListBuilder`],
/// [`MatrixGraph::try_from_matrix`] or a generator in [`gens`](crate::gens)) and is immutable
/// afterwards. It is therefore safe to share between threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatrixGraph {
    matrix: Vec<Option<Weight>>,
    out_nbs: Vec<SortedNeighborhood>,
    in_nbs: Vec<SortedNeighborhood>,
    num_edges: NumEdges,
    directed: bool,
    weighted: bool,
}

impl MatrixGraph {
    /// Creates a graph with `n` singleton nodes. Neighborhoods exist for every node from the start.
    pub(crate) fn with_nodes(n: NumNodes, directed: bool, weighted: bool) -> Result<Self> {
        invalid_unless!(n > 0, "A graph requires at least one node");
        let len = n as usize;
        let cells = len
            .checked_mul(len)
            .ok_or_else(|| GraphError::invalid(format!("{n} nodes do not fit into a matrix")))?;

        Ok(Self {
            matrix: vec![None; cells],
            out_nbs: vec![SortedNeighborhood::new(); len],
            in_nbs: vec![SortedNeighborhood::new(); len],
            num_edges: 0,
            directed,
            weighted,
        })
    }

    /// Registers the edge in matrix and neighborhoods (mirrored for undirected graphs).
    /// Registering an existing edge overwrites its weight.
    /// Unweighted graphs ignore the given weight and store `1`.
    /// ** Panics if `u >= n || v >= n` **
    pub(crate) fn register_edge(&mut self, WeightedEdge(u, v, weight): WeightedEdge) {
        let weight = if self.weighted { weight } else { 1 };
        let is_new = self.matrix[self.index(u, v)].is_none();

        self.set_arc(u, v, weight);
        if !self.directed {
            self.set_arc(v, u, weight);
        }

        if is_new {
            self.num_edges += 1;
        }
    }

    fn set_arc(&mut self, u: Node, v: Node, weight: Weight) {
        let idx = self.index(u, v);
        self.matrix[idx] = Some(weight);
        self.out_nbs[u as usize].try_add_neighbor(v);
        self.in_nbs[v as usize].try_add_neighbor(u);
    }

    #[inline]
    fn index(&self, u: Node, v: Node) -> usize {
        u as usize * self.out_nbs.len() + v as usize
    }

    /// Builds a graph from an explicit square matrix.
    ///
    /// For unweighted graphs, `0` denotes "no edge" and any other value an edge.
    /// For weighted graphs, [`INFINITE_WEIGHT`] denotes "no edge" so that zero-cost edges can
    /// be expressed. Undirected graphs require a symmetric matrix.
    ///
    /// # Errors
    /// Returns `GraphError::InvalidArgument` if the matrix is empty, not square or (for
    /// undirected graphs) not symmetric.
    ///
    /// # Examples
    /// ```
    /// use mgraphs::prelude::*;
    ///
    /// let graph = MatrixGraph::try_from_matrix(&[[0, 1], [1, 0]], false, false).unwrap();
    /// assert!(graph.adjacent(0, 1).unwrap());
    /// assert_eq!(graph.number_of_edges(), 1);
    /// ```
    pub fn try_from_matrix<R>(rows: &[R], directed: bool, weighted: bool) -> Result<Self>
    where
        R: AsRef<[Weight]>,
    {
        let n = rows.len();
        invalid_unless!(
            NumNodes::try_from(n).is_ok(),
            "Matrix with {} rows has too many nodes",
            n
        );
        let mut graph = Self::with_nodes(n as NumNodes, directed, weighted)?;

        for (u, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            invalid_unless!(
                row.len() == n,
                "Row {} has {} entries but the matrix has {} rows",
                u,
                row.len(),
                n
            );

            for (v, &entry) in row.iter().enumerate() {
                let present = if weighted {
                    entry != INFINITE_WEIGHT
                } else {
                    entry != 0
                };

                if !directed {
                    let mirrored = rows[v].as_ref().get(u).copied();
                    invalid_unless!(
                        mirrored == Some(entry),
                        "Matrix of an undirected graph is not symmetric at ({}, {})",
                        u,
                        v
                    );
                    if v < u {
                        continue;
                    }
                }

                if present {
                    graph.register_edge(WeightedEdge(u as Node, v as Node, entry));
                }
            }
        }

        tracing::debug!(
            nodes = graph.number_of_nodes(),
            edges = graph.number_of_edges(),
            directed,
            weighted,
            "built graph from matrix"
        );

        Ok(graph)
    }

    /// Returns the sum of all outgoing edge weights of `u` (the number of outgoing edges for
    /// unweighted graphs).
    ///
    /// # Errors
    /// Returns `GraphError::OutOfRange` if `u >= n`.
    pub fn degree(&self, u: Node) -> Result<Weight> {
        self.check_node(u)?;
        Ok(self.weighted_degree_of(u))
    }

    /// Returns the sorted out-neighbors of `u`.
    ///
    /// # Errors
    /// Returns `GraphError::OutOfRange` if `u >= n`.
    pub fn neighbors(&self, u: Node) -> Result<&[Node]> {
        self.check_node(u)?;
        Ok(self.out_nbs[u as usize].as_slice())
    }

    /// Returns *true* if `u` and `v` are connected by an edge in at least one direction.
    ///
    /// # Errors
    /// Returns `GraphError::OutOfRange` if `u >= n` or `v >= n`.
    pub fn adjacent(&self, u: Node, v: Node) -> Result<bool> {
        self.check_node(u)?;
        self.check_node(v)?;
        Ok(self.are_adjacent(u, v))
    }

    /// Returns the weight of edge `(u, v)` or `None` if there is no such edge.
    ///
    /// # Errors
    /// Returns `GraphError::OutOfRange` if `u >= n` or `v >= n`.
    pub fn weight(&self, u: Node, v: Node) -> Result<Option<Weight>> {
        self.check_node(u)?;
        self.check_node(v)?;
        Ok(self.weight_of(u, v))
    }

    /// Returns both the degree and the sorted out-neighbors of `u`.
    ///
    /// # Errors
    /// Returns `GraphError::OutOfRange` if `u >= n`.
    pub fn vertex_info(&self, u: Node) -> Result<(Weight, &[Node])> {
        Ok((self.degree(u)?, self.neighbors(u)?))
    }

    /// Returns *true* if at least one matrix entry denotes an edge
    pub fn has_any_edge(&self) -> bool {
        self.num_edges > 0
    }

    /// Returns an iterator over the rows of the underlying matrix
    pub fn matrix_rows(&self) -> impl Iterator<Item = &[Option<Weight>]> + '_ {
        self.matrix.chunks_exact(self.len())
    }

    /// Returns the matrix in display form: unweighted graphs use `0/1` presence flags, weighted
    /// graphs use the edge weight and [`INFINITE_WEIGHT`] for absent edges.
    pub fn adjacency_matrix(&self) -> Vec<Vec<Weight>> {
        let absent = if self.weighted { INFINITE_WEIGHT } else { 0 };
        self.matrix_rows()
            .map(|row| row.iter().map(|w| w.unwrap_or(absent)).collect())
            .collect()
    }
}

impl GraphNodeOrder for MatrixGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.out_nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for MatrixGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl GraphType for MatrixGraph {
    fn is_directed(&self) -> bool {
        self.directed
    }

    fn is_weighted(&self) -> bool {
        self.weighted
    }
}

impl AdjacencyList for MatrixGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.out_nbs[u as usize].neighbors()
    }

    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.in_nbs[u as usize].neighbors()
    }

    fn number_of_neighbors_of(&self, u: Node) -> NumNodes {
        self.out_nbs[u as usize].num_of_neighbors()
    }
}

impl NeighborsSlice for MatrixGraph {
    fn as_neighbors_slice(&self, u: Node) -> &[Node] {
        self.out_nbs[u as usize].as_slice()
    }
}

impl AdjacencyTest for MatrixGraph {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        assert!(v < self.number_of_nodes());
        self.matrix[self.index(u, v)].is_some()
    }
}

impl WeightedAdjacency for MatrixGraph {
    fn weight_of(&self, u: Node, v: Node) -> Option<Weight> {
        assert!(v < self.number_of_nodes());
        self.matrix[self.index(u, v)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn neighborhoods_match_matrix() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [1 as NumNodes, 5, 20, 50] {
            for directed in [false, true] {
                for weighted in [false, true] {
                    for _ in 0..5 {
                        let records = random_records(rng, n, n * 3, weighted);
                        let graph = EdgeListBuilder::new()
                            .nodes(n)
                            .directed(directed)
                            .weighted(weighted)
                            .try_build(records.iter())
                            .unwrap();

                        for (u, row) in graph.matrix_rows().enumerate() {
                            let present = row
                                .iter()
                                .positions(|w| w.is_some())
                                .map(|v| v as Node)
                                .collect_vec();
                            assert_eq!(graph.neighbors(u as Node).unwrap(), present.as_slice());

                            for v in graph.vertices() {
                                assert_eq!(
                                    graph.in_neighbors_of(v).contains(&(u as Node)),
                                    row[v as usize].is_some()
                                );
                            }
                        }

                        assert_eq!(
                            graph.edges(graph.is_undirected()).count(),
                            graph.number_of_edges() as usize
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn undirected_adjacency_is_symmetric() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let records = random_records(rng, 30, 90, true);
        let graph = EdgeListBuilder::new()
            .nodes(30)
            .directed(false)
            .weighted(true)
            .try_build(records)
            .unwrap();

        for (u, v) in graph.vertices().cartesian_product(graph.vertices()) {
            assert_eq!(graph.adjacent(u, v).unwrap(), graph.adjacent(v, u).unwrap());
            assert_eq!(graph.weight_of(u, v), graph.weight_of(v, u));
        }
    }

    #[test]
    fn directed_adjacency_in_either_direction() {
        let graph = EdgeListBuilder::new()
            .nodes(3)
            .try_build([(1, 2)])
            .unwrap();

        assert!(graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 0));
        assert!(graph.adjacent(1, 0).unwrap());
        assert!(!graph.adjacent(0, 2).unwrap());
        assert!(!graph.has_bidirected_edge(0, 1));
    }

    #[test]
    fn queries_and_range_errors() {
        let graph = EdgeListBuilder::new()
            .nodes(3)
            .directed(false)
            .weighted(true)
            .try_build([(1, 2, 5), (2, 3, 7), (1, 3, 20)])
            .unwrap();

        assert_eq!(graph.degree(0).unwrap(), 25);
        assert_eq!(graph.degree(1).unwrap(), 12);
        assert_eq!(graph.neighbors(1).unwrap(), &[0, 2]);
        assert_eq!(graph.weight(2, 0).unwrap(), Some(20));
        assert_eq!(graph.vertex_info(2).unwrap(), (27, &[0, 1][..]));
        assert!(graph.has_any_edge());
        assert_eq!(graph.number_of_edges(), 3);

        assert!(matches!(
            graph.degree(3),
            Err(GraphError::OutOfRange {
                node: 3,
                number_of_nodes: 3
            })
        ));
        assert!(graph.neighbors(17).is_err());
        assert!(graph.adjacent(0, 3).is_err());

        // the graph remains usable after a failed query
        assert_eq!(graph.degree(2).unwrap(), 27);
    }

    #[test]
    fn adjacency_matrix_views() {
        let unweighted = EdgeListBuilder::new()
            .nodes(3)
            .try_build([(1, 2), (3, 3)])
            .unwrap();
        assert_eq!(
            unweighted.adjacency_matrix(),
            vec![vec![0, 1, 0], vec![0, 0, 0], vec![0, 0, 1]]
        );

        let weighted = EdgeListBuilder::new()
            .nodes(2)
            .weighted(true)
            .try_build([(1, 2, 0)])
            .unwrap();
        assert_eq!(
            weighted.adjacency_matrix(),
            vec![vec![INFINITE_WEIGHT, 0], vec![INFINITE_WEIGHT, INFINITE_WEIGHT]]
        );
        // a zero-cost edge is still an edge
        assert!(weighted.has_edge(0, 1));
        assert_eq!(weighted.degree(0).unwrap(), 0);
    }

    #[test]
    fn from_matrix() {
        let graph =
            MatrixGraph::try_from_matrix(&[vec![0, 1, 1], vec![1, 0, 0], vec![1, 0, 0]], false, false)
                .unwrap();
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.neighbors(0).unwrap(), &[1, 2]);
        assert_eq!(graph.degree(0).unwrap(), 2);

        let directed =
            MatrixGraph::try_from_matrix(&[[0, 4], [INFINITE_WEIGHT, INFINITE_WEIGHT]], true, true)
                .unwrap();
        assert_eq!(directed.weight_of(0, 0), Some(0));
        assert_eq!(directed.weight_of(0, 1), Some(4));
        assert_eq!(directed.weight_of(1, 0), None);

        assert!(MatrixGraph::try_from_matrix(&[vec![0, 1], vec![0]], true, false).is_err());
        assert!(MatrixGraph::try_from_matrix(&[[0, 1], [0, 0]], false, false).is_err());
        assert!(MatrixGraph::try_from_matrix::<Vec<Weight>>(&[], true, false).is_err());
    }
}
