use super::*;

/// Builds a [`MatrixGraph`] from a list of edge records with **1-based** node identifiers.
///
/// The builder treats every record as a directed arc `source -> target`. If the graph is
/// configured as undirected, each arc is mirrored with identical weight; mirroring input that
/// was already mirrored (e.g. by [`PajekReader`](crate::io::PajekReader)) is harmless.
///
/// Records must carry exactly two fields (`source target`) for unweighted graphs and three
/// (`source target cost`) for weighted graphs.
///
/// # Examples
/// ```
/// use mgraphs::prelude::*;
///
/// let graph = EdgeListBuilder::new()
///     .nodes(3)
///     .directed(false)
///     .weighted(true)
///     .try_build([(1, 2, 5), (2, 3, 7)])
///     .unwrap();
///
/// assert_eq!(graph.weight(1, 0).unwrap(), Some(5));
/// assert_eq!(graph.number_of_edges(), 2);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct EdgeListBuilder {
    n: NumNodes,
    directed: bool,
    weighted: bool,
}

impl Default for EdgeListBuilder {
    /// Unweighted arcs with no nodes set
    fn default() -> Self {
        Self {
            n: 0,
            directed: true,
            weighted: false,
        }
    }
}

impl EdgeListBuilder {
    /// Creates a new (default) builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the number of nodes
    pub fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }

    /// Updates whether edges are one-way
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Updates whether records carry a cost as third field
    pub fn weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    /// Returns the number of fields every record must carry
    pub fn expected_arity(&self) -> usize {
        if self.weighted { 3 } else { 2 }
    }

    /// Validates a single record and converts it into a 0-based arc.
    ///
    /// # Errors
    /// Returns `GraphError::InvalidArgument` if the record has the wrong number of fields,
    /// references a node outside `1..=n` or carries [`INFINITE_WEIGHT`] as cost.
    pub fn parse_record(&self, record: &EdgeRecord) -> Result<WeightedEdge> {
        let fields = record.fields();
        invalid_unless!(
            fields.len() == self.expected_arity(),
            "Edge record {:?} has {} fields, expected {}",
            fields,
            fields.len(),
            self.expected_arity()
        );

        let u = self.to_node(fields[0])?;
        let v = self.to_node(fields[1])?;
        let weight = if self.weighted { fields[2] } else { 1 };
        check_weight(weight)?;

        Ok(WeightedEdge(u, v, weight))
    }

    fn to_node(&self, id: i64) -> Result<Node> {
        invalid_unless!(
            (1..=self.n as i64).contains(&id),
            "Edge record references node {} but only nodes 1..={} exist",
            id,
            self.n
        );
        Ok((id - 1) as Node)
    }

    /// Builds the graph from records with 1-based node identifiers.
    ///
    /// # Errors
    /// Returns `GraphError::InvalidArgument` if `n == 0` or any record is malformed.
    /// No graph is produced in that case.
    pub fn try_build<I, E>(&self, records: I) -> Result<MatrixGraph>
    where
        I: IntoIterator<Item = E>,
        E: Into<EdgeRecord>,
    {
        let mut graph = MatrixGraph::with_nodes(self.n, self.directed, self.weighted)?;
        for record in records {
            graph.register_edge(self.parse_record(&record.into())?);
        }

        self.log_built(&graph);
        Ok(graph)
    }

    /// Builds the graph from already 0-based edges. Unweighted edges may be passed as [`Edge`].
    ///
    /// # Errors
    /// Returns `GraphError::InvalidArgument` if `n == 0`, any endpoint is not in `0..n` or any
    /// weight equals [`INFINITE_WEIGHT`].
    pub fn try_build_from_edges<I, E>(&self, edges: I) -> Result<MatrixGraph>
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge>,
    {
        let mut graph = MatrixGraph::with_nodes(self.n, self.directed, self.weighted)?;
        for edge in edges {
            let edge = edge.into();
            invalid_unless!(
                edge.0 < self.n && edge.1 < self.n,
                "Edge {} references a node outside 0..{}",
                edge.edge(),
                self.n
            );
            check_weight(edge.2)?;
            graph.register_edge(edge);
        }

        self.log_built(&graph);
        Ok(graph)
    }

    fn log_built(&self, graph: &MatrixGraph) {
        tracing::debug!(
            nodes = graph.number_of_nodes(),
            edges = graph.number_of_edges(),
            directed = self.directed,
            weighted = self.weighted,
            "built graph from edge list"
        );
    }
}

/// [`INFINITE_WEIGHT`] marks absent edges and unreachable nodes
fn check_weight(weight: Weight) -> Result<()> {
    invalid_unless!(
        weight != INFINITE_WEIGHT,
        "Edge weight {} is reserved for absent edges",
        weight
    );
    Ok(())
}

impl MatrixGraph {
    /// Shorthand for `EdgeListBuilder::new().nodes(n).directed(directed).weighted(weighted).try_build(records)`
    ///
    /// # Errors
    /// See [`EdgeListBuilder::try_build`].
    pub fn try_new<I, E>(n: NumNodes, records: I, directed: bool, weighted: bool) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<EdgeRecord>,
    {
        EdgeListBuilder::new()
            .nodes(n)
            .directed(directed)
            .weighted(weighted)
            .try_build(records)
    }
}
