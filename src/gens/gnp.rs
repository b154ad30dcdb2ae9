use crate::{error::invalid_unless, gens::*, utils::*};

/// `G(n,p)` generator for undirected graphs without self-loops.
///
/// For every unordered pair `(i, j)` with `i > j` exactly one uniform value in `[0, 1)` is drawn;
/// the edge `{i, j}` exists iff the draw **exceeds** `p`. Hence `p = 1.0` always yields the empty
/// graph and `p = 0.0` always yields the complete graph. Both corner cases are generated without
/// drawing any random values.
///
/// # Examples
/// ```
/// use mgraphs::{prelude::*, gens::*};
///
/// let mut rng = rand::rng();
/// let graph = Gnp::new().nodes(4).prob(0.0).try_build(&mut rng).unwrap();
/// assert_eq!(graph.number_of_edges(), 6);
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    p: Option<f64>,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p`. Validity is checked when generating.
    pub fn prob(mut self, prob: f64) -> Self {
        self.p = Some(prob);
        self
    }

    fn validated_prob(&self) -> Result<f64> {
        invalid_unless!(self.n > 0, "At least one node must be generated");
        match self.p {
            None => Err(GraphError::invalid("Probability of Gnp was not set")),
            Some(p) if p.is_valid_probability() => Ok(p),
            Some(p) => Err(GraphError::invalid(format!(
                "The value {p} is not a valid probability in [0, 1]"
            ))),
        }
    }
}

impl NumNodesGen for Gnp {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl GraphGenerator for Gnp {
    fn stream<'a, R>(&self, rng: &'a mut R) -> Result<impl Iterator<Item = Edge> + 'a>
    where
        R: Rng,
    {
        let p = self.validated_prob()?;
        let n = self.n;

        // One draw per unordered pair; the mirrored cell is set by the undirected graph
        Ok((0..n)
            .flat_map(|i| (0..i).map(move |j| Edge(i, j)))
            .filter(move |_| p < 1.0 && (p == 0.0 || rng.random::<f64>() > p)))
    }

    #[tracing::instrument(skip(self, rng), fields(n = self.n, p = ?self.p))]
    fn try_build<R>(&self, rng: &mut R) -> Result<MatrixGraph>
    where
        R: Rng,
    {
        EdgeListBuilder::new()
            .nodes(self.n)
            .directed(false)
            .weighted(false)
            .try_build_from_edges(self.stream(rng)?)
    }
}
