/*!
# Graph Generators

Random graph generators following a builder pattern:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using setter methods (e.g., `.nodes(n).prob(p)`).
3. Generate edges via `generate()` / `stream()` or a full graph via `try_build()`.

The [`RandomGraph`] trait exposes the generators directly as constructors on [`MatrixGraph`].

Supported models:
- G(n,p): Erdős–Rényi model, where `p` is the probability that a pair stays **unconnected**
*/

use rand::Rng;

use crate::prelude::*;

mod gnp;

pub use gnp::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen: Sized {
    /// Sets the number of nodes in the graph generator.
    fn set_nodes(&mut self, n: NumNodes);

    /// Sets the number of nodes in the graph generator.
    fn nodes(mut self, n: NumNodes) -> Self {
        self.set_nodes(n);
        self
    }
}

/// General trait for a configurable random edge generator.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    ///
    /// # Errors
    /// Returns `GraphError::InvalidArgument` if the generator is misconfigured.
    fn generate<R>(&self, rng: &mut R) -> Result<Vec<Edge>>
    where
        R: Rng,
    {
        Ok(self.stream(rng)?.collect())
    }

    /// Creates a lazy iterator (stream) over generated edges.
    ///
    /// # Errors
    /// Returns `GraphError::InvalidArgument` if the generator is misconfigured.
    fn stream<'a, R>(&self, rng: &'a mut R) -> Result<impl Iterator<Item = Edge> + 'a>
    where
        R: Rng;

    /// Generates a full graph from the generated edges.
    ///
    /// # Errors
    /// Returns `GraphError::InvalidArgument` if the generator is misconfigured.
    fn try_build<R>(&self, rng: &mut R) -> Result<MatrixGraph>
    where
        R: Rng;
}

/// Trait for building full graph instances from common random models.
pub trait RandomGraph: Sized {
    /// Creates a random undirected, unweighted `G(n,p)` graph in which every pair `{u, v}` with
    /// `u != v` is connected iff a uniform draw exceeds `p`.
    ///
    /// # Errors
    /// Returns `GraphError::InvalidArgument` if `n == 0` or `p` is not in `[0, 1]`.
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Result<Self>
    where
        R: Rng;
}

impl RandomGraph for MatrixGraph {
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Result<Self>
    where
        R: Rng,
    {
        Gnp::new().nodes(n).prob(p).try_build(rng)
    }
}
