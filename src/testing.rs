//! Helpers shared by the test-modules of this crate

use itertools::Itertools;
use rand::Rng;

use crate::prelude::*;

/// Creates a list of at most `m_ub` random records with 1-based endpoints in `1..=n`.
/// Weighted records carry a cost in `1..=20`.
pub fn random_records<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    m_ub: NumEdges,
    weighted: bool,
) -> Vec<EdgeRecord> {
    (0..m_ub)
        .map(|_| {
            let u = rng.random_range(1..=n) as i64;
            let v = rng.random_range(1..=n) as i64;
            if weighted {
                EdgeRecord::from((u, v, rng.random_range(1..=20i64)))
            } else {
                EdgeRecord::from((u, v))
            }
        })
        .collect_vec()
}

/// Creates an undirected graph consisting of a random spanning tree on `n` nodes plus `extra`
/// random edges. All weights are in `1..=20` (or `1` if `weighted` is unset).
pub fn random_connected_graph<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    extra: NumEdges,
    weighted: bool,
) -> MatrixGraph {
    let mut records = (1..n)
        .map(|v| {
            let u = rng.random_range(0..v);
            (u as i64 + 1, v as i64 + 1)
        })
        .collect_vec();
    records.extend((0..extra).map(|_| {
        (
            rng.random_range(1..=n) as i64,
            rng.random_range(1..=n) as i64,
        )
    }));

    let records = records.into_iter().map(|(u, v)| {
        if weighted {
            EdgeRecord::from((u, v, rng.random_range(1..=20i64)))
        } else {
            EdgeRecord::from((u, v))
        }
    });

    EdgeListBuilder::new()
        .nodes(n)
        .directed(false)
        .weighted(weighted)
        .try_build(records.collect_vec())
        .unwrap()
}

/// Builds an undirected, unweighted graph from 0-based edges
pub fn undirected<const N: usize>(n: NumNodes, edges: [(Node, Node); N]) -> MatrixGraph {
    EdgeListBuilder::new()
        .nodes(n)
        .directed(false)
        .try_build_from_edges(edges.map(Edge::from))
        .unwrap()
}

/// Builds a directed, unweighted graph from 0-based edges
pub fn directed<const N: usize>(n: NumNodes, edges: [(Node, Node); N]) -> MatrixGraph {
    EdgeListBuilder::new()
        .nodes(n)
        .directed(true)
        .try_build_from_edges(edges.map(Edge::from))
        .unwrap()
}
