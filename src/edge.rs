use std::fmt::{Debug, Display};

use smallvec::SmallVec;

use crate::Node;

/// An edge is defined by two nodes/endpoints.
/// Whether an edge is directed is decided by the graph storing it.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// Integer cost attached to an edge. Unweighted graphs store a weight of `1` for every edge.
pub type Weight = i64;

/// Reserved weight denoting "no edge" in matrix views of weighted graphs and "unreachable" in
/// cost queries. Accumulated costs saturate at this value.
pub const INFINITE_WEIGHT: Weight = Weight::MAX;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Attaches a weight to the edge
    pub fn with_weight(self, weight: Weight) -> WeightedEdge {
        WeightedEdge(self.0, self.1, weight)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// A validated, 0-based arc `(source, target, weight)`
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeightedEdge(pub Node, pub Node, pub Weight);

impl WeightedEdge {
    /// Drops the weight
    pub fn edge(&self) -> Edge {
        Edge(self.0, self.1)
    }

    /// Returns the weight of the edge
    pub fn weight(&self) -> Weight {
        self.2
    }
}

impl From<Edge> for WeightedEdge {
    /// Unweighted edges carry unit weight
    fn from(value: Edge) -> Self {
        value.with_weight(1)
    }
}

/// A raw edge record as supplied by an input parser: `source target [weight]` with **1-based**
/// node identifiers.
///
/// Records are not validated on creation; their arity and node range are checked by
/// [`EdgeListBuilder`](crate::repr::EdgeListBuilder) against the graph being built.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EdgeRecord(SmallVec<[i64; 3]>);

impl EdgeRecord {
    /// Creates a record from its fields
    pub fn new<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        Self(fields.into_iter().collect())
    }

    /// Returns all fields of the record
    pub fn fields(&self) -> &[i64] {
        &self.0
    }

    /// Returns the number of fields
    pub fn arity(&self) -> usize {
        self.0.len()
    }

    /// Returns the record with source and target swapped. Any further fields are kept as is.
    pub fn reversed(&self) -> Self {
        let mut fields = self.0.clone();
        if fields.len() >= 2 {
            fields.swap(0, 1);
        }
        Self(fields)
    }
}

impl From<(i64, i64)> for EdgeRecord {
    fn from(value: (i64, i64)) -> Self {
        Self::new([value.0, value.1])
    }
}

impl From<(i64, i64, i64)> for EdgeRecord {
    fn from(value: (i64, i64, i64)) -> Self {
        Self::new([value.0, value.1, value.2])
    }
}

impl From<&[i64]> for EdgeRecord {
    fn from(value: &[i64]) -> Self {
        Self::new(value.iter().copied())
    }
}

impl From<Vec<i64>> for EdgeRecord {
    fn from(value: Vec<i64>) -> Self {
        Self::new(value)
    }
}

impl From<&EdgeRecord> for EdgeRecord {
    fn from(value: &EdgeRecord) -> Self {
        value.clone()
    }
}
