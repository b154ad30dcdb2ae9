use std::ops::Range;

use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        node_bitset(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `Err(GraphError::OutOfRange)` if `u` is not a node of the graph
    fn check_node(&self, u: Node) -> Result<()> {
        if u < self.number_of_nodes() {
            Ok(())
        } else {
            Err(GraphError::out_of_range(u, self.number_of_nodes()))
        }
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph.
    /// Undirected edges `{u, v}` are counted once.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Runtime description of how the edges of a graph are to be interpreted
pub trait GraphType {
    /// Returns *true* if edges are one-way
    fn is_directed(&self) -> bool;

    /// Returns *true* if every edge is mirrored
    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }

    /// Returns *true* if edges carry integer costs instead of unit presence flags
    fn is_weighted(&self) -> bool;
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (out-)neighbors of a given vertex in increasing order.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns an iterator over nodes `v` with edges `(v, u)` in increasing order.
    /// For undirected graphs, this equals [`AdjacencyList::neighbors_of`].
    /// ** Panics if `u >= n` **
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of (outgoing) neighbors of `u`
    /// ** Panics if `u >= n` **
    fn number_of_neighbors_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over all nodes connected to `u` by an edge in either direction.
    /// Nodes connected in both directions are reported once.
    /// ** Panics if `u >= n` **
    fn undirected_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.neighbors_of(u)
            .merge(self.in_neighbors_of(u))
            .dedup()
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns the maximum number of neighbors of any node
    fn max_number_of_neighbors(&self) -> NumNodes {
        self.vertices()
            .map(|u| self.number_of_neighbors_of(u))
            .max()
            .unwrap_or(0)
    }
}

/// Graphs whose out-neighborhoods are stored contiguously
pub trait NeighborsSlice: AdjacencyList {
    /// Returns the sorted out-neighbors of `u` as a slice.
    /// ** Panics if `u >= n` **
    fn as_neighbors_slice(&self, u: Node) -> &[Node];
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the edge (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns *true* if `u` and `v` are connected by at least one edge in some direction.
    /// In a directed graph, `(u, v)` *or* `(v, u)` suffices.
    /// ** Panics if `u >= n || v >= n` **
    fn are_adjacent(&self, u: Node, v: Node) -> bool {
        self.has_edge(u, v) || self.has_edge(v, u)
    }

    /// Returns *true* if a self-loop (u,u) exists.
    /// ** Panics if `u >= n` **
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }

    /// Returns *true* if there exists an edge (u,v) as well as (v,u) in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_bidirected_edge(&self, u: Node, v: Node) -> bool {
        self.has_edge(u, v) && self.has_edge(v, u)
    }
}

/// Access to edge weights. Unweighted graphs report unit weights for present edges.
pub trait WeightedAdjacency: AdjacencyList {
    /// Returns the weight of edge `(u, v)` or `None` if it does not exist.
    /// ** Panics if `u >= n || v >= n` **
    fn weight_of(&self, u: Node, v: Node) -> Option<Weight>;

    /// Like [`WeightedAdjacency::weight_of`] but reports absent edges as [`INFINITE_WEIGHT`].
    /// ** Panics if `u >= n || v >= n` **
    fn weight_or_infinite(&self, u: Node, v: Node) -> Weight {
        self.weight_of(u, v).unwrap_or(INFINITE_WEIGHT)
    }

    /// Returns the sum of all outgoing edge weights of `u`. For unweighted graphs this is the
    /// number of outgoing edges.
    /// ** Panics if `u >= n` **
    fn weighted_degree_of(&self, u: Node) -> Weight {
        self.neighbors_of(u)
            .filter_map(|v| self.weight_of(u, v))
            .fold(0, Weight::saturating_add)
    }

    /// Returns an iterator over `(neighbor, weight)` pairs of the outgoing edges of `u`
    /// ** Panics if `u >= n` **
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.neighbors_of(u)
            .filter_map(move |v| self.weight_of(u, v).map(|w| (v, w)))
    }
}
