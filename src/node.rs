/*!
# Node Representation

We choose `Node = u32` as the graphs handled here are small enough to be stored as a dense matrix.
Nodes are always numbered `0` to `n - 1`; the 1-based identifiers of input files are converted
when a graph is built (see [`EdgeRecord`](crate::edge::EdgeRecord)).
*/

use fixedbitset::FixedBitSet;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = FixedBitSet;

/// Creates an empty [`NodeBitSet`] with one entry per node of a graph with `n` nodes
pub fn node_bitset(n: NumNodes) -> NodeBitSet {
    FixedBitSet::with_capacity(n as usize)
}
