/*!
`mgraphs` is a small graph library built around a dense **adjacency matrix** and the classic
textbook algorithms on top of it: traversals, reachability, connected components,
cycle detection, shortest paths and minimum spanning trees.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
Input files and edge records use **1-based** identifiers; they are converted once when the graph is
built. Edge costs are signed integers ([`Weight`]) with [`INFINITE_WEIGHT`] denoting "no edge"
or "unreachable".

A [`MatrixGraph`](crate::repr::MatrixGraph) is either **directed** (an edge `(u, v)` is one-way) or
**undirected** (every edge is stored in both directions), and either **weighted** or
**unweighted** (present edges have unit cost). Graphs are immutable once built.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations, and the
  matrix representation with its builder,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as BFS
  (`graph.bfs(start_node)`), shortest paths (`graph.dijkstra(u, v)`), islands, cycle detection and
  Prim's minimum spanning tree,
- [`gens`] includes the `G(n,p)` random graph generator,
- [`io`] includes a reader for Pajek-style edge lists and a writer for distance matrices.

In most use-cases, `use mgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use mgraphs::{prelude::*, algo::*};

// 1-based records: source, target, cost
let graph = MatrixGraph::try_new(3, [(1, 2, 5), (2, 3, 7), (1, 3, 20)], false, true).unwrap();

assert_eq!(graph.dijkstra(0, 2).unwrap(), 12);
assert_eq!(graph.minimum_spanning_tree_cost().unwrap(), 12);
assert!(graph.has_cycle());
```

# Errors and logging

All fallible operations return [`Result`] with a [`GraphError`]. Algorithms emit
[`tracing`] events and spans; install any subscriber to see them.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use error::{GraphError, Result};
pub use node::*;

/// `mgraphs::prelude` includes definitions for nodes, edges and errors, all basic graph operation
/// traits as well as the matrix representation.
pub mod prelude {
    pub use super::{
        edge::*,
        error::{GraphError, Result},
        node::*,
        ops::*,
        repr::*,
    };
}
