/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of [`MatrixGraph`](crate::repr::MatrixGraph).
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use mgraphs::algo::*;
```
and gain access to traversals, reachability, islands, cycle detection, shortest paths and minimum
spanning trees. Most algorithms are implemented as traits on the graph itself; the underlying
searches are available as **iterators**, making it easy to consume results lazily.

All traversals are frontier-based: breadth-first search uses a queue, depth-first search a stack
and Dijkstra/Prim a binary min-heap (see [`NodeSequencer`]).
*/

mod connectivity;
mod cycles;
mod dijkstra;
mod distances;
mod prim;
mod priority;
mod shortest_path;
mod traversal;

use crate::prelude::*;

pub use connectivity::*;
pub use cycles::*;
pub use dijkstra::*;
pub use distances::*;
pub use prim::*;
pub use priority::*;
pub use shortest_path::*;
pub use traversal::*;
