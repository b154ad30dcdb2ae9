/*!
# Graph Representation

Every graph in this crate is a [`MatrixGraph`]: a dense weight matrix that serves as ground
truth, plus sorted out-/in-neighborhoods ([`SortedNeighborhood`]) for cheap iteration.

Graphs are built once, either from an edge list ([`EdgeListBuilder`]), from an explicit matrix
([`MatrixGraph::try_from_matrix`]) or randomly (see [`gens`](crate::gens)), and are immutable
afterwards.
*/

use crate::{error::invalid_unless, ops::*, *};

mod builder;
mod matrix;
mod neighborhood;

pub use builder::*;
pub use matrix::*;
pub use neighborhood::*;
