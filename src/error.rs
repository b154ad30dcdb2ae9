/*!
# Errors

All fallible operations of this crate return [`Result`] with a [`GraphError`].

- Construction-time violations (including edge endpoints outside `1..=n`) are reported as
  [`GraphError::InvalidArgument`] and abort the construction; there is no partially-valid graph.
- Query-time violations ([`GraphError::OutOfRange`]) only fail the query; the graph stays usable.
- [`GraphError::Unreachable`] is only raised where no meaningful partial answer exists (spanning
  trees, explicit distance queries). Shortest-path queries otherwise *report* unreachability as an
  empty path or [`INFINITE_WEIGHT`](crate::edge::INFINITE_WEIGHT).
*/

use thiserror::Error;

use crate::node::*;

/// Errors produced by graph construction, queries and IO
#[derive(Error, Debug)]
pub enum GraphError {
    /// Malformed node count, probability or edge record
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A node index outside `[0, n)` was used in a query
    #[error("node {node} is out of range for a graph with {number_of_nodes} nodes")]
    OutOfRange { node: i64, number_of_nodes: NumNodes },

    /// No path exists between the two nodes
    #[error("node {to} is unreachable from node {from}")]
    Unreachable { from: Node, to: Node },

    /// Reading or writing failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Shorthand for [`GraphError::InvalidArgument`]
    pub fn invalid<S: Into<String>>(info: S) -> Self {
        Self::InvalidArgument(info.into())
    }

    /// Shorthand for [`GraphError::OutOfRange`]
    pub fn out_of_range<N: Into<i64>>(node: N, number_of_nodes: NumNodes) -> Self {
        Self::OutOfRange {
            node: node.into(),
            number_of_nodes,
        }
    }
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, GraphError>;

/// Returns early with `GraphError::InvalidArgument` when a condition fails
macro_rules! invalid_unless {
    ($cond : expr, $($info : tt)+) => {
        if !($cond) {
            return Err($crate::error::GraphError::InvalidArgument(format!($($info)+)));
        }
    };
}

pub(crate) use invalid_unless;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            GraphError::out_of_range(7u32, 3).to_string(),
            "node 7 is out of range for a graph with 3 nodes"
        );
        assert_eq!(
            GraphError::Unreachable { from: 0, to: 2 }.to_string(),
            "node 2 is unreachable from node 0"
        );
        assert_eq!(
            GraphError::invalid("p must be in [0, 1]").to_string(),
            "invalid argument: p must be in [0, 1]"
        );
    }

    #[test]
    fn invalid_unless_returns_early() {
        fn check(x: i64) -> Result<i64> {
            invalid_unless!(x > 0, "x must be positive, got {}", x);
            Ok(x)
        }

        assert_eq!(check(3).unwrap(), 3);
        assert!(matches!(check(-1), Err(GraphError::InvalidArgument(msg)) if msg.contains("-1")));
    }
}
