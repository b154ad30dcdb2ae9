/*!
# IO

Utilities for reading graphs from and writing matrices to text.

## Input Formats

- **Pajek**: a `*Vertices N` line, followed by `*Arcs` (directed) or `*Edges` (undirected) and one
  record `source target [cost]` per line with 1-based node identifiers. See [`PajekReader`].

## Output Formats

- **Matrix**: space-separated rows with right-justified columns; infinite entries are rendered
  as `inf`. Used for adjacency and distance matrices. See [`MatrixWriter`].

## Traits

To generalize over reading/writing, [`GraphReader`] and [`GraphWriter`] are implemented by readers
and writers for a specific format. All errors are reported as [`GraphError`]: failing IO as
[`GraphError::Io`], malformed content as [`GraphError::InvalidArgument`].
*/

pub mod matrix;
pub mod pajek;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::prelude::*;

pub use matrix::*;
pub use pajek::*;

/// Trait for types that can read graphs in a specific format.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`] instance and a convenience wrapper to read directly
/// from files.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if reading fails or the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered reader.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered writer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Shorthand for creating a new parse error
macro_rules! parse_error {
    ($line_no : expr, $($info : tt)+) => {
        $crate::error::GraphError::InvalidArgument(format!("line {}: {}", $line_no, format!($($info)+)))
    };
}

/// Shorthand for returning a parse error early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $line_no : expr, $($info : tt)+) => {
        if !($cond) {
            return Err(parse_error!($line_no, $($info)+));
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $line_no : expr, $name : expr) => {{
        let Some(token) = $iterator.next() else {
            return Err(parse_error!($line_no, "Premature end of line when parsing {}.", $name));
        };

        match token.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(parse_error!(
                    $line_no,
                    "Invalid value {:?} found. Cannot parse {}.",
                    token,
                    $name
                ));
            }
        }
    }};
}

use parse_error;
use parse_next_value;
use raise_error_unless;
