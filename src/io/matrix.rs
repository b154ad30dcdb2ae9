//! # Matrix
//!
//! Writes square (or ragged) tables of numbers as text: one row per line, cells separated by a
//! single space and right-justified to the widest cell of their column. Infinite entries
//! ([`INFINITE_WEIGHT`] or `None`) are rendered as `inf`.
//!
//! ```text
//!  0 5 12
//!  5 0  7
//! 12 7  0
//! ```

use std::io::Write;

use itertools::Itertools;

use super::*;

/// A single entry of a matrix that can be rendered as text
pub trait MatrixCell {
    /// Returns the text of the cell or `None` if the entry is infinite
    fn to_cell(&self) -> Option<String>;
}

impl MatrixCell for Weight {
    fn to_cell(&self) -> Option<String> {
        (*self != INFINITE_WEIGHT).then(|| self.to_string())
    }
}

impl MatrixCell for NumNodes {
    fn to_cell(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl<T: MatrixCell> MatrixCell for Option<T> {
    fn to_cell(&self) -> Option<String> {
        self.as_ref().and_then(MatrixCell::to_cell)
    }
}

/// A writer for matrices of weights or distances
#[derive(Debug, Clone)]
pub struct MatrixWriter {
    /// Text written for infinite entries
    infinity_marker: String,
}

impl Default for MatrixWriter {
    fn default() -> Self {
        Self {
            infinity_marker: "inf".to_string(),
        }
    }
}

impl MatrixWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the text written for infinite entries
    pub fn infinity_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.infinity_marker = marker.into();
        self
    }

    /// Writes all rows of the matrix; every row is terminated by a newline.
    ///
    /// # Errors
    /// Returns `GraphError::Io` if writing fails.
    pub fn try_write_matrix<W, R, C>(&self, rows: &[R], mut writer: W) -> Result<()>
    where
        W: Write,
        R: AsRef<[C]>,
        C: MatrixCell,
    {
        for line in self.format_rows(rows) {
            writeln!(writer, "{line}")?;
        }
        Ok(())
    }

    /// Renders the matrix into a string without a trailing newline
    pub fn render<R, C>(&self, rows: &[R]) -> String
    where
        R: AsRef<[C]>,
        C: MatrixCell,
    {
        self.format_rows(rows).join("\n")
    }

    /// Returns one line per row with every cell padded to the width of its column
    fn format_rows<R, C>(&self, rows: &[R]) -> Vec<String>
    where
        R: AsRef<[C]>,
        C: MatrixCell,
    {
        let cells = rows
            .iter()
            .map(|row| {
                row.as_ref()
                    .iter()
                    .map(|c| c.to_cell().unwrap_or_else(|| self.infinity_marker.clone()))
                    .collect_vec()
            })
            .collect_vec();

        let columns = cells.iter().map(Vec::len).max().unwrap_or(0);
        let widths = (0..columns)
            .map(|j| {
                cells
                    .iter()
                    .filter_map(|row| row.get(j))
                    .map(String::len)
                    .max()
                    .unwrap_or(0)
            })
            .collect_vec();

        cells
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&widths)
                    .map(|(cell, &width)| format!("{cell:>width$}"))
                    .join(" ")
            })
            .collect()
    }
}

/// Writes the adjacency matrix of the graph (see [`MatrixGraph::adjacency_matrix`])
impl GraphWriter<MatrixGraph> for MatrixWriter {
    fn try_write_graph<W: Write>(&self, graph: &MatrixGraph, writer: W) -> Result<()> {
        self.try_write_matrix(&graph.adjacency_matrix(), writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::*;

    #[test]
    fn right_justified_columns() {
        let graph =
            MatrixGraph::try_new(3, [(1, 2, 5), (2, 3, 7), (1, 3, 20)], false, true).unwrap();
        let text = MatrixWriter::new().render(&graph.dijkstra_distance_matrix());
        assert_eq!(text, " 0 5 12\n 5 0  7\n12 7  0");
    }

    #[test]
    fn infinity_marker() {
        let graph = MatrixGraph::try_new(3, [(1, 2, 4)], true, true).unwrap();

        let text = MatrixWriter::new().render(&graph.dijkstra_distance_matrix());
        assert_eq!(text, "  0   4 inf\ninf   0 inf\ninf inf   0");

        let text = MatrixWriter::new()
            .infinity_marker("-")
            .render(&graph.bfs_distance_matrix());
        assert_eq!(text, "0 1 -\n- 0 -\n- - 0");
    }

    #[test]
    fn adjacency_matrix() {
        let graph = MatrixGraph::try_new(2, [(1, 2)], false, false).unwrap();
        let mut buffer = Vec::new();
        MatrixWriter::new().try_write_graph(&graph, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "0 1\n1 0\n");
    }

    #[test]
    fn render_matches_written_text() {
        let graph = MatrixGraph::try_new(3, [(1, 2, 4), (3, 3, 0)], true, true).unwrap();
        let writer = MatrixWriter::new();

        let mut buffer = Vec::new();
        writer.try_write_graph(&graph, &mut buffer).unwrap();
        let written = String::from_utf8(buffer).unwrap();

        let rendered = writer.render(&graph.adjacency_matrix());
        assert_eq!(format!("{rendered}\n"), written);
        assert_eq!(rendered, "inf   4 inf\ninf inf inf\ninf inf   0");
    }

    #[test]
    fn empty_and_ragged() {
        let empty: [Vec<Weight>; 0] = [];
        assert_eq!(MatrixWriter::new().render(&empty), "");

        let ragged: [Vec<Weight>; 2] = [vec![1, 100], vec![10]];
        assert_eq!(MatrixWriter::new().render(&ragged), " 1 100\n10");
    }
}
