//! # Pajek
//!
//! ```text
//! *Vertices 3
//! *Edges
//! 1 2 5
//! 2 3 7
//! 1 3 20
//! ```
//!
//! The first line gives the number of nodes, the second whether records are one-way (`*Arcs`) or
//! two-way (`*Edges`). Keywords are case-insensitive. Every following non-blank line is a record
//! `source target` or `source target cost` with 1-based node identifiers. Lines starting with the
//! comment identifier (`%` by default) are skipped everywhere.

use std::io::{BufRead, Lines};

use super::*;

/// Content of a Pajek file before a graph is built from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PajekInput {
    /// Number of nodes given in the `*Vertices` line
    pub number_of_nodes: NumNodes,
    /// *true* for `*Arcs`, *false* for `*Edges`
    pub directed: bool,
    /// *true* if records carry a cost
    pub weighted: bool,
    /// Records with 1-based identifiers. For `*Edges`, every record is followed by its reverse.
    pub records: Vec<EdgeRecord>,
}

impl PajekInput {
    /// Builds the graph described by the input.
    ///
    /// # Errors
    /// Returns `GraphError::InvalidArgument` if the node count is zero or a record is malformed.
    pub fn try_into_graph(self) -> Result<MatrixGraph> {
        EdgeListBuilder::new()
            .nodes(self.number_of_nodes)
            .directed(self.directed)
            .weighted(self.weighted)
            .try_build(self.records)
    }
}

/// A GraphReader for the Pajek-Format
#[derive(Debug, Clone)]
pub struct PajekReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
    /// If unset, weighted-ness is inferred from the first record
    weighted: Option<bool>,
}

impl Default for PajekReader {
    fn default() -> Self {
        Self {
            comment_identifier: "%".to_string(),
            weighted: None,
        }
    }
}

impl PajekReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> Self {
        self.comment_identifier = c.into();
        self
    }

    /// Forces records to be read as weighted (three fields) or unweighted (two fields)
    /// instead of inferring it from the first record
    pub fn weighted(mut self, weighted: bool) -> Self {
        self.weighted = Some(weighted);
        self
    }

    /// Parses the input without building a graph.
    ///
    /// # Errors
    /// Returns `GraphError::Io` if reading fails and `GraphError::InvalidArgument` if the
    /// header is missing or malformed or a record contains something other than integers.
    pub fn try_read_input<R: BufRead>(&self, reader: R) -> Result<PajekInput> {
        let mut lines = ContentLines {
            lines: reader.lines(),
            line_no: 0,
            comment_identifier: &self.comment_identifier,
        };

        let number_of_nodes = {
            let Some((line_no, line)) = lines.try_next()? else {
                return Err(parse_error!(1, "Header `*Vertices N` not found"));
            };
            let mut parts = line.split_whitespace();
            let keyword = parts.next().unwrap_or_default();
            raise_error_unless!(
                keyword.eq_ignore_ascii_case("*vertices"),
                line_no,
                "Expected `*Vertices`, found {:?}",
                keyword
            );
            let n: NumNodes = parse_next_value!(parts, line_no, "number of nodes");
            n
        };

        let directed = {
            let Some((line_no, line)) = lines.try_next()? else {
                return Err(parse_error!(
                    lines.line_no + 1,
                    "Section `*Arcs` or `*Edges` not found"
                ));
            };
            section_kind(line.trim()).ok_or_else(|| {
                parse_error!(line_no, "Expected `*Arcs` or `*Edges`, found {:?}", line.trim())
            })?
        };

        let mut records = Vec::new();
        while let Some((line_no, line)) = lines.try_next()? {
            raise_error_unless!(
                !line.trim_start().starts_with('*'),
                line_no,
                "Unsupported section {:?}",
                line.trim()
            );

            let fields = line
                .split_whitespace()
                .map(|token| {
                    token.parse::<i64>().map_err(|_| {
                        parse_error!(line_no, "Invalid value {:?} found. Cannot parse record.", token)
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            let record = EdgeRecord::new(fields);
            let reversed = (!directed).then(|| record.reversed());
            records.push(record);
            records.extend(reversed);
        }

        let weighted = self
            .weighted
            .unwrap_or_else(|| records.first().is_some_and(|r| r.arity() == 3));

        tracing::debug!(
            number_of_nodes,
            directed,
            weighted,
            records = records.len(),
            "read pajek input"
        );

        Ok(PajekInput {
            number_of_nodes,
            directed,
            weighted,
            records,
        })
    }
}

fn section_kind(keyword: &str) -> Option<bool> {
    if keyword.eq_ignore_ascii_case("*arcs") {
        Some(true)
    } else if keyword.eq_ignore_ascii_case("*edges") {
        Some(false)
    } else {
        None
    }
}

/// Iterator over the non-blank, non-comment lines together with their 1-based line number
struct ContentLines<'a, R> {
    lines: Lines<R>,
    line_no: usize,
    comment_identifier: &'a str,
}

impl<R: BufRead> ContentLines<'_, R> {
    fn try_next(&mut self) -> Result<Option<(usize, String)>> {
        for line in self.lines.by_ref() {
            let line = line?;
            self.line_no += 1;

            let content = line.trim();
            if content.is_empty()
                || (!self.comment_identifier.is_empty()
                    && content.starts_with(self.comment_identifier))
            {
                continue;
            }

            return Ok(Some((self.line_no, line)));
        }
        Ok(None)
    }
}

impl GraphReader<MatrixGraph> for PajekReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<MatrixGraph> {
        self.try_read_input(reader)?.try_into_graph()
    }
}

/// Trait for creating graphs from a PajekReader.
/// Used as shorthand for default PajekReader settings
pub trait PajekRead: Sized {
    /// Tries to read the graph from a given reader
    ///
    /// # Errors
    /// See [`PajekReader::try_read_input`] and [`PajekInput::try_into_graph`].
    fn try_read_pajek<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    ///
    /// # Errors
    /// Additionally fails with `GraphError::Io` if the file cannot be opened.
    fn try_read_pajek_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_pajek(BufReader::new(File::open(path)?))
    }
}

impl PajekRead for MatrixGraph {
    fn try_read_pajek<R: BufRead>(reader: R) -> Result<Self> {
        PajekReader::default().try_read_graph(reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::*;

    const TRIANGLE: &str = "*Vertices 3\n*Edges\n1 2 5\n2 3 7\n1 3 20\n";

    #[test]
    fn weighted_edges() {
        let input = PajekReader::new().try_read_input(TRIANGLE.as_bytes()).unwrap();
        assert_eq!(input.number_of_nodes, 3);
        assert!(!input.directed);
        assert!(input.weighted);
        assert_eq!(input.records.len(), 6);
        assert_eq!(input.records[0].fields(), &[1, 2, 5]);
        assert_eq!(input.records[1].fields(), &[2, 1, 5]);

        let graph = input.try_into_graph().unwrap();
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.dijkstra(0, 2).unwrap(), 12);
        assert_eq!(graph.minimum_spanning_tree_cost().unwrap(), 12);
    }

    #[test]
    fn unweighted_arcs_with_blank_lines_and_comments() {
        let text = "% generated\n*vertices 4\n\n*ARCS\n1 2\n% a comment\n\n   2 3  \n";
        let graph = MatrixGraph::try_read_pajek(text.as_bytes()).unwrap();

        assert!(graph.is_directed());
        assert!(!graph.is_weighted());
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.reachable_from(0).unwrap(), [0, 1, 2]);
        assert_eq!(graph.island_sizes(), [3, 1]);
    }

    #[test]
    fn custom_comment_identifier_and_forced_weights() {
        let text = "# header follows\n*Vertices 2\n*Arcs\n1 2 4\n";
        let reader = PajekReader::new().comment_identifier("#");

        let graph: MatrixGraph = reader.try_read_graph(text.as_bytes()).unwrap();
        assert_eq!(graph.weight_of(0, 1), Some(4));

        // forcing unweighted input rejects the cost field
        let forced: Result<MatrixGraph> = reader.weighted(false).try_read_graph(text.as_bytes());
        assert!(matches!(forced, Err(GraphError::InvalidArgument(_))));
    }

    #[test]
    fn empty_edge_section() {
        let graph = MatrixGraph::try_read_pajek("*Vertices 2\n*Edges\n".as_bytes()).unwrap();
        assert!(!graph.has_any_edge());
        assert_eq!(graph.island_sizes(), [1, 1]);
    }

    #[test]
    fn malformed_input() {
        for text in [
            "",
            "*Vertices\n*Arcs\n",
            "*Vertices x\n*Arcs\n",
            "*Nodes 3\n*Arcs\n",
            "*Vertices 3\n",
            "*Vertices 3\n*Lines\n1 2\n",
            "*Vertices 3\n*Arcs\n1 b\n",
            "*Vertices 3\n*Arcs\n1 2\n*Edges\n",
            "*Vertices 3\n*Arcs\n1 4\n",
            "*Vertices 0\n*Arcs\n",
        ] {
            assert!(
                matches!(
                    MatrixGraph::try_read_pajek(text.as_bytes()),
                    Err(GraphError::InvalidArgument(_))
                ),
                "{text:?}"
            );
        }
    }

    #[test]
    fn error_names_line() {
        let err = MatrixGraph::try_read_pajek("*Vertices 3\n\n*Arcs\n1 2\n1 x\n".as_bytes())
            .unwrap_err();
        assert!(err.to_string().contains("line 5"), "{err}");
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            MatrixGraph::try_read_pajek_file("/this/file/does/not/exist.net"),
            Err(GraphError::Io(_))
        ));
    }
}
