//! # EdgeList
//!
//! The SNAP-like EdgeList-Format consists of comment lines (starting with `#`) and lines
//! `u v` with two whitespace-separated vertex ids, each representing the undirected edge `{u, v}`.
//!
//! Reading is idempotent per edge: a line whose edge is already present (e.g. the reverse direction
//! written by [`EdgeListWriter`]) leaves the graph unchanged. Self-loop lines are skipped with a warning.
//!
//! Writing emits one line `u<TAB>v` per adjacency entry, so every edge appears once per direction.

use std::path::Path;

use super::*;

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    /// Default to the SNAP-Format
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }

    /// Adds all edges of the reader to an existing graph, creating missing vertices.
    /// Returns the number of edges that were not present before.
    ///
    /// On a malformed line, reading stops; edges of previous lines remain in the graph.
    pub fn try_extend_graph<G, R>(&self, graph: &mut G, reader: R) -> Result<NumEdges>
    where
        G: GraphEdgeEditing,
        R: BufRead,
    {
        let mut added = 0;
        let mut records = 0usize;

        for record in RecordLines::new(reader, &self.comment_identifier) {
            let (line, content) = record?;
            let mut parts = content.split_whitespace();

            let u: Node = parse_next_value!(parts, line, "source node");
            let v: Node = parse_next_value!(parts, line, "target node");
            expect_end_of_line!(parts, line);

            records += 1;
            if u == v {
                tracing::warn!(line, vertex = u, "skipping self-loop in edge list");
                continue;
            }

            if !graph.try_add_edge(u, v)? {
                added += 1;
            }
        }

        tracing::debug!(records, added, "read edge list");
        Ok(added)
    }

    /// Adds all edges of a file to an existing graph (see [`EdgeListReader::try_extend_graph`])
    pub fn try_extend_graph_file<G, P>(&self, graph: &mut G, path: P) -> Result<NumEdges>
    where
        G: GraphEdgeEditing,
        P: AsRef<Path>,
    {
        self.try_extend_graph(graph, open_file(path.as_ref())?)
    }
}

impl<G: GraphEdgeEditing> GraphReader<G> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut graph = G::new();
        self.try_extend_graph(&mut graph, reader)?;
        Ok(graph)
    }
}

/// Trait for creating graphs form an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(open_file(path.as_ref())?)
    }
}

impl<G> EdgeListRead for G
where
    G: GraphEdgeEditing,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// A writer for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListWriter {
    /// Separator between the two endpoints of a line
    separator: char,
    /// Optional free-text comment written as first line
    comment: Option<String>,
}

impl Default for EdgeListWriter {
    fn default() -> Self {
        Self {
            separator: '\t',
            comment: None,
        }
    }
}

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the separator between both endpoints (`'\t'` by default)
    pub fn separator(mut self, separator: char) -> EdgeListWriter {
        self.separator = separator;
        self
    }

    /// Sets a comment that is written as first line (prefixed by `#`)
    pub fn comment<S: Into<String>>(mut self, comment: S) -> EdgeListWriter {
        self.comment = Some(comment.into());
        self
    }
}

impl<G: AdjacencyList> GraphWriter<G> for EdgeListWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        if let Some(comment) = &self.comment {
            for line in comment.lines() {
                writeln!(writer, "#{line}")?;
            }
        }

        let mut lines = 0usize;
        for Edge(u, v) in graph.edges(false) {
            writeln!(writer, "{u}{}{v}", self.separator)?;
            lines += 1;
        }

        tracing::debug!(lines, "wrote edge list");
        Ok(())
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = create_file(path.as_ref())?;
        self.try_write_edge_list(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl<G: AdjacencyList> EdgeListWrite for G {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::testing::{assert_undirected_invariants, edge_set, random_edges};

    #[test]
    fn read_snap() {
        let input = "# Undirected graph\n# Nodes: 4 Edges: 3\n0\t1\n1 2\n\n2   3\n1\t0\n";
        let graph = AdjGraph::try_read_edge_list(input.as_bytes()).unwrap();

        assert_eq!(graph.vertices().collect_vec(), vec![0, 1, 2, 3]);
        assert_eq!(
            graph.ordered_edges(true).collect_vec(),
            vec![Edge(0, 1), Edge(1, 2), Edge(2, 3)]
        );
        assert_undirected_invariants(&graph);
    }

    #[test]
    fn write_emits_both_directions() {
        let graph = AdjGraph::from_edges([Edge(0, 1), Edge(1, 2)]).unwrap();

        let mut buffer = Vec::new();
        graph.try_write_edge_list(&mut buffer).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "0\t1\n1\t0\n1\t2\n2\t1\n");
    }

    #[test]
    fn writer_settings() {
        let graph = AdjGraph::from_edges([Edge(3, 4)]).unwrap();

        let mut buffer = Vec::new();
        EdgeListWriter::new()
            .separator(' ')
            .comment("a single edge")
            .try_write_graph(&graph, &mut buffer)
            .unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "#a single edge\n3 4\n4 3\n");

        let read: AdjGraph = EdgeListReader::new().try_read_graph(text.as_bytes()).unwrap();
        assert!(read.has_same_edge_set(&graph));
    }

    #[test]
    fn custom_comment_identifier() {
        let input = "% comment\n5 6\n";
        let graph: AdjGraph = EdgeListReader::new()
            .comment_identifier("%")
            .try_read_graph(input.as_bytes())
            .unwrap();

        assert!(graph.has_edge(5, 6));
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn extend_existing_graph() {
        let mut graph = AdjGraph::from_edges([Edge(0, 1)]).unwrap();

        let added = EdgeListReader::new()
            .try_extend_graph(&mut graph, "1 0\n1 2\n1 2\n7 7\n".as_bytes())
            .unwrap();

        assert_eq!(added, 1);
        assert_eq!(graph.number_of_edges(), 2);
        assert!(!graph.has_vertex(7));
        assert_undirected_invariants(&graph);
    }

    #[test]
    fn malformed_lines_are_reported() {
        for (input, line) in [
            ("0 1\n1\n", 2),
            ("# c\n0 x\n", 2),
            ("0 1 2\n", 1),
            ("0 1\n\n-1 3\n", 3),
            ("0.5 1\n", 1),
        ] {
            match AdjGraph::try_read_edge_list(input.as_bytes()) {
                Err(GraphError::MalformedRecord { line: l, .. }) => assert_eq!(l, line, "{input:?}"),
                other => panic!("expected malformed record for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.snap");

        match AdjGraph::try_read_edge_list_file(&path) {
            Err(GraphError::FileNotFound { path: p }) => assert_eq!(p, path),
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn file_round_trip() {
        let rng = &mut Pcg64Mcg::seed_from_u64(13);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.snap");

        for n in [5 as NumNodes, 20, 50] {
            let graph = AdjGraph::from_edges(random_edges(rng, n, 3 * n)).unwrap();

            graph.try_write_edge_list_file(&path).unwrap();
            let read = AdjGraph::try_read_edge_list_file(&path).unwrap();

            assert_eq!(edge_set(&read), edge_set(&graph));
            assert!(read.has_same_edge_set(&graph));
            assert_undirected_invariants(&read);
        }
    }
}
