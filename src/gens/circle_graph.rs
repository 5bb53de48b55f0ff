use std::path::Path;

use crate::io::{CircleReader, CircleWriter};

use super::*;

/// A set of circles together with its intersection graph.
///
/// Edges are derived from the circles and cannot be edited directly; every change of the circle
/// set recomputes the whole graph. The read-only graph traits are forwarded to the derived graph,
/// so all algorithms can be run on a `CircleGraph` directly.
#[derive(Debug, Clone, Default)]
pub struct CircleGraph {
    circles: Vec<Circle>,
    graph: AdjGraph,
}

impl CircleGraph {
    /// Creates the intersection graph of the given circles.
    ///
    /// # Errors
    /// [`GraphError::DuplicateVertex`] if two circles share an id
    pub fn new(circles: Vec<Circle>) -> Result<Self> {
        let graph = intersection_graph(&circles)?;
        Ok(Self { circles, graph })
    }

    /// Creates the intersection graph of circles given as `(x, y, radius)`.
    /// Each circle is identified by its position.
    pub fn from_positions(circles: impl IntoIterator<Item = (f64, f64, f64)>) -> Self {
        let mut result = Self {
            circles: circles
                .into_iter()
                .enumerate()
                .map(|(i, (x, y, radius))| Circle::new(i as Node, x, y, radius))
                .collect(),
            graph: AdjGraph::default(),
        };
        result.rebuild_unique();
        result
    }

    /// Reads circles from a file with the given reader settings
    pub fn from_file<P: AsRef<Path>>(path: P, reader: &CircleReader) -> Result<Self> {
        Self::new(reader.try_read_circles_file(path)?)
    }

    /// Writes all circles to a file with the given writer settings
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P, writer: &CircleWriter) -> Result<()> {
        writer.try_write_circles_file(&self.circles, path)
    }

    /// Returns the circles in insertion order
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// Returns the circle with the given id
    pub fn circle(&self, id: Node) -> Option<&Circle> {
        self.circles.iter().find(|c| c.id == id)
    }

    /// Returns the derived intersection graph
    pub fn graph(&self) -> &AdjGraph {
        &self.graph
    }

    /// Consumes the circle set and returns the derived graph
    pub fn into_graph(self) -> AdjGraph {
        self.graph
    }

    /// Adds a circle and recomputes all edges.
    ///
    /// # Errors
    /// [`GraphError::DuplicateVertex`] if a circle with the same id exists (nothing changes)
    pub fn add_circle(&mut self, circle: Circle) -> Result<()> {
        self.circles.push(circle);
        if let Err(err) = self.rebuild() {
            self.circles.pop();
            return Err(err);
        }
        Ok(())
    }

    /// Adds a circle with the next free id (one larger than the largest id in use, `0` if empty),
    /// recomputes all edges and returns the new id
    pub fn push_circle(&mut self, x: f64, y: f64, radius: f64) -> Node {
        let id = self.graph.max_vertex().map_or(0, |u| u + 1);
        self.circles.push(Circle::new(id, x, y, radius));
        self.rebuild_unique();
        id
    }

    /// Removes the circle with the given id and recomputes all edges.
    /// Ids of the remaining circles are kept. Returns `None` if no such circle exists.
    pub fn remove_circle(&mut self, id: Node) -> Option<Circle> {
        let pos = self.circles.iter().position(|c| c.id == id)?;
        let circle = self.circles.remove(pos);
        self.rebuild_unique();
        Some(circle)
    }

    /// Recomputes the graph from scratch.
    /// On a duplicate id the previous graph is kept and the error is returned.
    fn rebuild(&mut self) -> Result<()> {
        let graph = intersection_graph(&self.circles)?;

        tracing::debug!(
            circles = self.circles.len(),
            edges = graph.number_of_edges(),
            "rebuilt intersection graph"
        );
        self.graph = graph;
        Ok(())
    }

    /// Recomputes the graph after a change that cannot introduce a duplicate id
    fn rebuild_unique(&mut self) {
        let rebuilt = self.rebuild();
        debug_assert!(rebuilt.is_ok(), "circle ids are not unique: {rebuilt:?}");
    }
}

impl GraphNodeOrder for CircleGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.graph.number_of_nodes()
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.graph.vertices()
    }
}

impl GraphEdgeOrder for CircleGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.graph.number_of_edges()
    }
}

impl AdjacencyList for CircleGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.graph.neighbors_of(u)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.graph.degree_of(u)
    }
}

impl AdjacencyTest for CircleGraph {
    fn has_vertex(&self, u: Node) -> bool {
        self.graph.has_vertex(u)
    }

    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.graph.has_edge(u, v)
    }
}
