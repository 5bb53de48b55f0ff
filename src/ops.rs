use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V in insertion order.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_;

    /// Returns the largest vertex id or `None` if the graph is empty
    fn max_vertex(&self) -> Option<Node> {
        self.vertices().max()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of (undirected) edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the neighborhood of a given vertex in insertion order.
    /// The iterator is empty if `u` is not part of the graph.
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of neighbors of `u`, or `0` if `u` is not part of the graph.
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns the degrees of all vertices in the order of [`GraphNodeOrder::vertices`]
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns `(vertex, degree)` pairs for all vertices
    fn vertex_degrees(&self) -> impl Iterator<Item = (Node, NumNodes)> + '_ {
        self.vertices().map(|u| (u, self.degree_of(u)))
    }

    /// Returns the sum of all degrees, i.e. the number of directed adjacency entries
    fn degree_sum(&self) -> u64 {
        self.degrees().map(|d| d as u64).sum()
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns all degrees in ascending order
    fn sorted_degrees(&self) -> Vec<NumNodes> {
        self.degrees().sorted_unstable().collect_vec()
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered,
    /// otherwise every undirected edge is reported once per direction.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns an iterator over all edges in the graph in sorted order.
    fn ordered_edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.edges(only_normalized).sorted_unstable()
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the vertex `u` is part of the graph
    fn has_vertex(&self, u: Node) -> bool;

    /// Returns *true* if `v` is a neighbor of `u`.
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns *true* if there exists an edge (u,v) as well as (v,u) in the graph.
    /// Graphs built through [`GraphEdgeEditing`] always satisfy this for every edge;
    /// graphs built from an asymmetric matrix may not.
    fn has_bidirected_edge(&self, u: Node, v: Node) -> bool {
        self.has_edge(u, v) && self.has_edge(v, u)
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates a graph without vertices
    fn new() -> Self;
}

/// Provides functions to insert/delete vertices
pub trait GraphVertexEditing: GraphNew {
    /// Inserts `u` without any neighbors.
    /// Fails with [`GraphError::DuplicateVertex`] if `u` is already present; the graph is left unchanged.
    fn add_vertex(&mut self, u: Node) -> Result<()>;

    /// Inserts all vertices of the collection, stopping at the first duplicate
    fn add_vertices(&mut self, nodes: impl IntoIterator<Item = Node>) -> Result<()> {
        for u in nodes {
            self.add_vertex(u)?;
        }
        Ok(())
    }

    /// Deletes `u` and all edges incident to it.
    /// Returns *true* if `u` was present; removing an unknown vertex is a no-op.
    fn remove_vertex(&mut self, u: Node) -> bool;
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the edge `{u, v}` to the graph, creating missing endpoints as isolated vertices first.
    ///
    /// # Errors
    /// - [`GraphError::EdgeExists`] if the edge is already present (graph unchanged)
    /// - [`GraphError::SelfLoop`] if `u == v` (graph unchanged)
    fn add_edge(&mut self, u: Node, v: Node) -> Result<()> {
        if self.try_add_edge(u, v)? {
            Err(GraphError::EdgeExists(Edge(u, v)))
        } else {
            Ok(())
        }
    }

    /// Adds the edge `{u, v}` to the graph.
    /// Returns *true* exactly if the edge was present previously, in which case nothing changes.
    ///
    /// # Errors
    /// [`GraphError::SelfLoop`] if `u == v`
    fn try_add_edge(&mut self, u: Node, v: Node) -> Result<bool>;

    /// Adds all edges in the collection, stopping at the first failure
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<()> {
        for Edge(u, v) in edges.into_iter().map(|d| d.into()) {
            self.add_edge(u, v)?;
        }
        Ok(())
    }

    /// Removes `v` from the neighborhood of `u` and `u` from the neighborhood of `v`.
    /// Each side is handled independently; missing entries are ignored.
    /// Returns *true* if anything was removed.
    fn remove_edge(&mut self, u: Node, v: Node) -> bool;

    /// Removes all edges in the collection and returns the number of edges that were present
    fn remove_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) -> NumEdges {
        edges
            .into_iter()
            .map(|d| d.into())
            .filter(|&Edge(u, v)| self.remove_edge(u, v))
            .count() as NumEdges
    }
}

/// A super trait for creating a graph from scratch from a set of edges
pub trait GraphFromScratch: Sized {
    /// Create a graph from an iterator over Edges. Vertices are created in order of first appearance.
    fn from_edges(edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<Self>;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<Self> {
        let mut graph = Self::new();
        graph.add_edges(edges)?;
        Ok(graph)
    }
}

/// A dense, row-major 0/1 adjacency matrix
pub type AdjacencyMatrix = Vec<Vec<u8>>;

/// Conversion between adjacency lists and adjacency matrices
pub trait GraphMatrix: Sized {
    /// Builds a graph with vertices `0..N` from a square `N x N` matrix.
    /// Every cell is scanned independently: `matrix[i][j] == 1` records `j` as neighbor of `i`,
    /// so an asymmetric matrix yields asymmetric neighborhoods.
    ///
    /// # Errors
    /// - [`GraphError::NonSquareMatrix`] if a row does not have `N` entries
    /// - [`GraphError::SelfLoop`] if the diagonal contains a `1`
    fn from_matrix<R: AsRef<[u8]>>(matrix: &[R]) -> Result<Self>;

    /// Returns an `N x N` matrix with `N = max vertex id + 1` and a `1` at `[u][v]` for every neighbor `v` of `u`.
    /// Sparse ids therefore produce mostly empty rows.
    fn to_matrix(&self) -> AdjacencyMatrix;
}
