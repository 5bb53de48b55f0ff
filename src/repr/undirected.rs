use crate::testing::test_graph_ops;

use super::*;

/// An undirected graph stored as adjacency lists.
///
/// - vertices are kept in insertion order,
/// - every neighbor list is kept in insertion order (this determines the order in which
///   paths are discovered, but never their number),
/// - no self-loops and no parallel edges can be created through the editing traits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjGraph {
    pub(super) nbs: NodeIndexMap<Vec<Node>>,
}

impl AdjGraph {
    /// Creates an empty graph with space reserved for `n` vertices
    pub fn with_capacity(n: usize) -> Self {
        Self {
            nbs: NodeIndexMap::with_capacity_and_hasher(n, Default::default()),
        }
    }

    /// Returns the neighbor list of `u` (empty if `u` is unknown)
    pub fn as_neighbors_slice(&self, u: Node) -> &[Node] {
        self.nbs.get(&u).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns an iterator over `(vertex, neighbors)` in insertion order
    pub fn adjacency(&self) -> impl Iterator<Item = (Node, &[Node])> + '_ {
        self.nbs.iter().map(|(&u, nbs)| (u, nbs.as_slice()))
    }

    /// Returns *true* if both graphs have the same vertex set and the same adjacency entries,
    /// ignoring the order of vertices and neighbors.
    /// Both directions are compared, so one-sided entries have to match as well.
    pub fn has_same_edge_set(&self, other: &AdjGraph) -> bool {
        self.number_of_nodes() == other.number_of_nodes()
            && self.vertices().all(|u| other.has_vertex(u))
            && self.ordered_edges(false).eq(other.ordered_edges(false))
    }

    /// Appends `v` to the neighborhood of `u` (creating `u` if needed) unless it is already present.
    /// Returns *true* if `v` was appended.
    pub(super) fn push_neighbor(&mut self, u: Node, v: Node) -> bool {
        let nbs = self.nbs.entry(u).or_default();
        if nbs.contains(&v) {
            false
        } else {
            nbs.push(v);
            true
        }
    }

    /// Removes `v` from the neighborhood of `u` keeping the order of the remaining neighbors.
    /// Returns *true* if `v` was present.
    fn remove_neighbor(&mut self, u: Node, v: Node) -> bool {
        let Some(nbs) = self.nbs.get_mut(&u) else {
            return false;
        };

        match nbs.iter().position(|&w| w == v) {
            Some(pos) => {
                nbs.remove(pos);
                true
            }
            None => false,
        }
    }
}

impl GraphNodeOrder for AdjGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.nbs.keys().copied()
    }
}

impl GraphEdgeOrder for AdjGraph {
    fn number_of_edges(&self) -> NumEdges {
        (self.degree_sum() / 2) as NumEdges
    }
}

impl AdjacencyList for AdjGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.as_neighbors_slice(u).iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs.get(&u).map_or(0, |nbs| nbs.len() as NumNodes)
    }
}

impl AdjacencyTest for AdjGraph {
    fn has_vertex(&self, u: Node) -> bool {
        self.nbs.contains_key(&u)
    }

    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs.get(&u).is_some_and(|nbs| nbs.contains(&v))
    }
}

impl GraphNew for AdjGraph {
    fn new() -> Self {
        Self::default()
    }
}

impl GraphVertexEditing for AdjGraph {
    fn add_vertex(&mut self, u: Node) -> Result<()> {
        if self.has_vertex(u) {
            return Err(GraphError::DuplicateVertex(u));
        }

        self.nbs.insert(u, Vec::new());
        Ok(())
    }

    fn remove_vertex(&mut self, u: Node) -> bool {
        if self.nbs.shift_remove(&u).is_none() {
            return false;
        }

        // Scan every list: a graph built from an asymmetric matrix may reference `u`
        // from vertices that `u` itself does not list.
        for nbs in self.nbs.values_mut() {
            nbs.retain(|&w| w != u);
        }

        true
    }
}

impl GraphEdgeEditing for AdjGraph {
    fn try_add_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }

        if self.has_bidirected_edge(u, v) {
            return Ok(true);
        }

        // Only missing directions are appended, so a half-present edge is completed
        // instead of being duplicated on one side.
        self.push_neighbor(u, v);
        self.push_neighbor(v, u);
        Ok(false)
    }

    fn remove_edge(&mut self, u: Node, v: Node) -> bool {
        let removed_uv = self.remove_neighbor(u, v);
        let removed_vu = self.remove_neighbor(v, u);
        removed_uv || removed_vu
    }
}

test_graph_ops!(
    adj_graph_tests,
    AdjGraph,
    (GraphNew, AdjacencyList, GraphEdgeEditing, GraphVertexEditing)
);
