/*!
# Simple Path Enumeration

This module enumerates all *simple paths* (no repeated vertex) with an exact number of edges
by a depth-first search that keeps the current path in a buffer owned by the search.

A vertex is excluded from a branch only while it lies on the current path; the same vertex may
appear in many different results. The recursion depth is bounded by the requested length.

When enumerating from every start vertex, each path with at least one edge is found twice:
once from each endpoint. [`SimplePaths::all_simple_paths`] returns this raw list,
[`SimplePaths::count_simple_paths`] halves it, and [`SimplePaths::distinct_simple_paths`]
keeps one orientation per path.

# Example
```
use graphinv::{prelude::*, algo::*};

let graph = AdjGraph::from_edges([Edge(0, 1), Edge(1, 2), Edge(2, 0)]).unwrap();

assert_eq!(graph.simple_paths_from(0, 2), vec![vec![0, 1, 2], vec![0, 2, 1]]);
assert_eq!(graph.all_simple_paths(2).len(), 6);
assert_eq!(graph.count_simple_paths(2), 3);
```
*/

use fxhash::FxHashSet;

use super::*;

/// Provides enumeration of simple paths with a fixed number of edges
pub trait SimplePaths: AdjacencyList + AdjacencyTest {
    /// Returns all simple paths with exactly `length` edges starting at `start`.
    ///
    /// Paths are reported in DFS order following the neighbor order of the graph.
    /// An unknown `start` yields no paths.
    fn simple_paths_from(&self, start: Node, length: NumNodes) -> Vec<Vec<Node>>;

    /// Runs [`SimplePaths::simple_paths_from`] from every vertex and concatenates the results.
    /// Every path with `length >= 1` appears twice, once per direction.
    fn all_simple_paths(&self, length: NumNodes) -> Vec<Vec<Node>> {
        self.vertices()
            .flat_map(|u| self.simple_paths_from(u, length))
            .collect()
    }

    /// Returns the number of distinct simple paths with exactly `length` edges,
    /// i.e. the raw result count of [`SimplePaths::all_simple_paths`] halved.
    ///
    /// For `length = 0` every vertex is a path of its own and is only found once.
    fn count_simple_paths(&self, length: NumNodes) -> usize {
        let raw = self
            .vertices()
            .map(|u| self.simple_paths_from(u, length).len())
            .sum::<usize>();

        if length == 0 { raw } else { raw / 2 }
    }

    /// Returns every simple path with exactly `length` edges once, oriented such that
    /// its first vertex is smaller than its last.
    fn distinct_simple_paths(&self, length: NumNodes) -> Vec<Vec<Node>> {
        let mut paths = self.all_simple_paths(length);
        paths.retain(|path| path.first() <= path.last());
        paths
    }
}

impl<G> SimplePaths for G
where
    G: AdjacencyList + AdjacencyTest,
{
    fn simple_paths_from(&self, start: Node, length: NumNodes) -> Vec<Vec<Node>> {
        if !self.has_vertex(start) {
            tracing::debug!(vertex = start, "start vertex of path enumeration is not part of the graph");
            return Vec::new();
        }

        SimplePathSearch::new(self, length).search_from(start)
    }
}

/// State of a single enumeration: the path buffer is created per call and never shared.
struct SimplePathSearch<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    length: NumNodes,
    path: Vec<Node>,
    on_path: FxHashSet<Node>,
    paths: Vec<Vec<Node>>,
}

impl<'a, G> SimplePathSearch<'a, G>
where
    G: AdjacencyList,
{
    fn new(graph: &'a G, length: NumNodes) -> Self {
        let capacity = length as usize + 1;
        Self {
            graph,
            length,
            path: Vec::with_capacity(capacity),
            on_path: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
            paths: Vec::new(),
        }
    }

    fn search_from(mut self, start: Node) -> Vec<Vec<Node>> {
        self.visit(start);
        debug_assert!(self.path.is_empty() && self.on_path.is_empty());
        self.paths
    }

    fn visit(&mut self, u: Node) {
        self.path.push(u);
        self.on_path.insert(u);

        // number of edges on the path
        let depth = (self.path.len() - 1) as NumNodes;
        if depth == self.length {
            self.paths.push(self.path.clone());
        } else {
            let graph = self.graph;
            for v in graph.neighbors_of(u) {
                if !self.on_path.contains(&v) {
                    self.visit(v);
                }
            }
        }

        self.on_path.remove(&u);
        self.path.pop();
    }
}
