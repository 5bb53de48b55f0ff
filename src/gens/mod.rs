/*!
# Geometric Graph Construction

This module builds *intersection graphs* of circles in the plane: every circle becomes a vertex
(identified by its id) and two circles are adjacent exactly if
```text
distance(center(a), center(b)) < radius(a) + radius(b)
```
Circles that merely touch (distance equal to the sum of radii) are **not** adjacent.

[`intersection_graph`] performs a one-shot construction with `O(C^2)` pair checks,
while [`CircleGraph`] owns a circle set together with its derived graph and recomputes all edges
from scratch whenever a circle is added or removed.

# Example
```
use graphinv::{prelude::*, gens::*};

let mut circles = CircleGraph::from_positions([(0.0, 0.0, 1.0), (1.5, 0.0, 1.0)]);
assert!(circles.graph().has_edge(0, 1));

let id = circles.push_circle(3.5, 0.0, 1.0);
assert_eq!(id, 2);
assert!(!circles.graph().has_edge(1, 2)); // touching only
```
*/

use itertools::Itertools;

use crate::prelude::*;

mod circle;
mod circle_graph;

pub use circle::*;
pub use circle_graph::*;

/// Returns an iterator over all pairs of intersecting circles as edges `Edge(a.id, b.id)`,
/// where `a` precedes `b` in `circles`
pub fn intersection_edges(circles: &[Circle]) -> impl Iterator<Item = Edge> + '_ {
    circles
        .iter()
        .tuple_combinations()
        .filter(|(a, b)| a.intersects(b))
        .map(|(a, b)| Edge(a.id, b.id))
}

/// Builds the intersection graph of a circle set.
///
/// Vertices are inserted in the order of `circles`, and neighbors are listed in the order of
/// `circles` as well.
///
/// # Errors
/// [`GraphError::DuplicateVertex`] if two circles share an id
pub fn intersection_graph(circles: &[Circle]) -> Result<AdjGraph> {
    let mut graph = AdjGraph::with_capacity(circles.len());
    graph.add_vertices(circles.iter().map(|c| c.id))?;
    graph.add_edges(intersection_edges(circles))?;
    Ok(graph)
}
