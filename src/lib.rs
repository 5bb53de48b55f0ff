/*!
`graphinv` is a small library for simple undirected graphs stored as adjacency lists, together
with a few combinatorial invariants computed on them.

# Representation

**Vertices** are identified by `u32` ids. Ids need not be contiguous and carry no order: a graph
remembers the order in which vertices and neighbors were inserted, which in turn determines the
order of enumerated paths. **Edges** are the tuple-struct `Edge(Node, Node)`; `Edge(u, v)` and
`Edge(v, u)` describe the same undirected edge.

The only storage backend is [`AdjGraph`](crate::repr::AdjGraph). Degrees and the edge count are
derived from the neighbor lists and therefore always agree with the adjacency.

# Usage

- [`prelude`] includes nodes, edges, errors, the graph operation traits and [`AdjGraph`](crate::repr::AdjGraph),
- [`algo`] includes the simple-path enumeration and the degree-based invariants
  (annihilation number and graph potential), implemented as traits on the graphs themselves,
- [`gens`] builds intersection graphs of circles in the plane,
- [`io`] reads and writes SNAP-like edge lists and circle descriptions.

In most use-cases, `use graphinv::{prelude::*, algo::*};` suffices.

```
use graphinv::{prelude::*, algo::*};

let graph = AdjGraph::from_edges([Edge(0, 1), Edge(1, 2), Edge(2, 0), Edge(2, 3)])?;
assert_eq!(graph.count_simple_paths(2), 5);
assert_eq!(graph.graph_potential(), 3);
# Ok::<(), GraphError>(())
```

# Logging

Diagnostics are emitted through [`tracing`]. The library never installs a subscriber.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

pub use edge::*;
pub use error::*;
pub use node::*;

/// `graphinv::prelude` includes definitions for nodes, edges and errors, all basic graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
