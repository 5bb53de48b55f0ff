/*!
# Graph Algorithms

Algorithms are provided as traits with blanket implementations for every graph implementing the
required operation traits, so they can be called directly on a graph:
```rust
use graphinv::{prelude::*, algo::*};

let graph = AdjGraph::from_edges([Edge(0, 1), Edge(1, 2)]).unwrap();
assert_eq!(graph.count_simple_paths(2), 1);
assert_eq!(graph.graph_potential(), 2);
```
*/

mod invariants;
mod simple_paths;

use crate::prelude::*;

pub use invariants::*;
pub use simple_paths::*;
