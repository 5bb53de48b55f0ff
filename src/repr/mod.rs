/*!
# Graph Representations

The only storage backend is [`AdjGraph`]: an insertion-ordered map from vertex id to an
insertion-ordered neighbor list. Vertex ids may be sparse; degrees are derived from the
length of the neighbor lists, so they can never disagree with the adjacency.

Conversion from/to dense 0/1 matrices is provided via the [`GraphMatrix`] trait.
*/

use fxhash::FxBuildHasher;
use indexmap::IndexMap;

use crate::{ops::*, *};

mod matrix;
mod undirected;

pub use undirected::*;

/// Insertion-order preserving map keyed by vertex ids
pub type NodeIndexMap<V> = IndexMap<Node, V, FxBuildHasher>;
