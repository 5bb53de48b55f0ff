/*!
# Degree-based Invariants

Invariants computed from the degree sequence of a graph alone:

- [`GraphInvariants::annihilation_number`]: capped cumulative sum over the ascending degree sequence,
- [`GraphInvariants::annihilation_count`]: the textbook annihilation number, i.e. the largest `k` such
  that the `k` smallest degrees sum to at most the number of edges,
- [`GraphInvariants::vertex_potentials`] / [`GraphInvariants::graph_potential`].

`annihilation_number` reports a *sum of degrees* bounded by `m` rather than a vertex count.
This is kept for compatibility with existing results; use `annihilation_count` for the classical invariant.

# Example
```
use graphinv::{prelude::*, algo::*};

let graph = AdjGraph::from_matrix(&[
    [0u8, 1, 1, 0],
    [1, 0, 1, 0],
    [1, 1, 0, 1],
    [0, 0, 1, 0],
]).unwrap();

assert_eq!(graph.annihilation_number(), 4);
assert_eq!(graph.annihilation_count(), 2);
assert_eq!(graph.graph_potential(), 3);
```
*/

use super::*;

/// Provides invariants derived from the degree sequence
pub trait GraphInvariants: AdjacencyList + GraphEdgeOrder {
    /// Walks the ascending degree sequence accumulating a running total and returns
    /// `min(total, m)` as soon as the total reaches the number of edges `m`.
    fn annihilation_number(&self) -> NumEdges {
        let m = self.number_of_edges() as u64;

        let mut total = 0u64;
        for d in self.sorted_degrees() {
            total += d as u64;
            if total >= m {
                return total.min(m) as NumEdges;
            }
        }

        // only reachable for graphs without vertices
        total as NumEdges
    }

    /// Returns the largest `k` such that the `k` smallest degrees sum to at most the number of edges
    fn annihilation_count(&self) -> NumNodes {
        let m = self.number_of_edges() as u64;

        self.sorted_degrees()
            .into_iter()
            .scan(0u64, |total, d| {
                *total += d as u64;
                Some(*total)
            })
            .take_while(|&total| total <= m)
            .count() as NumNodes
    }

    /// Returns the potential of every vertex in vertex order.
    ///
    /// The potential of `v` is the largest `i` in `1..=deg(v)` with `i <= deg(v)`,
    /// which is the degree itself (and `0` for isolated vertices).
    fn vertex_potentials(&self) -> NodeIndexMap<NumNodes> {
        self.vertex_degrees().collect()
    }

    /// Returns the largest vertex potential, i.e. the maximum degree (`0` for an empty graph)
    fn graph_potential(&self) -> NumNodes {
        self.vertex_potentials()
            .values()
            .copied()
            .max()
            .unwrap_or(0)
    }
}

impl<G> GraphInvariants for G where G: AdjacencyList + GraphEdgeOrder {}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::testing::random_edges;

    fn paw() -> AdjGraph {
        AdjGraph::from_matrix(&[[0u8, 1, 1, 0], [1, 0, 1, 0], [1, 1, 0, 1], [0, 0, 1, 0]]).unwrap()
    }

    #[test]
    fn paw_invariants() {
        let graph = paw();

        assert_eq!(graph.sorted_degrees(), vec![1, 2, 2, 3]);
        assert_eq!(graph.number_of_edges(), 4);

        // 1 + 2 + 2 = 5 >= 4
        assert_eq!(graph.annihilation_number(), 4);
        // 1 + 2 = 3 <= 4 < 5
        assert_eq!(graph.annihilation_count(), 2);
        assert_eq!(graph.graph_potential(), 3);
    }

    #[test]
    fn vertex_potentials_are_degrees() {
        let mut graph = paw();
        graph.add_vertex(9).unwrap();

        assert_eq!(
            graph.vertex_potentials().into_iter().collect_vec(),
            vec![(0, 2), (1, 2), (2, 3), (3, 1), (9, 0)]
        );
        assert_eq!(graph.graph_potential(), 3);
    }

    #[test]
    fn running_total_below_cap() {
        // star with center 0 and three leaves: degrees [1, 1, 1, 3], m = 3
        let graph = AdjGraph::from_edges([Edge(0, 1), Edge(0, 2), Edge(0, 3)]).unwrap();

        // the total hits 3 exactly after the three leaves
        assert_eq!(graph.annihilation_number(), 3);
        assert_eq!(graph.annihilation_count(), 3);
        assert_eq!(graph.graph_potential(), 3);
    }

    #[test]
    fn degenerate_graphs() {
        let empty = AdjGraph::new();
        assert_eq!(empty.annihilation_number(), 0);
        assert_eq!(empty.annihilation_count(), 0);
        assert_eq!(empty.graph_potential(), 0);
        assert!(empty.vertex_potentials().is_empty());

        let mut isolated = AdjGraph::new();
        isolated.add_vertices([4, 2, 7]).unwrap();
        assert_eq!(isolated.annihilation_number(), 0);
        assert_eq!(isolated.annihilation_count(), 3);
        assert_eq!(isolated.graph_potential(), 0);
    }

    #[test]
    fn capped_by_edge_count() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for _ in 0..50 {
            let graph = AdjGraph::from_edges(random_edges(rng, 15, 40)).unwrap();
            let m = graph.number_of_edges();

            assert!(graph.annihilation_number() <= m);
            assert_eq!(graph.graph_potential(), graph.max_degree());

            let k = graph.annihilation_count() as usize;
            let degrees = graph.sorted_degrees();
            assert!(degrees[..k].iter().map(|&d| d as u64).sum::<u64>() <= m as u64);
            if k < degrees.len() {
                assert!(degrees[..=k].iter().map(|&d| d as u64).sum::<u64>() > m as u64);
            }
        }
    }
}
