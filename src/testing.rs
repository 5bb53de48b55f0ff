#[cfg(test)]
use fxhash::FxHashSet;
#[cfg(test)]
use itertools::Itertools;
#[cfg(test)]
use rand::Rng;

#[cfg(test)]
use crate::{ops::*, *};

/// Creates a list of at most `m_ub` random normalized edges without loops for nodes `0..n`
#[cfg(test)]
pub(crate) fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
    let mut edges = (0..m_ub)
        .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)).normalized())
        .filter(|e| !e.is_loop())
        .collect_vec();
    edges.sort_unstable();
    edges.dedup();
    edges
}

/// Panics if the graph is not a simple undirected graph or if its degrees and edge count disagree
/// with its neighborhoods
#[cfg(test)]
pub(crate) fn assert_undirected_invariants<G>(graph: &G)
where
    G: AdjacencyList + AdjacencyTest + GraphEdgeOrder,
{
    let mut degree_sum = 0u64;
    for u in graph.vertices() {
        let nbs = graph.neighbors_of(u).collect_vec();

        assert!(!nbs.contains(&u), "self-loop at {u}");
        assert_eq!(
            nbs.iter().unique().count(),
            nbs.len(),
            "parallel edges at {u}"
        );
        assert_eq!(graph.degree_of(u) as usize, nbs.len());

        for v in nbs {
            assert!(graph.has_vertex(v), "neighbor {v} of {u} is no vertex");
            assert!(graph.has_edge(v, u), "edge ({u},{v}) is not symmetric");
        }

        degree_sum += graph.degree_of(u) as u64;
    }

    assert_eq!(degree_sum % 2, 0);
    assert_eq!(graph.number_of_edges() as u64, degree_sum / 2);
}

/// Returns the normalized edge set of a graph
#[cfg(test)]
pub(crate) fn edge_set<G: AdjacencyList>(graph: &G) -> FxHashSet<Edge> {
    graph.edges(true).collect()
}

/// Generates randomized tests for all operation traits a graph type claims to support
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, testing::*};
            use fxhash::FxHashSet;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            let graph = <$graph>::new();

            assert_eq!(graph.number_of_edges(), 0);
            assert_eq!(graph.number_of_nodes(), 0);
            assert!(graph.is_empty());
            assert!(graph.is_singleton());
            assert_eq!(graph.vertices().count(), 0);
        }
    };
    ($graph:ident: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);
                        let graph = <$graph>::from_edges(edges.iter()).unwrap();

                        assert_undirected_invariants(&graph);
                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                        assert_eq!(graph.ordered_edges(true).collect_vec(), edges);

                        for u in graph.vertices() {
                            let expected = edges
                                .iter()
                                .filter_map(|&Edge(a, b)| {
                                    if a == u {
                                        Some(b)
                                    } else if b == u {
                                        Some(a)
                                    } else {
                                        None
                                    }
                                })
                                .sorted()
                                .collect_vec();

                            assert_eq!(graph.neighbors_of(u).sorted().collect_vec(), expected);
                            assert_eq!(graph.degree_of(u) as usize, expected.len());
                        }
                    }
                }
            }
        }
    };
    ($graph:ident: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let mut graph = <$graph>::new();
                        let mut model: FxHashSet<Edge> = FxHashSet::default();

                        for _ in 0..m_ub {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);

                            if u == v {
                                assert!(graph.add_edge(u, v).is_err());
                            } else {
                                let existed = !model.insert(Edge(u, v).normalized());
                                assert_eq!(graph.try_add_edge(u, v).unwrap(), existed);
                            }

                            assert_undirected_invariants(&graph);
                        }

                        assert_eq!(edge_set(&graph), model);

                        for _ in 0..m_ub {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);

                            let existed = model.remove(&Edge(u, v).normalized());
                            assert_eq!(graph.remove_edge(u, v), existed);
                            assert!(!graph.remove_edge(v, u));

                            assert_undirected_invariants(&graph);
                            assert_eq!(graph.number_of_edges() as usize, model.len());
                        }

                        assert_eq!(edge_set(&graph), model);
                    }
                }
            }
        }
    };
    ($graph:ident: GraphVertexEditing) => {
        #[test]
        fn test_graph_vertex_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for n in [10 as NumNodes, 20, 50] {
                for _ in 0..10 {
                    let edges = random_edges(rng, n, 3 * n as NumEdges);
                    let mut graph = <$graph>::from_edges(edges.iter()).unwrap();
                    let mut model: FxHashSet<Edge> = edges.iter().copied().collect();

                    for _ in 0..n {
                        let u = rng.random_range(0..n);
                        let was_present = graph.has_vertex(u);

                        assert_eq!(graph.remove_vertex(u), was_present);
                        assert!(!graph.has_vertex(u));
                        model.retain(|&Edge(a, b)| a != u && b != u);

                        assert_undirected_invariants(&graph);
                        assert_eq!(edge_set(&graph), model);

                        graph.add_vertex(u).unwrap();
                        assert!(graph.add_vertex(u).is_err());
                        assert_eq!(graph.degree_of(u), 0);
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
