use super::*;

impl GraphMatrix for AdjGraph {
    fn from_matrix<R: AsRef<[u8]>>(matrix: &[R]) -> Result<Self> {
        let n = matrix.len();
        let mut graph = AdjGraph::with_capacity(n);

        for (i, row) in matrix.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n {
                return Err(GraphError::NonSquareMatrix {
                    row: i,
                    len: row.len(),
                    expected: n,
                });
            }

            let u = i as Node;
            let nbs = row
                .iter()
                .enumerate()
                .filter_map(|(j, &x)| (x == 1).then_some(j as Node))
                .collect::<Vec<_>>();

            if nbs.contains(&u) {
                return Err(GraphError::SelfLoop(u));
            }

            graph.nbs.insert(u, nbs);
        }

        Ok(graph)
    }

    fn to_matrix(&self) -> AdjacencyMatrix {
        let n = self.max_vertex().map_or(0, |u| u as usize + 1);
        let mut matrix = vec![vec![0u8; n]; n];

        for Edge(u, v) in self.edges(false) {
            matrix[u as usize][v as usize] = 1;
        }

        matrix
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;

    fn paw_matrix() -> AdjacencyMatrix {
        vec![
            vec![0, 1, 1, 0],
            vec![1, 0, 1, 0],
            vec![1, 1, 0, 1],
            vec![0, 0, 1, 0],
        ]
    }

    #[test]
    fn from_matrix_lists_neighbors_in_column_order() {
        let graph = AdjGraph::from_matrix(&paw_matrix()).unwrap();

        assert_eq!(graph.vertices().collect_vec(), vec![0, 1, 2, 3]);
        assert_eq!(graph.as_neighbors_slice(2), &[0, 1, 3]);
        assert_eq!(
            graph.vertex_degrees().collect_vec(),
            vec![(0, 2), (1, 2), (2, 3), (3, 1)]
        );
        assert_eq!(graph.number_of_edges(), 4);
    }

    #[test]
    fn symmetric_matrix_round_trip() {
        let matrix: AdjacencyMatrix = vec![
            vec![0, 1, 1, 0, 1, 1],
            vec![1, 0, 1, 1, 0, 1],
            vec![1, 1, 0, 1, 1, 0],
            vec![0, 1, 1, 0, 1, 1],
            vec![1, 0, 1, 1, 0, 1],
            vec![1, 1, 0, 1, 1, 0],
        ];

        let graph = AdjGraph::from_matrix(&matrix).unwrap();
        assert_eq!(graph.number_of_edges(), 12);
        assert_eq!(graph.to_matrix(), matrix);

        assert_eq!(
            AdjGraph::from_matrix(&paw_matrix()).unwrap().to_matrix(),
            paw_matrix()
        );
    }

    #[test]
    fn asymmetric_matrix_is_taken_literally() {
        let graph = AdjGraph::from_matrix(&[[0u8, 1], [0, 0]]).unwrap();

        assert!(graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 0));
        assert!(!graph.has_bidirected_edge(0, 1));
        assert_eq!(graph.degree_of(1), 0);
    }

    #[test]
    fn invalid_matrices() {
        assert!(matches!(
            AdjGraph::from_matrix(&[vec![0u8, 1], vec![1]]),
            Err(GraphError::NonSquareMatrix {
                row: 1,
                len: 1,
                expected: 2
            })
        ));

        assert!(matches!(
            AdjGraph::from_matrix(&[[0u8, 1], [1, 1]]),
            Err(GraphError::SelfLoop(1))
        ));
    }

    #[test]
    fn sparse_ids_pad_the_matrix() {
        let mut graph = AdjGraph::new();
        graph.add_edge(3, 1).unwrap();

        let matrix = graph.to_matrix();
        assert_eq!(matrix.len(), 4);
        assert!(matrix.iter().all(|row| row.len() == 4));
        assert_eq!(matrix[3][1], 1);
        assert_eq!(matrix[1][3], 1);
        assert_eq!(matrix.iter().flatten().filter(|&&x| x == 1).count(), 2);
    }

    #[test]
    fn empty_graph_has_empty_matrix() {
        assert!(AdjGraph::new().to_matrix().is_empty());
        assert!(AdjGraph::from_matrix::<Vec<u8>>(&[]).unwrap().is_empty());
    }
}
