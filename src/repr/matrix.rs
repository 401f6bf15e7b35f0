use itertools::Itertools;

use super::*;

/// A square boolean adjacency matrix with one [`NodeBitSet`] per row.
///
/// Row `u` has bit `v` set iff the edge `(u, v)` exists. For undirected matrices every edge is
/// stored in both rows, a self-loop is a single bit on the diagonal.
#[derive(Clone, PartialEq, Eq)]
pub struct AdjMatrix {
    rows: Vec<NodeBitSet>,
    directed: bool,
    num_edges: NumEdges,
}

impl AdjMatrix {
    /// Creates a matrix with `n` singleton nodes
    pub fn new(n: NumNodes, directed: bool) -> Self {
        Self {
            rows: vec![NodeBitSet::new(n); n as usize],
            directed,
            num_edges: 0,
        }
    }

    /// Creates a matrix with `n` nodes and the given edges.
    /// Repeated edges are inserted once.
    /// ** Panics if an endpoint is `>= n` **
    pub fn from_edges<E>(n: NumNodes, directed: bool, edges: impl IntoIterator<Item = E>) -> Self
    where
        E: Into<Edge>,
    {
        let mut matrix = Self::new(n, directed);
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            matrix.try_add_edge(u, v);
        }
        matrix
    }

    /// Builds a matrix from rows of `0/1` (or `bool`) entries.
    ///
    /// The result is undirected iff the matrix is symmetric.
    ///
    /// # Errors
    /// Fails if a row does not have exactly one entry per row ([`GraphError::NotSquare`])
    /// or if an entry is neither `0` nor `1` ([`GraphError::InvalidEntry`]).
    ///
    /// # Examples
    /// ```
    /// use cgraphs::prelude::*;
    ///
    /// let matrix = AdjMatrix::try_from_rows(&[[0u8, 1], [1, 0]]).unwrap();
    /// assert!(matrix.is_undirected());
    /// assert_eq!(matrix.number_of_edges(), 1);
    ///
    /// assert!(AdjMatrix::try_from_rows(&[vec![0u8, 1], vec![1]]).is_err());
    /// ```
    pub fn try_from_rows<R, T>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[T]>,
        T: Copy + Into<u8>,
    {
        let n = rows.len();
        let mut matrix = Self::new(n as NumNodes, false);

        for (u, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n {
                return Err(GraphError::NotSquare {
                    row: u,
                    expected: n,
                    found: row.len(),
                });
            }

            for (v, &entry) in row.iter().enumerate() {
                match entry.into() {
                    0 => {}
                    1 => {
                        matrix.rows[u].set_bit(v as Node);
                    }
                    value => {
                        return Err(GraphError::InvalidEntry {
                            row: u,
                            column: v,
                            value,
                        });
                    }
                }
            }
        }

        matrix.directed = !matrix.is_symmetric();
        matrix.num_edges = matrix.count_edges();
        Ok(matrix)
    }

    /// Returns the matrix as rows of `0/1` entries
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.vertices()
            .map(|u| self.vertices().map(|v| self.has_edge(u, v) as u8).collect_vec())
            .collect_vec()
    }

    /// Returns the total number of set entries, i.e. the sum of all row sums.
    /// For undirected graphs without loops this is twice the number of edges.
    pub fn number_of_entries(&self) -> NumEdges {
        self.rows.iter().map(|row| row.cardinality()).sum()
    }

    /// Returns *true* if `(u, v)` is set iff `(v, u)` is set
    pub fn is_symmetric(&self) -> bool {
        self.vertices()
            .all(|u| self.neighbors_of(u).all(|v| self.has_edge(v, u)))
    }

    /// Returns the matrix where node `u` is renamed to `new_rank_of[u]`.
    /// ** Panics if `new_rank_of` is not a permutation of `0..n` **
    pub fn permuted(&self, new_rank_of: &[Node]) -> Self {
        assert_eq!(new_rank_of.len(), self.len());
        let mut result = Self::new(self.number_of_nodes(), self.directed);
        for Edge(u, v) in self.edges(self.is_undirected()) {
            result.add_edge(new_rank_of[u as usize], new_rank_of[v as usize]);
        }
        result
    }

    fn count_edges(&self) -> NumEdges {
        self.edges(self.is_undirected()).count() as NumEdges
    }
}

impl std::fmt::Debug for AdjMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdjMatrix")
            .field("directed", &self.directed)
            .field("rows", &self.to_rows())
            .finish()
    }
}

impl GraphType for AdjMatrix {
    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl GraphNodeOrder for AdjMatrix {
    fn number_of_nodes(&self) -> NumNodes {
        self.rows.len() as NumNodes
    }
}

impl GraphEdgeOrder for AdjMatrix {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl GraphEdgeEditing for AdjMatrix {
    /// Sets `(u, v)`, and `(v, u)` if undirected
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        if self.rows[u as usize].set_bit(v) {
            return true;
        }
        if !self.directed && u != v {
            self.rows[v as usize].set_bit(u);
        }
        self.num_edges += 1;
        false
    }
}

impl AdjacencyTest for AdjMatrix {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.rows[u as usize].get_bit(v)
    }
}

impl AdjacencyList for AdjMatrix {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.rows[u as usize].iter_set_bits()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.rows[u as usize].cardinality()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn undirected_edges_are_mirrored() {
        let mut matrix = AdjMatrix::new(4, false);
        assert!(!matrix.try_add_edge(0, 3));
        assert!(matrix.try_add_edge(3, 0));
        matrix.add_edge(2, 2);

        assert!(matrix.has_edge(3, 0));
        assert!(matrix.has_self_loop(2));
        assert_eq!(matrix.number_of_edges(), 2);
        assert_eq!(matrix.number_of_entries(), 3);
        assert_eq!(matrix.neighbors_of(0).collect_vec(), vec![3]);
        assert_eq!(matrix.degrees().collect_vec(), vec![1, 0, 1, 1]);
    }

    #[test]
    fn directed_edges_are_not_mirrored() {
        let matrix = AdjMatrix::from_edges(3, true, [(0, 1), (1, 2), (0, 1)]);
        assert!(matrix.has_edge(0, 1));
        assert!(!matrix.has_edge(1, 0));
        assert!(matrix.has_edge_either_way(1, 0));
        assert_eq!(matrix.number_of_edges(), 2);
        assert!(!matrix.is_symmetric());
    }

    #[test]
    fn rows_round_trip() {
        let rows = vec![
            vec![1u8, 1, 0, 0, 1],
            vec![1, 0, 1, 0, 0],
            vec![0, 1, 0, 0, 0],
            vec![0, 0, 0, 0, 1],
            vec![1, 0, 0, 1, 1],
        ];
        let matrix = AdjMatrix::try_from_rows(&rows).unwrap();
        assert!(matrix.is_undirected());
        assert_eq!(matrix.number_of_edges(), 6);
        assert_eq!(matrix.to_rows(), rows);

        let directed = AdjMatrix::try_from_rows(&[[false, true], [false, false]]).unwrap();
        assert!(directed.is_directed());
        assert_eq!(directed.number_of_edges(), 1);
    }

    #[test]
    fn malformed_rows_are_rejected() {
        assert_eq!(
            AdjMatrix::try_from_rows(&[vec![0u8, 1], vec![1, 0, 0]]),
            Err(GraphError::NotSquare {
                row: 1,
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            AdjMatrix::try_from_rows(&[[0u8, 2], [1, 0]]),
            Err(GraphError::InvalidEntry {
                row: 0,
                column: 1,
                value: 2
            })
        );
        assert!(AdjMatrix::try_from_rows::<[u8; 0], u8>(&[]).unwrap().is_empty());
    }

    #[test]
    fn permutation_preserves_edges() {
        let matrix = AdjMatrix::from_edges(4, false, [(0, 1), (1, 2), (2, 3)]);
        let permuted = matrix.permuted(&[3, 2, 1, 0]);
        assert_eq!(
            permuted.edges(true).collect_vec(),
            vec![Edge(0, 1), Edge(1, 2), Edge(2, 3)]
        );

        let permuted = matrix.permuted(&[1, 3, 0, 2]);
        assert!(permuted.has_edge(1, 3));
        assert!(permuted.has_edge(3, 0));
        assert!(permuted.has_edge(0, 2));
        assert_eq!(permuted.number_of_edges(), 3);
    }
}
