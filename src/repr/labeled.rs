use std::{fmt::Debug, hash::Hash};

use fxhash::FxHashMap;
use itertools::Itertools;

use super::*;

/// A graph over arbitrary ordered vertex labels.
///
/// Stores the vertex list, a label-to-rank map and the [`AdjMatrix`] indexed by rank.
/// When built from an edge list, the vertex list is the sorted set of distinct labels
/// appearing in the edges, so the rank of a vertex is its position in label order.
#[derive(Clone)]
pub struct LabeledGraph<L> {
    labels: Vec<L>,
    ranks: FxHashMap<L, Node>,
    matrix: AdjMatrix,
}

impl<L> LabeledGraph<L>
where
    L: Ord + Clone + Hash + Debug,
{
    /// Builds the graph spanned by an edge list.
    ///
    /// Self-loops become a set diagonal entry, repeated edges are stored once.
    ///
    /// # Examples
    /// ```
    /// use cgraphs::prelude::*;
    ///
    /// let graph = LabeledGraph::from_edges([(5, 1), (1, 1), (2, 1), (3, 2), (4, 5), (1, 2), (5, 5)], false);
    /// assert_eq!(graph.labels(), &[1, 2, 3, 4, 5]);
    /// assert_eq!(
    ///     graph.matrix().to_rows(),
    ///     vec![
    ///         vec![1, 1, 0, 0, 1],
    ///         vec![1, 0, 1, 0, 0],
    ///         vec![0, 1, 0, 0, 0],
    ///         vec![0, 0, 0, 0, 1],
    ///         vec![1, 0, 0, 1, 1],
    ///     ]
    /// );
    /// ```
    pub fn from_edges<I>(edges: I, directed: bool) -> Self
    where
        I: IntoIterator<Item = (L, L)>,
    {
        let edges = edges.into_iter().collect_vec();

        let labels = edges
            .iter()
            .flat_map(|(u, v)| [u, v])
            .sorted()
            .dedup()
            .cloned()
            .collect_vec();

        let ranks: FxHashMap<L, Node> = labels
            .iter()
            .enumerate()
            .map(|(rank, label)| (label.clone(), rank as Node))
            .collect();

        let matrix = AdjMatrix::from_edges(
            labels.len() as NumNodes,
            directed,
            edges.iter().map(|(u, v)| Edge(ranks[u], ranks[v])),
        );

        Self {
            labels,
            ranks,
            matrix,
        }
    }

    /// Pairs an adjacency matrix with a vertex list; `labels[u]` names row `u`.
    /// The labels are used in the given order.
    ///
    /// # Errors
    /// Fails if the matrix is malformed (see [`AdjMatrix::try_from_rows`]), if the number of
    /// labels differs from the number of rows, or if a label occurs twice.
    pub fn try_from_matrix<R, T>(rows: &[R], labels: Vec<L>) -> Result<Self>
    where
        R: AsRef<[T]>,
        T: Copy + Into<u8>,
    {
        let matrix = AdjMatrix::try_from_rows(rows)?;
        Self::try_with_labels(matrix, labels)
    }

    /// Pairs an existing matrix with a vertex list; `labels[u]` names node `u`.
    ///
    /// # Errors
    /// Fails if the number of labels differs from the number of nodes or if a label occurs twice.
    pub fn try_with_labels(matrix: AdjMatrix, labels: Vec<L>) -> Result<Self> {
        if labels.len() != matrix.len() {
            return Err(GraphError::LabelCountMismatch {
                labels: labels.len(),
                nodes: matrix.len(),
            });
        }

        let mut ranks = FxHashMap::default();
        for (rank, label) in labels.iter().enumerate() {
            if ranks.insert(label.clone(), rank as Node).is_some() {
                return Err(GraphError::DuplicateLabel { rank });
            }
        }

        Ok(Self {
            labels,
            ranks,
            matrix,
        })
    }

    /// Returns the rank of a label.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] if the label is not a vertex of the graph.
    pub fn rank_of(&self, label: &L) -> Result<Node> {
        self.ranks
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::UnknownVertex(format!("{label:?}")))
    }
}

impl<L> LabeledGraph<L> {
    /// Returns the vertex list in rank order
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// Returns the label of rank `u`
    /// ** Panics if `u >= n` **
    pub fn label_of(&self, u: Node) -> &L {
        &self.labels[u as usize]
    }

    /// Returns the underlying adjacency matrix
    pub fn matrix(&self) -> &AdjMatrix {
        &self.matrix
    }

    /// Translates a sequence of ranks into labels
    pub fn labels_of<'a>(
        &'a self,
        nodes: impl IntoIterator<Item = Node> + 'a,
    ) -> impl Iterator<Item = &'a L> + 'a {
        nodes.into_iter().map(|u| self.label_of(u))
    }
}

impl<L> Debug for LabeledGraph<L>
where
    L: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabeledGraph")
            .field("labels", &self.labels)
            .field("matrix", &self.matrix)
            .finish()
    }
}

impl<L> GraphType for LabeledGraph<L> {
    fn is_directed(&self) -> bool {
        self.matrix.is_directed()
    }
}

impl<L> GraphNodeOrder for LabeledGraph<L> {
    fn number_of_nodes(&self) -> NumNodes {
        self.matrix.number_of_nodes()
    }
}

impl<L> GraphEdgeOrder for LabeledGraph<L> {
    fn number_of_edges(&self) -> NumEdges {
        self.matrix.number_of_edges()
    }
}

impl<L> AdjacencyTest for LabeledGraph<L> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.matrix.has_edge(u, v)
    }
}

impl<L> AdjacencyList for LabeledGraph<L> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.matrix.neighbors_of(u)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.matrix.degree_of(u)
    }
}
