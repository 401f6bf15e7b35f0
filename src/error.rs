/*!
# Errors

Search outcomes such as "no coloring exists" or "no Hamiltonian cycle exists" are ordinary
return values (`Option`, empty `Vec`, `bool`). [`GraphError`] is reserved for malformed input:
ragged matrices, entries other than `0/1`, vertex lists that do not match the matrix, lookups
of vertices that are not part of the graph, and requests a graph does not support.
*/

use thiserror::Error;

/// Errors raised when a graph cannot be built from or queried with the given input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A row of an adjacency matrix does not have as many entries as there are rows
    #[error("adjacency matrix is not square: row {row} has {found} entries, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// An adjacency matrix entry is neither `0` nor `1`
    #[error("adjacency matrix entry ({row}, {column}) is {value}, expected 0 or 1")]
    InvalidEntry { row: usize, column: usize, value: u8 },

    /// The vertex list does not have one label per matrix row
    #[error("{labels} vertex labels supplied for an adjacency matrix with {nodes} rows")]
    LabelCountMismatch { labels: usize, nodes: usize },

    /// The same label occurs twice in a vertex list
    #[error("vertex label at rank {rank} occurs more than once")]
    DuplicateLabel { rank: usize },

    /// A vertex label was looked up that is not part of the graph
    #[error("vertex {0} is not part of the graph")]
    UnknownVertex(String),

    /// The operation is not defined for this kind of graph
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}

/// Shorthand used throughout the crate
pub type Result<T> = std::result::Result<T, GraphError>;
