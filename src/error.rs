//! Error taxonomy shared by graph mutation, matrix conversion and file IO.

use std::path::PathBuf;

use thiserror::Error;

use crate::{Edge, Node};

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug)]
pub enum GraphError {
    /// The vertex is already part of the graph
    #[error("vertex {0} already exists")]
    DuplicateVertex(Node),

    /// The vertex is not part of the graph
    #[error("vertex {0} does not exist")]
    UnknownVertex(Node),

    /// The edge is already part of the graph
    #[error("edge {0} already exists")]
    EdgeExists(Edge),

    /// Self-loops cannot be stored
    #[error("self-loop at vertex {0} is not allowed")]
    SelfLoop(Node),

    /// A row of an adjacency matrix has the wrong length
    #[error("adjacency matrix is not square: row {row} has {len} entries, expected {expected}")]
    NonSquareMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// The file to read does not exist
    #[error("file {} not found", path.display())]
    FileNotFound { path: PathBuf },

    /// A non-comment line could not be parsed (`line` is 1-based)
    #[error("malformed record in line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// Any other IO failure
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Returns *true* for conditions a caller may ignore: the graph is unchanged and still valid
    pub fn is_benign(&self) -> bool {
        matches!(
            self,
            GraphError::DuplicateVertex(_) | GraphError::UnknownVertex(_) | GraphError::EdgeExists(_)
        )
    }
}
