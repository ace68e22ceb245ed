//! Error types for graph loading and count conversion

use thiserror::Error;

/// Recoverable errors raised at the library boundary
#[derive(Debug, Error)]
pub enum CensusError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line of an input file could not be parsed
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// The input file has no usable `n m` header
    #[error("missing or malformed header: {0}")]
    InvalidHeader(String),

    /// An edge names a vertex outside `[0, n)`
    #[error("line {line}: vertex {vertex} out of range for {node_count} vertices")]
    VertexOutOfRange {
        line: usize,
        vertex: u64,
        node_count: usize,
    },

    /// A count vector does not match the matrix it is multiplied with
    #[error("expected a vector of length {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
