//! Error types for vector/matrix operations

use tensa_core::TensorError;
use thiserror::Error;

/// Result alias for linalg operations.
pub type LinalgResult<T> = Result<T, LinalgError>;

/// Error type for vector/matrix operations.
#[derive(Error, Debug)]
pub enum LinalgError {
    /// Operand dimensions are incompatible (matvec requires the matrix
    /// column count to equal the vector length).
    #[error("dimension mismatch: matrix is {rows}x{cols}, vector has length {len}")]
    DimensionMismatch { rows: usize, cols: usize, len: usize },

    /// A tensor loaded from file does not have the rank the adaptor
    /// requires.
    #[error("expected a rank {expected} tensor, got rank {got}")]
    WrongRank { expected: usize, got: usize },

    /// Underlying tensor operation failed (for example file I/O).
    #[error(transparent)]
    Tensor(#[from] TensorError),
}
