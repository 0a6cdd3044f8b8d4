//! Structured error types for tensor operations
//!
//! Every fallible operation in this crate surfaces one of these variants to
//! its direct caller. There are no internal retries and no logging; the
//! caller decides how to report.
//!
//! # Examples
//!
//! ```
//! use tensa_core::{Tensor, TensorError};
//!
//! let err = Tensor::from_vec(vec![1.0, 2.0], &[3]).unwrap_err();
//! assert!(matches!(err, TensorError::ShapeDataMismatch { .. }));
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Result alias for tensor operations.
pub type TensorResult<T> = Result<T, TensorError>;

/// Top-level error type for tensor operations.
#[derive(Error, Debug)]
pub enum TensorError {
    /// Index tuple length differs from the tensor's rank.
    #[error("index rank mismatch: tensor has rank {expected}, index tuple has length {got}")]
    RankMismatch { expected: usize, got: usize },

    /// An index component is outside its dimension's extent.
    #[error("index {index:?} out of bounds for shape {shape:?} (component {dim})")]
    OutOfBounds {
        index: Vec<usize>,
        shape: Vec<usize>,
        dim: usize,
    },

    /// Flat data length does not match the product of the shape extents.
    #[error("shape {shape:?} requires {expected} elements, but got {got}")]
    ShapeDataMismatch {
        shape: Vec<usize>,
        expected: usize,
        got: usize,
    },

    /// I/O failure on a generic reader or writer.
    #[error("tensor {operation} failed: {source}")]
    Io {
        operation: &'static str,
        source: std::io::Error,
    },

    /// I/O failure on a named file.
    #[error("failed to {operation} tensor file `{}`: {source}", path.display())]
    File {
        operation: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    /// The token stream is not a valid tensor (truncated, non-numeric,
    /// trailing data, or an overflowing shape).
    #[error("malformed tensor data: {reason}")]
    Malformed { reason: String },

    /// [`TensorError::Malformed`] tagged with the file it came from.
    #[error("malformed tensor file `{}`: {reason}", path.display())]
    MalformedFile { path: PathBuf, reason: String },
}

impl TensorError {
    /// Attach a path to a stream-level error, for the file wrappers.
    pub(crate) fn at_path(self, operation: &'static str, path: &std::path::Path) -> Self {
        match self {
            TensorError::Io { source, .. } => TensorError::File {
                operation,
                path: path.to_path_buf(),
                source,
            },
            TensorError::Malformed { reason } => TensorError::MalformedFile {
                path: path.to_path_buf(),
                reason,
            },
            other => other,
        }
    }
}
