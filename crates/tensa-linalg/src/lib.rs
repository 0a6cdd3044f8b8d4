//! # tensa-linalg
//!
//! Thin 1-D and 2-D adaptors over [`tensa_core::Tensor`], plus a
//! matrix-vector product.
//!
//! [`Vector`] wraps a rank-1 tensor and [`Matrix`] a rank-2 tensor; both
//! delegate element access to the underlying tensor's strided indexing and
//! add no storage of their own. [`matvec`] computes `result[i] = Σ_j M(i,j)
//! * v(j)` with dimension validation up front.
//!
//! ## Quick Start
//!
//! ```
//! use tensa_linalg::{matvec, Matrix, Vector};
//!
//! let m = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
//! let v = Vector::from_vec(vec![1.0, 1.0]);
//!
//! let r = matvec(&m, &v).unwrap();
//! assert_eq!(r, Vector::from_vec(vec![3.0, 7.0]));
//! ```
//!
//! Dimension mismatches are structured errors, never silent empty results:
//!
//! ```
//! use tensa_linalg::{matvec, LinalgError, Matrix, Vector};
//!
//! let m = Matrix::<f64>::new(2, 3);
//! let v = Vector::<f64>::new(2);
//! assert!(matches!(matvec(&m, &v), Err(LinalgError::DimensionMismatch { .. })));
//! ```

pub mod error;
pub mod matrix;
pub mod ops;
pub mod vector;

pub use error::{LinalgError, LinalgResult};
pub use matrix::Matrix;
pub use ops::matvec;
pub use vector::Vector;
