//! # tensa - Dense Tensor Container Stack
//!
//! This is the **meta crate** that re-exports all tensa components for
//! convenient access.
//!
//! ## Quick Start
//!
//! ```
//! use tensa::prelude::*;
//!
//! // Create a 3D tensor
//! let tensor = Tensor::<f64>::zeros(&[2, 3, 4]);
//! assert_eq!(tensor.shape(), &[2, 3, 4]);
//!
//! // Matrix-vector product through the adaptors
//! let m = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2)?;
//! let v = Vector::from_vec(vec![1.0, 1.0]);
//! assert_eq!(matvec(&m, &v)?, Vector::from_vec(vec![3.0, 7.0]));
//! # Ok::<(), tensa::linalg::LinalgError>(())
//! ```
//!
//! ## Components
//!
//! ### Core Tensor Container ([`core`])
//!
//! Dense rank-N tensors with row-major strides, checked indexing, equality,
//! pretty-printing, and text file serialization.
//!
//! ```
//! use tensa::core::{read_tensor, write_tensor, Tensor};
//!
//! let t = Tensor::from_vec(vec![1, 2, 3, 4], &[2, 2]).unwrap();
//! let mut buf = Vec::new();
//! write_tensor(&t, &mut buf).unwrap();
//! assert_eq!(read_tensor::<i32, _>(&buf[..]).unwrap(), t);
//! ```
//!
//! ### Vector/Matrix Adaptors ([`linalg`])
//!
//! Thin rank-1/rank-2 wrappers and a matrix-vector product with structured
//! dimension errors.

/// Core tensor container (re-export of [`tensa_core`]).
pub mod core {
    pub use tensa_core::*;
}

/// Vector/matrix adaptors and matvec (re-export of [`tensa_linalg`]).
pub mod linalg {
    pub use tensa_linalg::*;
}

/// Commonly used items.
pub mod prelude {
    pub use tensa_core::{
        read_tensor, read_tensor_from_file, write_tensor, write_tensor_to_file, Tensor,
        TensorError, TensorResult,
    };
    pub use tensa_linalg::{matvec, LinalgError, LinalgResult, Matrix, Vector};
}

pub use tensa_core::{Tensor, TensorError, TensorResult};
pub use tensa_linalg::{matvec, LinalgError, LinalgResult, Matrix, Vector};
