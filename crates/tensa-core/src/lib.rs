//! # tensa-core
//!
//! Dense N-dimensional tensor container for the tensa stack.
//!
//! This crate provides the foundational building blocks:
//!
//! - **Dense tensor representation** ([`Tensor`]) with an owned, contiguous,
//!   row-major buffer and derived strides
//! - **Checked element access** via [`Tensor::get`]/[`Tensor::get_mut`] and
//!   panicking `Index`/`IndexMut` implementations
//! - **Text serialization** ([`io`]) with an exact read/write round-trip
//! - **Structured errors** ([`TensorError`]) for every fallible operation
//!
//! ## Memory Layout
//!
//! Tensors are always C-contiguous (row-major): the last dimension varies
//! fastest, and the stride of each dimension is the product of the extents of
//! the dimensions to its right. A rank-0 tensor holds exactly one element.
//!
//! ## Quick Start
//!
//! ```
//! use tensa_core::Tensor;
//!
//! // Create a 3D tensor of zeros
//! let tensor = Tensor::<f64>::zeros(&[2, 3, 4]);
//! assert_eq!(tensor.shape(), &[2, 3, 4]);
//! assert_eq!(tensor.rank(), 3);
//! assert_eq!(tensor.len(), 24);
//!
//! // Fill with a value and index into it
//! let mut fives = Tensor::from_elem(&[2, 2], 5.0);
//! fives[&[0, 1]] = 7.0;
//! assert_eq!(fives[&[0, 1]], 7.0);
//! ```
//!
//! ## Serialization
//!
//! Tensors round-trip through a plain-text token stream: rank, then the
//! shape, then the elements in row-major order.
//!
//! ```
//! use tensa_core::{read_tensor, write_tensor, Tensor};
//!
//! let t = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
//! let mut buf = Vec::new();
//! write_tensor(&t, &mut buf).unwrap();
//! let back: Tensor<f64> = read_tensor(&buf[..]).unwrap();
//! assert_eq!(back, t);
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`TensorResult`] with a structured
//! [`TensorError`]; indexing through `Index`/`IndexMut` panics on invalid
//! indices rather than computing a wrong offset.

pub mod error;
pub mod io;
pub mod tensor;
pub mod types;

#[cfg(test)]
mod property_tests;

pub use error::{TensorError, TensorResult};
pub use io::{read_tensor, read_tensor_from_file, write_tensor, write_tensor_to_file};
pub use tensor::Tensor;
pub use types::{Rank, Shape, Strides};
