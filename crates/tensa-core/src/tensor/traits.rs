//! Trait implementations for `Tensor`
//!
//! - `Index` / `IndexMut` — panicking element access
//! - `Default` — the rank-0 zero scalar (moved-from state)
//! - `PartialEq` / `Eq` — shape-sensitive equality
//! - `Debug`

use std::fmt;

use num_traits::Num;

use super::types::Tensor;

impl<T> std::ops::Index<&[usize]> for Tensor<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if the index tuple length differs from the rank or any
    /// component is out of range. Invalid indices never reach the buffer.
    fn index(&self, index: &[usize]) -> &Self::Output {
        match self.linear_offset(index) {
            Ok(offset) => &self.data[offset],
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> std::ops::IndexMut<&[usize]> for Tensor<T> {
    fn index_mut(&mut self, index: &[usize]) -> &mut Self::Output {
        match self.linear_offset(index) {
            Ok(offset) => &mut self.data[offset],
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Clone + Num> Default for Tensor<T> {
    /// The rank-0 zero scalar, also the state a tensor is left in after
    /// [`Tensor::take`].
    fn default() -> Self {
        Self::new()
    }
}

/// Two tensors are equal iff their shapes are equal element-wise and their
/// buffers are equal in row-major order. Tensors of different rank or shape
/// are never equal, independent of element values. Strides are derived from
/// the shape and carry no extra information, so they do not participate.
impl<T: PartialEq> PartialEq for Tensor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.data == other.data
    }
}

impl<T: Eq> Eq for Tensor<T> {}

impl<T: fmt::Debug> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape)
            .field("strides", &self.strides)
            .field("data", &self.data)
            .finish()
    }
}
