//! Core type definitions for tensa tensors.
//!
//! This module defines the shape/stride types shared across the stack and the
//! row-major stride arithmetic that the rest of the crate builds on.

use smallvec::SmallVec;

/// Type alias for tensor rank (number of dimensions).
///
/// 0 denotes a scalar tensor holding exactly one element.
pub type Rank = usize;

/// Shape type using SmallVec to avoid heap allocation for common cases.
///
/// Tensors up to rank 6 store their shape inline.
///
/// # Examples
///
/// ```
/// use tensa_core::{Shape, Tensor};
///
/// let tensor = Tensor::<f64>::zeros(&[2, 3]);
/// let shape: Shape = Shape::from_slice(tensor.shape());
/// assert_eq!(shape.as_slice(), &[2, 3]);
/// ```
pub type Shape = SmallVec<[usize; 6]>;

/// Stride type, same inline storage as [`Shape`].
///
/// Strides are always derived from the shape under row-major layout and never
/// set independently.
pub type Strides = SmallVec<[usize; 6]>;

/// Compute row-major (C-contiguous) strides for a shape.
///
/// The last dimension has stride 1; each preceding dimension's stride is the
/// product of all extents to its right.
pub(crate) fn contiguous_strides(shape: &[usize]) -> Strides {
    let mut strides = Strides::from_elem(0, shape.len());
    let mut stride = 1usize;
    for (s, &extent) in strides.iter_mut().zip(shape.iter()).rev() {
        *s = stride;
        stride = stride.saturating_mul(extent);
    }
    strides
}

/// Number of elements a shape addresses: the product of its extents, with the
/// empty product defined as 1 (rank-0 tensors hold one element).
///
/// Shapes whose element count exceeds `usize` violate a documented
/// precondition; this fails fast instead of wrapping.
pub(crate) fn element_count(shape: &[usize]) -> usize {
    shape
        .iter()
        .try_fold(1usize, |acc, &extent| acc.checked_mul(extent))
        .unwrap_or_else(|| panic!("shape {:?} overflows usize element count", shape))
}

/// Checked variant of [`element_count`] for untrusted input (file headers).
pub(crate) fn checked_element_count(shape: &[usize]) -> Option<usize> {
    shape
        .iter()
        .try_fold(1usize, |acc, &extent| acc.checked_mul(extent))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contiguous_strides_row_major() {
        assert_eq!(contiguous_strides(&[2, 3, 4]).as_slice(), &[12, 4, 1]);
        assert_eq!(contiguous_strides(&[5]).as_slice(), &[1]);
        assert_eq!(contiguous_strides(&[]).as_slice(), &[] as &[usize]);
    }

    #[test]
    fn test_strides_with_zero_extent() {
        // A zero-sized dimension still yields well-defined strides.
        assert_eq!(contiguous_strides(&[2, 0, 3]).as_slice(), &[0, 3, 1]);
    }

    #[test]
    fn test_element_count_empty_product() {
        assert_eq!(element_count(&[]), 1);
        assert_eq!(element_count(&[2, 3]), 6);
        assert_eq!(element_count(&[2, 0, 3]), 0);
    }

    #[test]
    fn test_checked_element_count_overflow() {
        assert_eq!(checked_element_count(&[usize::MAX, 2]), None);
    }
}
