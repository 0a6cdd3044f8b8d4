//! Tensor type definition, constructors, and basic accessors
//!
//! This module defines the core `Tensor<T>` type. Element access lives in
//! `indexing`, trait implementations in `traits`, and pretty-printing in
//! `display`.

use num_traits::Num;

use crate::error::{TensorError, TensorResult};
use crate::types::{contiguous_strides, element_count, Rank, Shape, Strides};

/// Dense N-dimensional tensor with an owned, contiguous, row-major buffer.
///
/// A tensor's rank is fixed at construction: the shape never changes in
/// place, only element values do. Strides are derived from the shape (last
/// dimension fastest-varying) and are maintained as an invariant, never set
/// by callers.
///
/// # Type Parameters
///
/// * `T` - The element type; constructors require a numeric type
///   (`num_traits::Num`) so that zero/one values exist
///
/// # Invariants
///
/// - `data.len() == shape.iter().product()` (empty product = 1, so rank-0
///   tensors hold exactly one element)
/// - `strides.len() == shape.len()`
/// - for any valid index tuple, `Σ idx[i] * strides[i] < data.len()`
///
/// # Examples
///
/// ```
/// use tensa_core::Tensor;
///
/// let tensor = Tensor::<f64>::zeros(&[2, 3, 4]);
/// assert_eq!(tensor.shape(), &[2, 3, 4]);
/// assert_eq!(tensor.rank(), 3);
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(bound(serialize = "T: serde::Serialize")))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "T: serde::Deserialize<'de>"))
)]
pub struct Tensor<T> {
    pub(crate) shape: Shape,
    pub(crate) strides: Strides,
    pub(crate) data: Vec<T>,
}

impl<T> Tensor<T>
where
    T: Clone + Num,
{
    /// Create a rank-0 tensor holding a single zero element.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensa_core::Tensor;
    ///
    /// let scalar = Tensor::<i32>::new();
    /// assert_eq!(scalar.rank(), 0);
    /// assert_eq!(scalar.len(), 1);
    /// assert_eq!(scalar[&[]], 0);
    /// ```
    pub fn new() -> Self {
        Self {
            shape: Shape::new(),
            strides: Strides::new(),
            data: vec![T::zero()],
        }
    }

    /// Create a zero-filled tensor with the given shape.
    ///
    /// An empty shape yields a rank-0 scalar; a shape containing 0 yields an
    /// empty buffer. The element count must fit in `usize` (documented
    /// precondition; overflow panics rather than wrapping).
    ///
    /// # Examples
    ///
    /// ```
    /// use tensa_core::Tensor;
    ///
    /// let tensor = Tensor::<f32>::zeros(&[2, 3, 4]);
    /// assert_eq!(tensor.len(), 24);
    /// assert_eq!(tensor[&[1, 2, 3]], 0.0);
    /// ```
    pub fn zeros(shape: &[usize]) -> Self {
        Self::from_elem(shape, T::zero())
    }

    /// Create a one-filled tensor with the given shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensa_core::Tensor;
    ///
    /// let tensor = Tensor::<f64>::ones(&[3, 3]);
    /// assert_eq!(tensor[&[2, 2]], 1.0);
    /// ```
    pub fn ones(shape: &[usize]) -> Self {
        Self::from_elem(shape, T::one())
    }

    /// Create a tensor with every element set to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensa_core::Tensor;
    ///
    /// let fives = Tensor::from_elem(&[2, 2, 2], 5.0);
    /// assert_eq!(fives[&[0, 1, 1]], 5.0);
    /// ```
    pub fn from_elem(shape: &[usize], value: T) -> Self {
        let total = element_count(shape);
        Self {
            shape: Shape::from_slice(shape),
            strides: contiguous_strides(shape),
            data: vec![value; total],
        }
    }

    /// Create a tensor from a flat vector in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::ShapeDataMismatch`] if `data.len()` does not
    /// equal the product of the shape extents.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensa_core::Tensor;
    ///
    /// let tensor = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    /// assert_eq!(tensor[&[1, 0]], 4.0);
    ///
    /// assert!(Tensor::from_vec(vec![1.0, 2.0], &[3]).is_err());
    /// ```
    pub fn from_vec(data: Vec<T>, shape: &[usize]) -> TensorResult<Self> {
        let total = element_count(shape);
        if data.len() != total {
            return Err(TensorError::ShapeDataMismatch {
                shape: shape.to_vec(),
                expected: total,
                got: data.len(),
            });
        }
        Ok(Self {
            shape: Shape::from_slice(shape),
            strides: contiguous_strides(shape),
            data,
        })
    }

    /// Move the contents out of this tensor, leaving the rank-0 default
    /// behind.
    ///
    /// This is `std::mem::take` with the container's documented moved-from
    /// contract: observers must never rely on a moved-from tensor retaining
    /// its old shape, only on it being the rank-0 zero scalar.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensa_core::Tensor;
    ///
    /// let mut a = Tensor::from_elem(&[2, 2], 3.0);
    /// let b = a.take();
    /// assert_eq!(b, Tensor::from_elem(&[2, 2], 3.0));
    /// assert_eq!(a.rank(), 0);
    /// assert_eq!(a[&[]], 0.0);
    /// ```
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl<T> Tensor<T> {
    /// Get the rank (number of dimensions) of this tensor.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensa_core::Tensor;
    ///
    /// let tensor = Tensor::<f32>::zeros(&[2, 3, 4]);
    /// assert_eq!(tensor.rank(), 3);
    /// ```
    pub fn rank(&self) -> Rank {
        self.shape.len()
    }

    /// Get the shape of this tensor.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensa_core::Tensor;
    ///
    /// let tensor = Tensor::<f32>::zeros(&[2, 3]);
    /// assert_eq!(tensor.shape(), &[2, 3]);
    /// ```
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Get the row-major strides of this tensor.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensa_core::Tensor;
    ///
    /// let tensor = Tensor::<f32>::zeros(&[2, 3, 4]);
    /// assert_eq!(tensor.strides(), &[12, 4, 1]);
    /// ```
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Total number of elements in this tensor.
    ///
    /// Rank-0 tensors have exactly one element; a shape containing 0 has
    /// none.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this tensor holds no elements (some extent is 0).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The underlying buffer in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable access to the underlying buffer in row-major order.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the tensor, returning its buffer in row-major order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank0_default_state() {
        let scalar = Tensor::<i64>::new();
        assert_eq!(scalar.rank(), 0);
        assert_eq!(scalar.len(), 1);
        assert_eq!(scalar.as_slice(), &[0]);
        assert!(scalar.shape().is_empty());
        assert!(scalar.strides().is_empty());
    }

    #[test]
    fn test_zeros_and_from_elem_sizing() {
        let z = Tensor::<f64>::zeros(&[2, 3]);
        assert_eq!(z.len(), 6);
        assert!(z.as_slice().iter().all(|&v| v == 0.0));

        let f = Tensor::from_elem(&[4], 9u32);
        assert_eq!(f.len(), 4);
        assert!(f.as_slice().iter().all(|&v| v == 9));
    }

    #[test]
    fn test_zero_extent_shape() {
        let t = Tensor::<f64>::zeros(&[2, 0, 3]);
        assert_eq!(t.rank(), 3);
        assert_eq!(t.len(), 0);
        assert!(t.is_empty());
    }

    #[test]
    fn test_from_vec_length_mismatch() {
        let err = Tensor::from_vec(vec![1.0, 2.0, 3.0], &[2, 2]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("4"), "unexpected message: {msg}");
        assert!(msg.contains("3"), "unexpected message: {msg}");
    }

    #[test]
    fn test_take_resets_source() {
        let mut a = Tensor::from_vec(vec![1, 2, 3, 4], &[2, 2]).unwrap();
        let b = a.take();
        assert_eq!(b.shape(), &[2, 2]);
        assert_eq!(b.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(a, Tensor::<i32>::new());
    }

    #[test]
    fn test_clone_is_independent() {
        let a = Tensor::from_vec(vec![1, 2, 3, 4], &[2, 2]).unwrap();
        let mut b = a.clone();
        assert_eq!(a, b);
        b[&[0, 0]] = 99;
        assert_eq!(a[&[0, 0]], 1);
        assert_ne!(a, b);
    }
}
