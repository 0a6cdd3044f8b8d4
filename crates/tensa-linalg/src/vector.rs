//! Rank-1 tensor adaptor

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use num_traits::Num;
use tensa_core::{read_tensor_from_file, Tensor};

use crate::error::{LinalgError, LinalgResult};

/// A vector backed by a rank-1 [`Tensor`].
///
/// The wrapper owns its tensor and forwards all element access to the
/// tensor's strided indexing with a length-1 index tuple. The rank-1
/// invariant is established at construction and never broken afterwards.
///
/// # Examples
///
/// ```
/// use tensa_linalg::Vector;
///
/// let mut v = Vector::from_elem(3, 1.0);
/// v[1] = 5.0;
/// assert_eq!(v.len(), 3);
/// assert_eq!(v[1], 5.0);
/// ```
#[derive(Clone, PartialEq)]
pub struct Vector<T> {
    tensor: Tensor<T>,
}

impl<T> Vector<T>
where
    T: Clone + Num,
{
    /// Create a zero-filled vector of the given length.
    pub fn new(len: usize) -> Self {
        Self {
            tensor: Tensor::zeros(&[len]),
        }
    }

    /// Create a vector with every element set to `value`.
    pub fn from_elem(len: usize, value: T) -> Self {
        Self {
            tensor: Tensor::from_elem(&[len], value),
        }
    }

    /// Create a vector from its elements.
    pub fn from_vec(data: Vec<T>) -> Self {
        let len = data.len();
        Self {
            // The shape is derived from the data, so the lengths agree.
            tensor: Tensor::from_vec(data, &[len]).expect("shape derived from data length"),
        }
    }

    /// Read a vector from a tensor file.
    ///
    /// # Errors
    ///
    /// [`LinalgError::Tensor`] if the file cannot be read or parsed,
    /// [`LinalgError::WrongRank`] if it holds a tensor of rank other than 1.
    pub fn from_file<P>(path: P) -> LinalgResult<Self>
    where
        T: FromStr,
        <T as FromStr>::Err: fmt::Display,
        P: AsRef<Path>,
    {
        let tensor = read_tensor_from_file(path)?;
        Self::try_from(tensor)
    }
}

impl<T> Vector<T> {
    /// Number of elements.
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    /// Whether the vector has no elements.
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    /// Checked element access.
    pub fn get(&self, idx: usize) -> Option<&T> {
        self.tensor.get(&[idx])
    }

    /// The underlying rank-1 tensor.
    pub fn tensor(&self) -> &Tensor<T> {
        &self.tensor
    }

    /// Consume the vector, returning the underlying tensor.
    pub fn into_tensor(self) -> Tensor<T> {
        self.tensor
    }
}

/// Adopt a rank-1 tensor as a vector.
impl<T> TryFrom<Tensor<T>> for Vector<T> {
    type Error = LinalgError;

    fn try_from(tensor: Tensor<T>) -> LinalgResult<Self> {
        if tensor.rank() != 1 {
            return Err(LinalgError::WrongRank {
                expected: 1,
                got: tensor.rank(),
            });
        }
        Ok(Self { tensor })
    }
}

impl<T> std::ops::Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.tensor[&[idx]]
    }
}

impl<T> std::ops::IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        &mut self.tensor[&[idx]]
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tensor.fmt(f)
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("len", &self.len())
            .field("tensor", &self.tensor)
            .finish()
    }
}
