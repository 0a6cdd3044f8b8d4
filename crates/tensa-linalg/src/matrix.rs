//! Rank-2 tensor adaptor

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use num_traits::Num;
use tensa_core::{read_tensor_from_file, Tensor};

use crate::error::{LinalgError, LinalgResult};

/// A matrix backed by a rank-2 [`Tensor`].
///
/// Rows are the first dimension, columns the second; storage is row-major
/// like every tensor. Element access forwards to the tensor with a length-2
/// index tuple.
///
/// # Examples
///
/// ```
/// use tensa_linalg::Matrix;
///
/// let m = Matrix::from_vec(vec![1, 2, 3, 4, 5, 6], 2, 3).unwrap();
/// assert_eq!(m.rows(), 2);
/// assert_eq!(m.cols(), 3);
/// assert_eq!(m[(1, 0)], 4);
/// ```
#[derive(Clone, PartialEq)]
pub struct Matrix<T> {
    tensor: Tensor<T>,
}

impl<T> Matrix<T>
where
    T: Clone + Num,
{
    /// Create a zero-filled matrix.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            tensor: Tensor::zeros(&[rows, cols]),
        }
    }

    /// Create a matrix with every element set to `value`.
    pub fn from_elem(rows: usize, cols: usize, value: T) -> Self {
        Self {
            tensor: Tensor::from_elem(&[rows, cols], value),
        }
    }

    /// Create a matrix from row-major data.
    ///
    /// # Errors
    ///
    /// [`LinalgError::Tensor`] if `data.len() != rows * cols`.
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> LinalgResult<Self> {
        let tensor = Tensor::from_vec(data, &[rows, cols])?;
        Ok(Self { tensor })
    }

    /// Read a matrix from a tensor file.
    ///
    /// # Errors
    ///
    /// [`LinalgError::Tensor`] if the file cannot be read or parsed,
    /// [`LinalgError::WrongRank`] if it holds a tensor of rank other than 2.
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

impl<T> Matrix<T> {
    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.tensor.shape()[0]
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.tensor.shape()[1]
    }

    /// Checked element access.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.tensor.get(&[row, col])
    }

    /// The underlying rank-2 tensor.
    pub fn tensor(&self) -> &Tensor<T> {
        &self.tensor
    }

    /// Consume the matrix, returning the underlying tensor.
    pub fn into_tensor(self) -> Tensor<T> {
        self.tensor
    }
}

/// Adopt a rank-2 tensor as a matrix.
impl<T> TryFrom<Tensor<T>> for Matrix<T> {
    type Error = LinalgError;

    fn try_from(tensor: Tensor<T>) -> LinalgResult<Self> {
        if tensor.rank() != 2 {
            return Err(LinalgError::WrongRank {
                expected: 2,
                got: tensor.rank(),
            });
        }
        Ok(Self { tensor })
    }
}

impl<T> std::ops::Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.tensor[&[row, col]]
    }
}

impl<T> std::ops::IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.tensor[&[row, col]]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tensor.fmt(f)
    }
}

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("rows", &self.rows())
            .field("cols", &self.cols())
            .field("tensor", &self.tensor)
            .finish()
    }
}
