//! Checked element access
//!
//! Converts multi-dimensional index tuples into linear offsets under the
//! row-major stride formula, validating tuple length against the rank and
//! every component against its extent.

use super::types::Tensor;
use crate::error::{TensorError, TensorResult};

impl<T> Tensor<T> {
    /// Compute the linear offset of an index tuple.
    ///
    /// The offset is `Σ idx[i] * strides[i]`; for a valid tuple it is always
    /// within the buffer.
    pub(crate) fn linear_offset(&self, index: &[usize]) -> TensorResult<usize> {
        if index.len() != self.rank() {
            return Err(TensorError::RankMismatch {
                expected: self.rank(),
                got: index.len(),
            });
        }
        let mut offset = 0usize;
        for (dim, (&i, (&extent, &stride))) in index
            .iter()
            .zip(self.shape.iter().zip(self.strides.iter()))
            .enumerate()
        {
            if i >= extent {
                return Err(TensorError::OutOfBounds {
                    index: index.to_vec(),
                    shape: self.shape.to_vec(),
                    dim,
                });
            }
            offset += i * stride;
        }
        Ok(offset)
    }

    /// Get an element by index without panicking.
    ///
    /// # Returns
    ///
    /// Some reference to the element if the index tuple has length `rank()`
    /// and every component is in range, None otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensa_core::Tensor;
    ///
    /// let tensor = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// assert_eq!(tensor.get(&[0, 1]), Some(&2.0));
    /// assert_eq!(tensor.get(&[5, 5]), None);
    /// assert_eq!(tensor.get(&[0]), None);
    /// ```
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        let offset = self.linear_offset(index).ok()?;
        Some(&self.data[offset])
    }

    /// Get a mutable reference to an element by index without panicking.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensa_core::Tensor;
    ///
    /// let mut tensor = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// if let Some(elem) = tensor.get_mut(&[0, 1]) {
    ///     *elem = 10.0;
    /// }
    /// assert_eq!(tensor[&[0, 1]], 10.0);
    /// ```
    pub fn get_mut(&mut self, index: &[usize]) -> Option<&mut T> {
        let offset = self.linear_offset(index).ok()?;
        Some(&mut self.data[offset])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_offset_row_major() {
        let t = Tensor::<f64>::zeros(&[2, 3, 4]);
        assert_eq!(t.linear_offset(&[0, 0, 0]).unwrap(), 0);
        assert_eq!(t.linear_offset(&[0, 0, 1]).unwrap(), 1);
        assert_eq!(t.linear_offset(&[0, 1, 0]).unwrap(), 4);
        assert_eq!(t.linear_offset(&[1, 0, 0]).unwrap(), 12);
        assert_eq!(t.linear_offset(&[1, 2, 3]).unwrap(), 23);
    }

    #[test]
    fn test_offset_rejects_wrong_rank() {
        let t = Tensor::<f64>::zeros(&[2, 3]);
        assert!(matches!(
            t.linear_offset(&[1]),
            Err(TensorError::RankMismatch { expected: 2, got: 1 })
        ));
        assert!(matches!(
            t.linear_offset(&[1, 1, 1]),
            Err(TensorError::RankMismatch { expected: 2, got: 3 })
        ));
    }

    #[test]
    fn test_offset_rejects_out_of_range_component() {
        let t = Tensor::<f64>::zeros(&[2, 3]);
        match t.linear_offset(&[1, 3]) {
            Err(TensorError::OutOfBounds { dim, .. }) => assert_eq!(dim, 1),
            other => panic!("expected OutOfBounds, got {other:?}"),
        }
    }

    #[test]
    fn test_rank0_empty_index() {
        let t = Tensor::<i32>::new();
        assert_eq!(t.linear_offset(&[]).unwrap(), 0);
        assert_eq!(t.get(&[]), Some(&0));
        assert_eq!(t.get(&[0]), None);
    }

    #[test]
    fn test_row_major_write_read_order() {
        // Writing 1..=8 in lexicographic index order must match linear
        // storage order.
        let mut t = Tensor::<i32>::zeros(&[2, 2, 2]);
        let mut v = 1;
        for i in 0..2 {
            for j in 0..2 {
                for k in 0..2 {
                    t[&[i, j, k]] = v;
                    v += 1;
                }
            }
        }
        assert_eq!(t.as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8]);
        let mut v = 1;
        for i in 0..2 {
            for j in 0..2 {
                for k in 0..2 {
                    assert_eq!(t[&[i, j, k]], v);
                    v += 1;
                }
            }
        }
    }
}
