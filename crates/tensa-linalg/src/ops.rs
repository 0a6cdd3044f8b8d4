//! Matrix-vector product

use num_traits::Num;

use crate::error::{LinalgError, LinalgResult};
use crate::matrix::Matrix;
use crate::vector::Vector;

/// Compute the matrix-vector product `result[i] = Σ_j mat(i, j) * vec(j)`.
///
/// The result has length `mat.rows()`, so rectangular matrices are
/// supported; for square matrices this coincides with sizing by the input
/// vector.
///
/// # Errors
///
/// Returns [`LinalgError::DimensionMismatch`] when `mat.cols() !=
/// vec.len()`. A mismatch never yields an empty result.
///
/// # Complexity
///
/// Time: O(rows × cols). Space: O(rows).
///
/// # Examples
///
/// ```
/// use tensa_linalg::{matvec, Matrix, Vector};
///
/// let m = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
/// let v = Vector::from_vec(vec![1.0, 1.0]);
///
/// let r = matvec(&m, &v).unwrap();
/// assert_eq!(r, Vector::from_vec(vec![3.0, 7.0]));
/// ```
pub fn matvec<T>(mat: &Matrix<T>, vec: &Vector<T>) -> LinalgResult<Vector<T>>
where
    T: Clone + Num,
{
    if mat.cols() != vec.len() {
        return Err(LinalgError::DimensionMismatch {
            rows: mat.rows(),
            cols: mat.cols(),
            len: vec.len(),
        });
    }

    let mut result = Vector::new(mat.rows());
    for i in 0..mat.rows() {
        let mut acc = T::zero();
        for j in 0..mat.cols() {
            acc = acc + mat[(i, j)].clone() * vec[j].clone();
        }
        result[i] = acc;
    }
    Ok(result)
}
