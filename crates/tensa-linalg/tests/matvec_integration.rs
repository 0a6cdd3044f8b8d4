//! Integration tests for tensa-linalg
//!
//! Exercises the adaptors against the tensor file format end to end.

use std::fs;

use tensa_core::write_tensor_to_file;
use tensa_linalg::{matvec, LinalgError, Matrix, Vector};

#[test]
fn test_matvec_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let mat_path = dir.path().join("mat.txt");
    let vec_path = dir.path().join("vec.txt");

    let m = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
    let v = Vector::from_vec(vec![1.0, 1.0]);
    write_tensor_to_file(m.tensor(), &mat_path).unwrap();
    write_tensor_to_file(v.tensor(), &vec_path).unwrap();

    let m_loaded = Matrix::<f64>::from_file(&mat_path).unwrap();
    let v_loaded = Vector::<f64>::from_file(&vec_path).unwrap();
    assert_eq!(m_loaded, m);
    assert_eq!(v_loaded, v);

    let r = matvec(&m_loaded, &v_loaded).unwrap();
    assert_eq!(r, Vector::from_vec(vec![3.0, 7.0]));
}

#[test]
fn test_vector_from_file_rejects_matrix() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mat.txt");
    fs::write(&path, "2 2 2 1 2 3 4").unwrap();

    match Vector::<i32>::from_file(&path) {
        Err(LinalgError::WrongRank { expected, got }) => {
            assert_eq!((expected, got), (1, 2));
        }
        other => panic!("expected WrongRank, got {other:?}"),
    }
}

#[test]
fn test_matrix_from_file_rejects_vector() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vec.txt");
    fs::write(&path, "1 3 1 2 3").unwrap();

    assert!(matches!(
        Matrix::<i32>::from_file(&path),
        Err(LinalgError::WrongRank { expected: 2, got: 1 })
    ));
}

#[test]
fn test_from_file_missing_path_is_tensor_error() {
    let err = Vector::<f64>::from_file("/nonexistent/vec.txt").unwrap_err();
    assert!(matches!(err, LinalgError::Tensor(_)), "{err}");
}

#[test]
fn test_handwritten_matrix_file() {
    // The file format is whitespace-separated tokens: rank, shape, then
    // row-major data. A hand-written file loads like a generated one.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hand.txt");
    fs::write(&path, "2\n2 3\n1 2 3\n4 5 6\n").unwrap();

    let m = Matrix::<i64>::from_file(&path).unwrap();
    assert_eq!(m.rows(), 2);
    assert_eq!(m.cols(), 3);
    assert_eq!(m[(1, 2)], 6);

    let v = Vector::from_vec(vec![1, 1, 1]);
    let r = matvec(&m, &v).unwrap();
    assert_eq!(r, Vector::from_vec(vec![6, 15]));
}
