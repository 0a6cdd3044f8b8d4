//! Matrix-vector product walkthrough.
//!
//! Run with:
//! ```bash
//! cargo run --example matvec
//! ```

use tensa_linalg::{matvec, LinalgResult, Matrix, Vector};

fn main() -> LinalgResult<()> {
    println!("=== tensa-linalg: matvec Examples ===\n");

    // A 2x2 system
    let m = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2)?;
    let v = Vector::from_vec(vec![1.0, 1.0]);
    let r = matvec(&m, &v)?;
    println!("[[1, 2], [3, 4]] * [1, 1] = {r}");

    // Rectangular: result length follows the row count
    let rect = Matrix::from_vec(vec![1.0, 0.0, 0.0, 1.0, 1.0, 1.0], 3, 2)?;
    let r = matvec(&rect, &v)?;
    println!("3x2 matrix * length-2 vector = {r}");

    // Mismatched dimensions surface as a structured error
    let wide = Matrix::<f64>::new(2, 3);
    match matvec(&wide, &v) {
        Err(e) => println!("2x3 matrix * length-2 vector: {e}"),
        Ok(_) => unreachable!(),
    }

    Ok(())
}
