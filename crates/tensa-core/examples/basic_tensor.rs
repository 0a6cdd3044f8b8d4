//! Basic tensor creation and manipulation examples.
//!
//! This example demonstrates the core functionality of tensa-core:
//! - Creating tensors with different initialization methods
//! - Accessing tensor properties (rank, shape, size)
//! - Indexing and modifying tensor elements
//! - Writing a tensor to a file and reading it back
//!
//! Run with:
//! ```bash
//! cargo run --example basic_tensor
//! ```

use tensa_core::{read_tensor_from_file, write_tensor_to_file, Tensor, TensorResult};

fn main() -> TensorResult<()> {
    println!("=== tensa-core: Basic Tensor Examples ===\n");

    example_creation()?;
    example_indexing();
    example_pretty_printing()?;
    example_file_roundtrip()?;

    println!("\n=== All examples completed successfully! ===");
    Ok(())
}

fn example_creation() -> TensorResult<()> {
    println!("--- Example 1: Tensor Creation ---");

    // Create a tensor of zeros
    let zeros = Tensor::<f64>::zeros(&[2, 3]);
    println!("Zeros tensor [2, 3]:");
    println!("  Shape: {:?}", zeros.shape());
    println!("  First element: {}", zeros[&[0, 0]]);

    // Create a tensor filled with a specific value
    let fives = Tensor::from_elem(&[2, 2, 2], 5.0);
    println!("\nTensor filled with 5.0 [2, 2, 2]:");
    println!("  Strides: {:?}", fives.strides());
    println!("  Element at [0, 1, 1]: {}", fives[&[0, 1, 1]]);

    // Create a tensor from a vector
    let from_vec = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3])?;
    println!("\nTensor from vec [2, 3]:");
    println!("  Element at [1, 2]: {}", from_vec[&[1, 2]]);

    // A rank-0 scalar
    let scalar = Tensor::<f64>::new();
    println!("\nRank-0 scalar:");
    println!("  rank = {}, len = {}", scalar.rank(), scalar.len());

    Ok(())
}

fn example_indexing() {
    println!("\n--- Example 2: Indexing and Modification ---");

    let mut tensor = Tensor::<i64>::zeros(&[2, 2, 2]);
    let mut value = 1;
    for i in 0..2 {
        for j in 0..2 {
            for k in 0..2 {
                tensor[&[i, j, k]] = value;
                value += 1;
            }
        }
    }
    println!("Linear storage after lexicographic fill: {:?}", tensor.as_slice());
    println!("Checked access out of range: {:?}", tensor.get(&[5, 0, 0]));
}

fn example_pretty_printing() -> TensorResult<()> {
    println!("\n--- Example 3: Pretty-Printing ---");

    let matrix = Tensor::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3])?;
    println!("Rank-2 tensor renders one line per row:");
    print!("{matrix}");

    let cube = Tensor::from_vec((1..=8).collect::<Vec<i32>>(), &[2, 2, 2])?;
    println!("\nRank-3 tensor renders nested dimension headers:");
    print!("{cube}");
    Ok(())
}

fn example_file_roundtrip() -> TensorResult<()> {
    println!("\n--- Example 4: File Round-Trip ---");

    let path = std::env::temp_dir().join("tensa_basic_tensor.txt");
    let tensor = Tensor::from_vec(vec![1.5, 2.5, 3.5, 4.5], &[2, 2])?;

    write_tensor_to_file(&tensor, &path)?;
    let back: Tensor<f64> = read_tensor_from_file(&path)?;

    println!("Round-trip equal: {}", back == tensor);
    Ok(())
}
