//! Property-based tests for the tensor container
//!
//! Uses proptest to verify the container invariants across randomly
//! generated shapes and values.

#[cfg(test)]
mod tests {
    use crate::io::{read_tensor, write_tensor};
    use crate::Tensor;
    use proptest::prelude::*;

    // Strategy for generating valid tensor shapes (0-4D, small extents)
    fn shape_strategy() -> impl Strategy<Value = Vec<usize>> {
        prop::collection::vec(1usize..6, 0..=4)
    }

    /// Walk all index tuples of a shape in lexicographic order.
    fn lexicographic_indices(shape: &[usize]) -> Vec<Vec<usize>> {
        let mut out = vec![vec![]];
        for &extent in shape {
            let mut next = Vec::new();
            for prefix in &out {
                for i in 0..extent {
                    let mut idx = prefix.clone();
                    idx.push(i);
                    next.push(idx);
                }
            }
            out = next;
        }
        out
    }

    #[test]
    fn test_proptest_smoke() {
        let tensor = Tensor::<f64>::zeros(&[2, 3]);
        assert_eq!(tensor.shape(), &[2, 3]);
    }

    proptest! {
        #[test]
        fn prop_from_elem_sizing_and_fill(shape in shape_strategy(), fill in -1000i64..1000) {
            let tensor = Tensor::from_elem(&shape, fill);
            let expected: usize = shape.iter().product();
            prop_assert_eq!(tensor.len(), expected);
            prop_assert_eq!(tensor.rank(), shape.len());
            for idx in lexicographic_indices(&shape) {
                prop_assert_eq!(tensor[idx.as_slice()], fill);
            }
        }

        #[test]
        fn prop_lexicographic_order_matches_linear_storage(shape in shape_strategy()) {
            let total: usize = shape.iter().product();
            let values: Vec<i64> = (0..total as i64).collect();
            let tensor = Tensor::from_vec(values, &shape).unwrap();
            for (linear, idx) in lexicographic_indices(&shape).iter().enumerate() {
                prop_assert_eq!(tensor[idx.as_slice()], linear as i64);
            }
        }

        #[test]
        fn prop_strides_are_suffix_products(shape in shape_strategy()) {
            let tensor = Tensor::<f64>::zeros(&shape);
            let strides = tensor.strides();
            prop_assert_eq!(strides.len(), shape.len());
            for i in 0..shape.len() {
                let suffix: usize = shape[i + 1..].iter().product();
                prop_assert_eq!(strides[i], suffix);
            }
        }

        #[test]
        fn prop_clone_equal_and_independent(shape in shape_strategy(), fill in any::<i32>()) {
            let original = Tensor::from_elem(&shape, fill);
            let mut copy = original.clone();
            prop_assert_eq!(&copy, &original);

            if !copy.is_empty() {
                let first = lexicographic_indices(&shape).remove(0);
                copy[first.as_slice()] = fill.wrapping_add(1);
                prop_assert_eq!(original[first.as_slice()], fill);
                prop_assert_ne!(&copy, &original);
            }
        }

        #[test]
        fn prop_take_moves_value_and_resets_source(shape in shape_strategy(), fill in any::<i32>()) {
            let mut source = Tensor::from_elem(&shape, fill);
            let expected = source.clone();
            let moved = source.take();
            prop_assert_eq!(moved, expected);
            prop_assert_eq!(source, Tensor::<i32>::new());
        }

        #[test]
        fn prop_serialization_roundtrip_int(shape in shape_strategy()) {
            let total: usize = shape.iter().product();
            let values: Vec<i64> = (0..total as i64).map(|v| v * 7 - 3).collect();
            let tensor = Tensor::from_vec(values, &shape).unwrap();

            let mut buf = Vec::new();
            write_tensor(&tensor, &mut buf).unwrap();
            let back: Tensor<i64> = read_tensor(&buf[..]).unwrap();
            prop_assert_eq!(back, tensor);
        }

        #[test]
        fn prop_serialization_roundtrip_f64(
            shape in shape_strategy(),
            seed in any::<f64>().prop_filter("finite", |v| v.is_finite()),
        ) {
            let total: usize = shape.iter().product();
            let values: Vec<f64> = (0..total)
                .map(|i| seed * (i as f64 + 0.5) / 3.0)
                .collect();
            let tensor = Tensor::from_vec(values, &shape).unwrap();

            let mut buf = Vec::new();
            write_tensor(&tensor, &mut buf).unwrap();
            let back: Tensor<f64> = read_tensor(&buf[..]).unwrap();

            prop_assert_eq!(back.shape(), tensor.shape());
            for (a, b) in tensor.as_slice().iter().zip(back.as_slice()) {
                prop_assert_eq!(a.to_bits(), b.to_bits());
            }
        }

        #[test]
        fn prop_get_rejects_what_index_accepts_not(shape in shape_strategy()) {
            let tensor = Tensor::<f64>::zeros(&shape);
            // Wrong tuple length
            let long: Vec<usize> = vec![0; shape.len() + 1];
            prop_assert!(tensor.get(&long).is_none());
            // First component out of range
            if !shape.is_empty() {
                let mut bad: Vec<usize> = vec![0; shape.len()];
                bad[0] = shape[0];
                prop_assert!(tensor.get(&bad).is_none());
            }
        }
    }
}
