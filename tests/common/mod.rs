//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

use flowbench_rs::SampleGenerator;

/// Deterministic sample vector for reproducible end-to-end runs.
pub fn seeded_samples(seed: u64, n: usize) -> Vec<f32> {
    SampleGenerator::from_seed(seed).generate(n)
}

/// Assert two sample slices are bit-identical and in the same order.
pub fn assert_samples_eq(actual: &[f32], expected: &[f32]) {
    assert_eq!(actual.len(), expected.len(), "sample count differs");
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            a.to_bits() == e.to_bits(),
            "sample {} differs: {} != {}",
            i,
            a,
            e
        );
    }
}
