//! Uniform random sample generation.
//!
//! The generator owns its RNG and distribution explicitly — no process-wide
//! state. State persists across `generate` calls within one generator, so
//! consecutive calls continue the same pseudo-random sequence.

use rand::distr::{Distribution, StandardUniform};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Generator for uniform `f32` samples in `[0, 1)`.
pub struct SampleGenerator {
    rng: SmallRng,
    dist: StandardUniform,
}

impl SampleGenerator {
    /// Generator seeded from OS entropy. Sequences are only reproducible
    /// within a single process run.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
            dist: StandardUniform,
        }
    }

    /// Deterministic generator: the same seed yields bit-identical sequences
    /// across runs.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            dist: StandardUniform,
        }
    }

    /// Produce exactly `n` samples, each uniform in `[0, 1)`.
    pub fn generate(&mut self, n: usize) -> Vec<f32> {
        let mut samples = Vec::with_capacity(n);
        for _ in 0..n {
            samples.push(self.dist.sample(&mut self.rng));
        }
        samples
    }
}
