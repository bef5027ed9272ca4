//! Deterministic simulation RNG.
//!
//! The whole run draws from one `SimRng` owned by the simulation context.
//! Events execute strictly sequentially, so a single stream is enough for
//! reproducibility: the same seed and configuration always produce the same
//! waste amounts and travel times.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG for waste generation and travel-time draws.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
