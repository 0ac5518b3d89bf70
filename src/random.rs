//! Explicit, seedable source of binomial samples.

use anyhow::{Context, Result};
use rand::prelude::*;
use rand_chacha::ChaCha12Rng;
use rand_distr::Binomial;

/// Seedable random source; the only source of non-determinism in a run.
///
/// Wraps a [`ChaCha12Rng`] so that the same seed and the same call sequence
/// always produce identical samples. There is no global instance; every
/// engine owns its own stream.
pub struct RandomSource {
    rng: ChaCha12Rng,
}

impl RandomSource {
    /// Create a deterministic source from a 64-bit seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha12Rng::seed_from_u64(seed),
        }
    }

    /// Create a source seeded from OS entropy.
    pub fn from_os_rng() -> Result<Self> {
        let rng = ChaCha12Rng::try_from_os_rng().context("failed to seed rng from os")?;
        Ok(Self { rng })
    }

    /// Draw one sample from Binomial(n, p).
    ///
    /// # Errors
    /// Returns an error if `p` lies outside [0, 1].
    pub fn binomial(&mut self, n: u64, p: f64) -> Result<u64> {
        let dist = Binomial::new(n, p)
            .with_context(|| format!("invalid binomial distribution (n: {n}, p: {p})"))?;
        Ok(dist.sample(&mut self.rng))
    }

    /// Draw a fresh seed, e.g. for an independent per-run source.
    pub fn next_seed(&mut self) -> u64 {
        self.rng.random()
    }
}
