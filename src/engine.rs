//! Single-trajectory Wright-Fisher engine.

use crate::model::Params;
use crate::random::RandomSource;
use anyhow::{Context, Result, bail};

/// One population's allele-count trajectory.
///
/// Holds the parameters, the mutable state (current count of allele A,
/// generation counter, full history) and its own random source, and advances
/// one discrete generation per [`Engine::step`] call. Once the count reaches
/// 0 (loss) or N (fixation) the state is absorbing: further steps only extend
/// the history with the unchanged count.
pub struct Engine {
    params: Params,
    count_a: u64,
    generation: usize,
    history: Vec<u64>,
    rng: RandomSource,
}

impl Engine {
    /// Create a new `Engine` starting at the given frequency of allele A.
    ///
    /// The initial count is `round(N * init_freq_a)`.
    ///
    /// # Errors
    /// Returns an error if `init_freq_a` lies outside [0, 1] or if the
    /// parameters themselves are invalid (see [`Params::new`]).
    pub fn new(params: Params, init_freq_a: f64, rng: RandomSource) -> Result<Self> {
        params.validate().context("invalid parameters")?;
        if !(0.0..=1.0).contains(&init_freq_a) {
            bail!("initial frequency must be in the range [0, 1], but is {init_freq_a}");
        }

        let count_a = (params.n_pop as f64 * init_freq_a).round() as u64;

        Ok(Self {
            params,
            count_a,
            generation: 0,
            history: vec![count_a],
            rng,
        })
    }

    /// Advance one generation.
    ///
    /// Resamples the allele-A count from Binomial(N, psi), where psi is the
    /// expected frequency of A after selection reweights copies by `1 + s`
    /// and mutation moves probability mass between the alleles:
    ///
    /// ```text
    /// psi = (k (1+s) (1-mu1) + (N-k) mu2) / (k (1+s) + (N-k))
    /// ```
    ///
    /// # Errors
    /// Returns an error if the denominator above is not positive, which can
    /// only happen with a selection coefficient below -1.
    pub fn step(&mut self) -> Result<()> {
        if self.is_fixed() || self.is_lost() {
            // Absorbing state: the population stays at the boundary forever.
            self.generation += 1;
            self.history.push(self.count_a);
            return Ok(());
        }

        let k = self.count_a as f64;
        let n = self.params.n_pop as f64;
        let s = self.params.sel_coeff;
        let mu_1 = self.params.mu_a_to_b;
        let mu_2 = self.params.mu_b_to_a;

        let denom = k * (1.0 + s) + (n - k);
        if denom <= 0.0 {
            bail!(
                "transition probability denominator must be positive, but is {denom} \
                 (count_a: {}, sel_coeff: {s})",
                self.count_a
            );
        }

        // Clamp to guard against floating-point drift before sampling.
        let psi = ((k * (1.0 + s) * (1.0 - mu_1) + (n - k) * mu_2) / denom).clamp(0.0, 1.0);

        self.count_a = self
            .rng
            .binomial(self.params.n_pop, psi)
            .context("failed to sample next allele count")?;
        self.generation += 1;
        self.history.push(self.count_a);

        Ok(())
    }

    /// Allele A is fixed (count equals N).
    pub fn is_fixed(&self) -> bool {
        self.count_a == self.params.n_pop
    }

    /// Allele A is lost (count equals 0).
    pub fn is_lost(&self) -> bool {
        self.count_a == 0
    }

    /// Current count of allele A.
    pub fn count_a(&self) -> u64 {
        self.count_a
    }

    /// Current generation (0 at construction).
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Allele-A counts recorded so far, one per generation including
    /// generation 0.
    pub fn history(&self) -> &[u64] {
        &self.history
    }
}
