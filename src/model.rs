//! Model parameters and run outcomes.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::utils::check_num;

/// Wright-Fisher model parameters.
///
/// Immutable once constructed; every run receives its own copy.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct Params {
    /// Population size (number of allele copies per generation).
    pub n_pop: u64,

    /// Selection coefficient of allele A (conventionally > -1, not enforced).
    pub sel_coeff: f64,

    /// Per-generation mutation probability from A to a.
    pub mu_a_to_b: f64,
    /// Per-generation mutation probability from a to A.
    pub mu_b_to_a: f64,
}

impl Params {
    /// Create validated parameters.
    ///
    /// # Errors
    /// Returns an error if the population size is zero or either mutation
    /// rate lies outside [0, 1]. The selection coefficient is not
    /// range-checked here; a value below -1 surfaces as a step-time error
    /// when it actually corrupts the transition probability.
    pub fn new(n_pop: u64, sel_coeff: f64, mu_a_to_b: f64, mu_b_to_a: f64) -> Result<Self> {
        let params = Self {
            n_pop,
            sel_coeff,
            mu_a_to_b,
            mu_b_to_a,
        };
        params.validate()?;
        Ok(params)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        check_num(self.n_pop, 1..).context("invalid population size")?;
        check_num(self.mu_a_to_b, 0.0..=1.0).context("invalid mutation rate A to a")?;
        check_num(self.mu_b_to_a, 0.0..=1.0).context("invalid mutation rate a to A")?;
        Ok(())
    }
}

/// Final status of a single run.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Outcome {
    /// Allele A reached count N.
    Fixed,
    /// Allele A disappeared.
    Lost,
    /// The generation bound was hit before absorption.
    DidNotConverge,
}
