use crate::model::Params;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::utils::check_num;

/// Simulation configuration.
///
/// Loaded from a TOML file and validated before use.
/// See [`Config::from_file`] for loading.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Config {
    pub model: ModelConfig,
    pub init: InitConfig,
    pub batch: BatchConfig,
}

/// `[model]` section: Wright-Fisher parameters.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Population size.
    pub n_pop: u64,
    /// Selection coefficient of allele A.
    pub sel_coeff: f64,
    /// Mutation probability from A to a.
    pub mu_a_to_b: f64,
    /// Mutation probability from a to A.
    pub mu_b_to_a: f64,
}

/// `[init]` section: initial condition.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct InitConfig {
    /// Initial frequency of allele A, in [0, 1].
    pub freq_a: f64,
}

/// `[batch]` section: batch execution bounds.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Number of independent runs.
    pub n_runs: usize,
    /// Generation bound per run.
    pub max_gens: usize,
}

impl Config {
    /// Load a [`Config`] from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or deserialized, or if
    /// the configuration values are invalid.
    pub fn from_file<P: AsRef<std::path::Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents = std::fs::read_to_string(file)
            .with_context(|| format!("failed to read {file:?}"))?;

        let config: Config = toml::from_str(&contents).context("failed to deserialize config")?;

        config.validate().context("failed to validate config")?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.params().context("invalid model section")?;

        check_num(self.init.freq_a, 0.0..=1.0).context("invalid initial frequency")?;

        check_num(self.batch.n_runs, 1..100_000).context("invalid number of runs")?;
        check_num(self.batch.max_gens, 1..10_000_000).context("invalid generation bound")?;

        Ok(())
    }

    /// Model parameters as validated [`Params`].
    pub fn params(&self) -> Result<Params> {
        Params::new(
            self.model.n_pop,
            self.model.sel_coeff,
            self.model.mu_a_to_b,
            self.model.mu_b_to_a,
        )
    }
}
