//! Batch execution of independent runs and trajectory aggregation.

use crate::engine::Engine;
use crate::model::{Outcome, Params};
use crate::random::RandomSource;
use crate::stats::{Accumulator, AccumulatorReport};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::utils::check_num;

/// Aggregated result of one batch of independent runs.
///
/// Immutable once constructed.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchResult {
    /// One allele-count history per run, all padded to the same length
    /// (`max_generation_count + 1`) by repeating the final value.
    pub trajectories: Vec<Vec<u64>>,

    /// Final status of each run, in run order.
    pub outcomes: Vec<Outcome>,

    /// Fraction of runs absorbed at N. Runs that did not converge count
    /// toward the denominator but never toward the numerator.
    pub fixation_probability: f64,

    /// Longest unpadded run length observed, in generations.
    pub max_generation_count: usize,

    /// Generations to absorption, summarized over the runs that absorbed.
    pub absorption_time: AccumulatorReport,
}

impl BatchResult {
    /// Number of runs that hit the generation bound before absorbing.
    pub fn n_unconverged(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|&&out| out == Outcome::DidNotConverge)
            .count()
    }
}

/// Run `n_runs` independent trajectories to absorption and aggregate them.
///
/// Each run owns a fresh [`Engine`] with its own random stream; per-run
/// seeds are drawn from a master stream, so passing `seed: Some` makes the
/// whole batch reproducible. A run that has not absorbed after `max_gens`
/// generations is recorded as [`Outcome::DidNotConverge`] rather than
/// looping forever (two-way mutation can reintroduce the minority allele
/// indefinitely).
///
/// # Errors
/// Returns an error if `n_runs` or `max_gens` is zero, if the parameters or
/// initial frequency are invalid, or if a step fails (see [`Engine::step`]).
pub fn run_batch(
    params: Params,
    init_freq_a: f64,
    n_runs: usize,
    max_gens: usize,
    seed: Option<u64>,
) -> Result<BatchResult> {
    check_num(n_runs, 1..).context("invalid number of runs")?;
    check_num(max_gens, 1..).context("invalid generation bound")?;

    let mut seed_source = match seed {
        Some(seed) => RandomSource::from_seed(seed),
        None => RandomSource::from_os_rng()?,
    };

    let mut trajectories = Vec::with_capacity(n_runs);
    let mut outcomes = Vec::with_capacity(n_runs);
    let mut absorption_acc = Accumulator::new();
    let mut n_fixed = 0;
    let mut max_generation_count = 0;

    for i_run in 0..n_runs {
        let rng = RandomSource::from_seed(seed_source.next_seed());
        let mut engine = Engine::new(params, init_freq_a, rng)
            .with_context(|| format!("failed to construct engine for run {i_run}"))?;

        while !engine.is_fixed() && !engine.is_lost() && engine.generation() < max_gens {
            engine
                .step()
                .with_context(|| format!("failed to perform step in run {i_run}"))?;
        }

        let outcome = if engine.is_fixed() {
            Outcome::Fixed
        } else if engine.is_lost() {
            Outcome::Lost
        } else {
            Outcome::DidNotConverge
        };

        if outcome == Outcome::Fixed {
            n_fixed += 1;
        }
        if outcome != Outcome::DidNotConverge {
            absorption_acc.add(engine.generation() as f64);
        }
        max_generation_count = max_generation_count.max(engine.generation());

        log::debug!("run {i_run}: {outcome:?} after {} generations", engine.generation());

        trajectories.push(engine.history().to_vec());
        outcomes.push(outcome);
    }

    // Freeze shorter trajectories at their final value so all runs are
    // comparable generation by generation.
    let padded_len = max_generation_count + 1;
    for trajectory in &mut trajectories {
        let last = *trajectory.last().context("trajectory is empty")?;
        trajectory.resize(padded_len, last);
    }

    Ok(BatchResult {
        trajectories,
        outcomes,
        fixation_probability: n_fixed as f64 / n_runs as f64,
        max_generation_count,
        absorption_time: absorption_acc.report(),
    })
}
