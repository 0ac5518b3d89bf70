use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use driftsim::batch::run_batch;
use driftsim::config::{BatchConfig, Config, InitConfig, ModelConfig};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    /// TOML configuration file.
    #[arg(long, conflicts_with = "preset")]
    config: Option<PathBuf>,

    /// Named experiment preset.
    #[arg(long, value_enum)]
    preset: Option<Preset>,

    /// Master seed for a reproducible batch (OS entropy if omitted).
    #[arg(long)]
    seed: Option<u64>,
}

/// Named experiments, each a plain parameter tuple the core treats as
/// opaque [`driftsim::model::Params`].
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Preset {
    /// N=100, init=0.3, s=0.05; strong positive selection.
    Alpha5,
    /// N=100, single copy, s=1e-4; fixation probability near 1/N.
    NearlyNeutral,
    /// N=1000, single copy, s=1e-3; fixation probability near 2s.
    Beneficial,
    /// N=100, single copy, s=-1e-3; fixation probability near 1/N.
    Deleterious,
}

impl Preset {
    fn config(self) -> Config {
        let (n_pop, freq_a, sel_coeff) = match self {
            Self::Alpha5 => (100, 0.3, 0.05),
            Self::NearlyNeutral => (100, 0.01, 0.0001),
            Self::Beneficial => (1000, 0.001, 0.001),
            Self::Deleterious => (100, 0.01, -0.001),
        };
        Config {
            model: ModelConfig {
                n_pop,
                sel_coeff,
                mu_a_to_b: 0.0,
                mu_b_to_a: 0.0,
            },
            init: InitConfig { freq_a },
            batch: BatchConfig {
                n_runs: 1000,
                max_gens: 100_000,
            },
        }
    }
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    let cfg = match (&args.config, args.preset) {
        (Some(file), None) => Config::from_file(file).context("failed to construct cfg")?,
        (None, Some(preset)) => preset.config(),
        _ => bail!("exactly one of --config and --preset must be given"),
    };
    log::info!("{cfg:#?}");

    let params = cfg.params().context("failed to construct params")?;
    let result = run_batch(
        params,
        cfg.init.freq_a,
        cfg.batch.n_runs,
        cfg.batch.max_gens,
        args.seed,
    )
    .context("failed to run batch")?;

    log::info!("fixation probability: {}", result.fixation_probability);
    log::info!("max generation count: {}", result.max_generation_count);
    let absorption = result.absorption_time;
    log::info!(
        "absorption time: mean {:.2}, std dev {:.2} ({} runs absorbed)",
        absorption.mean,
        absorption.std_dev,
        absorption.n_vals
    );
    let n_unconverged = result.n_unconverged();
    if n_unconverged > 0 {
        log::warn!("{n_unconverged} runs did not converge within {} generations", cfg.batch.max_gens);
    }

    Ok(())
}
