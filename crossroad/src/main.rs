//! # Crossroad Runtime
//!
//! Entry point for the headless training-scenario driver.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use crossroad::app::{self, PolicyChoice, RunEnd, RunOptions, Variant};
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum VariantArg {
    Road,
    Footpath,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum PolicyArg {
    Random,
    Keys,
}

#[derive(Parser, Debug)]
#[command(name = "crossroad", version, about = "Drive the road-crossing scenario headlessly")]
struct Cli {
    /// JSON scene file. Defaults to the built-in scene of the variant.
    #[arg(long)]
    scene: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = VariantArg::Road)]
    variant: VariantArg,
    #[arg(long, value_enum, default_value_t = PolicyArg::Random)]
    policy: PolicyArg,
    /// Key script for `--policy keys`, e.g. `up,up,right+up,-`.
    #[arg(long, default_value = "up")]
    keys: String,
    /// Seed for `--policy random`.
    #[arg(long)]
    seed: Option<u64>,
    /// Simulation tick in seconds.
    #[arg(long, default_value_t = 0.02)]
    dt: f32,
    /// Ticks between policy decisions.
    #[arg(long, default_value_t = 5)]
    decision_period: u32,
    #[arg(long, default_value_t = 100_000)]
    max_ticks: u64,
    /// Episode cap override. Rejected for self-resetting scenes.
    #[arg(long)]
    episodes: Option<u32>,
    /// Per-episode decision step limit.
    #[arg(long)]
    max_steps: Option<u32>,
}

impl From<Cli> for RunOptions {
    fn from(cli: Cli) -> Self {
        Self {
            scene: cli.scene,
            variant: match cli.variant {
                VariantArg::Road => Variant::Road,
                VariantArg::Footpath => Variant::Footpath,
            },
            policy: match cli.policy {
                PolicyArg::Random => PolicyChoice::Random { seed: cli.seed },
                PolicyArg::Keys => PolicyChoice::Keys(cli.keys),
            },
            dt: cli.dt,
            decision_period: cli.decision_period,
            max_ticks: cli.max_ticks,
            episodes: cli.episodes,
            max_steps: cli.max_steps,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let opts = RunOptions::from(Cli::parse());
    match app::run(&opts)? {
        RunEnd::CapReached(_) => {
            // Final tallies were logged synchronously when the cap was hit.
            std::process::exit(0);
        }
        RunEnd::TickLimit(_) => Ok(()),
    }
}
