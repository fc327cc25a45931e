//! Workout tracker - distance, speed and calorie report for sensor packages
//!
//! Module structure:
//! - `domain/` - Workout codes, per-discipline formulas, errors
//! - `services/` - Dispatcher, Reporter, processing loop
//! - `infra/` - Config, run statistics

use anyhow::bail;
use clap::Parser;
use std::io;
use tracing::info;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;
use workout_tracker::infra::{Config, OutputFormat};
use workout_tracker::services;

/// Workout tracker - reports distance, speed and calories per workout
#[derive(Parser, Debug)]
#[command(
    name = "workout-tracker",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about
)]
struct Args {
    /// Path to TOML file with sensor packages (built-in packages if omitted)
    #[arg(short, long)]
    config: Option<String>,

    /// Output format, overrides the config file
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only report lines
    // Default: INFO, use RUST_LOG=debug for per-workout events
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(UtcTime::rfc_3339())
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(format) = args.format {
        config = config.with_output_format(format);
    }

    info!(
        config_file = %config.config_file(),
        packages = %config.packages().len(),
        format = ?config.output_format(),
        "config_loaded"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stats = services::run(config.packages(), config.output_format(), &mut out)?;
    stats.log();

    if !stats.is_success() {
        bail!("{} of {} workouts failed", stats.failed(), stats.processed());
    }
    Ok(())
}
