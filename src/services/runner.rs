//! Runner - drives packages through resolve, compute and report
//!
//! A bad package is logged and counted, then processing continues with the
//! next one. Only a failure of the output sink itself aborts the run.

use crate::domain::Package;
use crate::infra::{OutputFormat, RunStats};
use crate::services::{dispatcher, reporter};
use anyhow::Context;
use std::io::Write;
use tracing::{debug, error};

/// Process every package in input order, writing one line per success.
pub fn run<W: Write>(
    packages: &[Package],
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<RunStats> {
    let mut stats = RunStats::new();

    for (index, package) in packages.iter().enumerate() {
        let resolved = dispatcher::resolve(&package.code, &package.readings)
            .and_then(|workout| workout.summary().map(|summary| (workout.code(), summary)));
        let (code, summary) = match resolved {
            Ok(resolved) => resolved,
            Err(e) => {
                error!(index = %index, code = %package.code, error = %e, "workout_rejected");
                stats.record_failure(index, &package.code, e);
                continue;
            }
        };

        let line = reporter::render(&summary, format)
            .with_context(|| format!("Failed to render workout #{}", index))?;
        writeln!(out, "{}", line).context("Failed to write report line")?;

        debug!(
            index = %index,
            code = %code,
            distance_km = %summary.distance,
            calories = %summary.calories,
            "workout_reported"
        );
        stats.record_reported();
    }

    out.flush().context("Failed to flush output")?;
    Ok(stats)
}
