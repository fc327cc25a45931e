//! Reporter - renders workout summaries as output lines

use crate::domain::WorkoutSummary;
use crate::infra::OutputFormat;

/// Render the fixed human-readable message for one workout.
///
/// Figures use `{:.3}`, which rounds the exact binary value half-to-even
/// and never depends on locale.
pub fn format_summary(summary: &WorkoutSummary) -> String {
    format!(
        "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories: {:.3}.",
        summary.training_type, summary.duration, summary.distance, summary.speed, summary.calories
    )
}

/// Render one summary as a single JSON object (JSONL record)
pub fn format_json(summary: &WorkoutSummary) -> serde_json::Result<String> {
    serde_json::to_string(summary)
}

/// Render a summary in the requested output format
pub fn render(summary: &WorkoutSummary, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(format_summary(summary)),
        OutputFormat::Json => format_json(summary),
    }
}
