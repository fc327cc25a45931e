//! Dispatcher - turns a raw package into the matching workout model

use crate::domain::{Session, Workout, WorkoutCode, WorkoutError, WorkoutResult};
use tracing::debug;

/// Resolve a workout code and its flat readings into a validated `Workout`.
///
/// Readings are `[action, duration_h, weight_kg, extra...]` where extra is
/// `[height]` for walking and `[pool_length_m, pool_count]` for swimming.
pub fn resolve(code: &str, readings: &[f64]) -> WorkoutResult<Workout> {
    let code: WorkoutCode = code.parse()?;

    let expected = code.reading_count();
    if readings.len() != expected {
        return Err(WorkoutError::InvalidReadingCount {
            code,
            expected,
            actual: readings.len(),
        });
    }

    let session = Session::new(readings[0], readings[1], readings[2])?;
    let workout = match code {
        WorkoutCode::Running => Workout::running(session),
        WorkoutCode::SportsWalking => Workout::sports_walking(session, readings[3])?,
        WorkoutCode::Swimming => Workout::swimming(session, readings[3], readings[4])?,
    };

    debug!(code = %code, readings = ?readings, "workout_resolved");
    Ok(workout)
}
