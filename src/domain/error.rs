//! Error taxonomy for workout computation

use crate::domain::types::WorkoutCode;
use thiserror::Error;

/// Errors raised while resolving or computing a single workout.
///
/// Every variant is a caller/input error scoped to one package; the runner
/// reports it and moves on to the next entry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkoutError {
    #[error("unsupported workout type: {0:?}")]
    UnsupportedWorkoutType(String),

    #[error("invalid reading count for {code}: expected {expected}, got {actual}")]
    InvalidReadingCount { code: WorkoutCode, expected: usize, actual: usize },

    #[error("division by zero: {field} must be positive, got {value}")]
    DivisionByZero { field: &'static str, value: f64 },

    #[error("invalid reading: {field} must be finite and non-negative, got {value}")]
    InvalidReading { field: &'static str, value: f64 },

    #[error("readings overflow: {field} is not finite ({value})")]
    NonFiniteResult { field: &'static str, value: f64 },
}

/// Result type alias for workout operations.
pub type WorkoutResult<T> = Result<T, WorkoutError>;
