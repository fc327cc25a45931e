//! Domain models - workout codes, formulas and errors
//!
//! This module contains the canonical data types used throughout the system:
//! - `Package` - raw sensor readings for one workout
//! - `WorkoutCode` - discipline code carried by a package
//! - `Workout` - validated per-discipline model with its formulas
//! - `WorkoutSummary` - computed figures handed to the reporter
//! - `WorkoutError` - input errors scoped to a single package

pub mod error;
pub mod types;
pub mod workout;

pub use error::{WorkoutError, WorkoutResult};
pub use types::{Package, WorkoutCode};
pub use workout::{Session, Workout, WorkoutSummary};
