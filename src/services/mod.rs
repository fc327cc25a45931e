//! Services - dispatch, reporting and the processing loop
//!
//! - `dispatcher` - maps a workout code and readings to a `Workout`
//! - `reporter` - renders summaries as text or JSON lines
//! - `runner` - processes a package list with per-entry failure isolation

pub mod dispatcher;
pub mod reporter;
pub mod runner;

// Re-export commonly used functions
pub use dispatcher::resolve;
pub use reporter::{format_summary, render};
pub use runner::run;
