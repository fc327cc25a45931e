//! Infrastructure - configuration and run statistics
//!
//! - `config` - Application configuration (TOML loading, defaults)
//! - `metrics` - Per-run counters and the run summary event

pub mod config;
pub mod metrics;

// Re-export commonly used types
pub use config::{Config, OutputFormat};
pub use metrics::{EntryFailure, RunStats};
