//! Run statistics collected while processing a package list

use crate::domain::WorkoutError;
use tracing::{info, warn};

/// A package that could not be reported, with its position in the input
#[derive(Debug, Clone, PartialEq)]
pub struct EntryFailure {
    pub index: usize,
    pub code: String,
    pub error: WorkoutError,
}

/// Counters for one pass over the package list
#[derive(Debug, Default, Clone)]
pub struct RunStats {
    processed: usize,
    reported: usize,
    failures: Vec<EntryFailure>,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record_reported(&mut self) {
        self.processed += 1;
        self.reported += 1;
    }

    pub fn record_failure(&mut self, index: usize, code: &str, error: WorkoutError) {
        self.processed += 1;
        self.failures.push(EntryFailure { index, code: code.to_string(), error });
    }

    pub fn processed(&self) -> usize {
        self.processed
    }

    pub fn reported(&self) -> usize {
        self.reported
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn failures(&self) -> &[EntryFailure] {
        &self.failures
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Emit the run summary as a single structured event
    pub fn log(&self) {
        if self.is_success() {
            info!(processed = %self.processed, reported = %self.reported, failed = 0, "run_summary");
        } else {
            warn!(
                processed = %self.processed,
                reported = %self.reported,
                failed = %self.failed(),
                "run_summary"
            );
        }
    }
}
