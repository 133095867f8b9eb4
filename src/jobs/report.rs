//! Per-run tally of item outcomes

use crate::api::ApiResponse;
use crate::utils::error::MonitorError;
use std::fmt;

/// One item that did not go through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Monitor id or name
    pub label: String,
    pub reason: String,
}

/// Outcome counts of one bulk job
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub job: String,
    pub succeeded: usize,
    pub skipped: usize,
    /// Items shown but not sent because of dry-run
    pub planned: usize,
    pub failures: Vec<Failure>,
}

impl BatchReport {
    pub fn new(job: impl Into<String>) -> Self {
        Self {
            job: job.into(),
            ..Default::default()
        }
    }

    /// Record a response; any non-success status counts as a failure
    pub fn record_response(&mut self, label: &str, response: &ApiResponse) {
        if response.is_success() {
            self.succeeded += 1;
        } else {
            self.failures.push(Failure {
                label: label.to_string(),
                reason: format!("HTTP {}", response.status),
            });
        }
    }

    pub fn record_error(&mut self, label: &str, error: &MonitorError) {
        self.failures.push(Failure {
            label: label.to_string(),
            reason: error.to_string(),
        });
    }

    pub fn record_skip(&mut self) {
        self.skipped += 1;
    }

    pub fn record_planned(&mut self) {
        self.planned += 1;
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.skipped + self.planned + self.failed()
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} items, {} succeeded, {} failed, {} skipped",
            self.job,
            self.total(),
            self.succeeded,
            self.failed(),
            self.skipped
        )?;
        if self.planned > 0 {
            write!(f, ", {} planned (dry run)", self.planned)?;
        }
        Ok(())
    }
}
