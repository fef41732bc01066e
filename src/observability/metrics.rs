//! Session metrics tracking.
//!
//! Counts what happened during one interpreter session so that a summary
//! can be logged when the session ends.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for a single interpreter session.
#[derive(Debug, Default)]
pub struct MetricsTracker {
    commands_total: AtomicU64,
    command_errors_total: AtomicU64,
    contacts_added_total: AtomicU64,
    contacts_deleted_total: AtomicU64,
}

impl MetricsTracker {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Track one executed command.
    pub fn track_command(&self, verb: &str, success: bool) {
        self.commands_total.fetch_add(1, Ordering::Relaxed);

        if !success {
            self.command_errors_total.fetch_add(1, Ordering::Relaxed);
        }

        tracing::debug!(verb = %verb, success = success, "Command completed");
    }

    /// Track a contact stored by `add`.
    pub fn track_contact_added(&self) {
        self.contacts_added_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Track a contact removed by `delete`.
    pub fn track_contact_deleted(&self) {
        self.contacts_deleted_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Snapshot of all counters.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            commands_total: self.commands_total.load(Ordering::Relaxed),
            command_errors_total: self.command_errors_total.load(Ordering::Relaxed),
            contacts_added_total: self.contacts_added_total.load(Ordering::Relaxed),
            contacts_deleted_total: self.contacts_deleted_total.load(Ordering::Relaxed),
        }
    }

    /// Log the summary at info level.
    pub fn log_summary(&self) {
        let summary = self.summary();
        tracing::info!(
            commands = summary.commands_total,
            errors = summary.command_errors_total,
            contacts_added = summary.contacts_added_total,
            contacts_deleted = summary.contacts_deleted_total,
            error_rate = summary.error_rate(),
            "Session metrics"
        );
    }
}

/// Point-in-time copy of the session counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSummary {
    pub commands_total: u64,
    pub command_errors_total: u64,
    pub contacts_added_total: u64,
    pub contacts_deleted_total: u64,
}

impl MetricsSummary {
    /// Fraction of commands that failed, 0.0 when nothing ran.
    pub fn error_rate(&self) -> f64 {
        if self.commands_total == 0 {
            0.0
        } else {
            self.command_errors_total as f64 / self.commands_total as f64
        }
    }
}
