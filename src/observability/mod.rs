//! Observability module for monitoring and metrics.
//!
//! Logging goes through `tracing`; this module adds per-session counters.

pub mod metrics;

pub use metrics::{MetricsSummary, MetricsTracker};
