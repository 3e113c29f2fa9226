//! Lightweight in-process metrics.
//!
//! Counters accumulate across configuration passes and are rendered in
//! Prometheus text format by the binary at shutdown.

pub mod metrics;

pub use metrics::{ConfigMetrics, CounterVec};
