//! VibeCheck Telemetry
//!
//! Metrics observers for the vibe pipeline.
//!
//! Provides:
//! - Aggregate run counters, also published through the `metrics` facade
//! - A bounded log of recent metrics records
//! - Fan-out to several observers at once

pub mod fanout;
pub mod metrics;
pub mod record_log;

pub use crate::fanout::FanoutObserver;
pub use crate::metrics::{describe_metrics, MetricsCollector, MetricsSnapshot};
pub use crate::record_log::RecordLog;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::fanout::FanoutObserver;
    pub use crate::metrics::MetricsCollector;
    pub use crate::record_log::RecordLog;
}
