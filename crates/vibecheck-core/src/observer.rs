//! Metrics observer contract
//!
//! The pipeline hands one [`MetricsRecord`] to its observer per run. An
//! observer reports failure through `Err`; the pipeline logs and discards it,
//! so an observer can never change the returned result.

use crate::{MetricsRecord, Result};

/// Receives a metrics record after every pipeline run
///
/// Implementations must not panic. Failures are reported as `Err`; a panic
/// propagates out of the pipeline run (and aborts under the release profile).
pub trait MetricsObserver: Send + Sync {
    /// Observe a single record
    fn observe(&self, record: &MetricsRecord) -> Result<()>;
}

/// Observer that discards every record
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl MetricsObserver for NoopObserver {
    fn observe(&self, _record: &MetricsRecord) -> Result<()> {
        Ok(())
    }
}

impl<F> MetricsObserver for F
where
    F: Fn(&MetricsRecord) -> Result<()> + Send + Sync,
{
    fn observe(&self, record: &MetricsRecord) -> Result<()> {
        self(record)
    }
}
