//! Forwarding one record to several observers

use std::sync::Arc;
use tracing::debug;
use vibecheck_core::{MetricsObserver, MetricsRecord, Result};

/// Observer that forwards every record to each child in order
#[derive(Clone, Default)]
pub struct FanoutObserver {
    observers: Vec<Arc<dyn MetricsObserver>>,
}

impl FanoutObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a child observer
    pub fn with(mut self, observer: Arc<dyn MetricsObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl MetricsObserver for FanoutObserver {
    /// Every child sees the record; the first failure is returned
    fn observe(&self, record: &MetricsRecord) -> Result<()> {
        let mut first_error = None;

        for (index, observer) in self.observers.iter().enumerate() {
            if let Err(e) = observer.observe(record) {
                debug!(index, error = %e, "Fan-out child observer failed");
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MetricsCollector, RecordLog};
    use vibecheck_core::Error;

    #[test]
    fn test_every_child_sees_record_despite_failure() {
        let collector = MetricsCollector::new();
        let log = Arc::new(RecordLog::new());

        let fanout = FanoutObserver::new()
            .with(Arc::new(|_: &MetricsRecord| -> Result<()> {
                Err(Error::observer("first child down"))
            }))
            .with(Arc::new(collector.clone()))
            .with(log.clone());

        let result = fanout.observe(&MetricsRecord::unmatched("sup"));

        assert!(matches!(result, Err(Error::Observer(_))));
        assert_eq!(collector.snapshot().total_runs, 1);
        assert_eq!(log.len(), 1);
        assert_eq!(fanout.len(), 3);
    }

    #[test]
    fn test_empty_fanout_is_ok() {
        assert!(FanoutObserver::new()
            .observe(&MetricsRecord::unmatched("sup"))
            .is_ok());
    }
}
