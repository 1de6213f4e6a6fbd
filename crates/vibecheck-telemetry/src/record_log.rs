//! Bounded in-memory log of recent metrics records

use parking_lot::RwLock;
use std::collections::VecDeque;
use vibecheck_core::{MetricsObserver, MetricsRecord, Result};

const DEFAULT_CAPACITY: usize = 10_000;

/// Keeps the most recent records, dropping the oldest when full
pub struct RecordLog {
    records: RwLock<VecDeque<MetricsRecord>>,
    capacity: usize,
}

impl RecordLog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Log holding at most `capacity` records (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: RwLock::new(VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY))),
            capacity,
        }
    }

    pub fn push(&self, record: MetricsRecord) {
        let mut records = self.records.write();
        if records.len() == self.capacity {
            records.pop_front();
        }
        records.push_back(record);
    }

    /// Up to `n` most recent records, oldest first
    pub fn recent(&self, n: usize) -> Vec<MetricsRecord> {
        let records = self.records.read();
        let skip = records.len().saturating_sub(n);
        records.iter().skip(skip).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    pub fn clear(&self) {
        self.records.write().clear();
    }

    /// Records as newline-delimited JSON, oldest first
    pub fn to_json_lines(&self) -> Result<String> {
        let mut out = String::new();
        for record in self.records.read().iter() {
            out.push_str(&serde_json::to_string(record)?);
            out.push('\n');
        }
        Ok(out)
    }
}

impl Default for RecordLog {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsObserver for RecordLog {
    fn observe(&self, record: &MetricsRecord) -> Result<()> {
        self.push(record.clone());
        Ok(())
    }
}
