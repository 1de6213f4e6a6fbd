//! Metrics collection and reporting

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use vibecheck_core::{MetricsObserver, MetricsRecord, Result};

/// Register descriptions for the metrics published by [`MetricsCollector`]
pub fn describe_metrics() {
    ::metrics::describe_counter!(
        "vibecheck_runs_total",
        "Total number of pipeline runs by outcome"
    );
    ::metrics::describe_counter!(
        "vibecheck_category_total",
        "Total number of matched runs by category"
    );
    ::metrics::describe_histogram!(
        "vibecheck_confidence",
        "Confidence of matched runs (0-100)"
    );
}

/// Metrics collector for pipeline runs
#[derive(Clone)]
pub struct MetricsCollector {
    inner: Arc<MetricsInner>,
}

struct MetricsInner {
    total_runs: AtomicU64,
    matched_runs: AtomicU64,
    unmatched_runs: AtomicU64,
    confidence_sum: AtomicU64,
    categories: RwLock<HashMap<String, u64>>,
}

impl MetricsCollector {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MetricsInner {
                total_runs: AtomicU64::new(0),
                matched_runs: AtomicU64::new(0),
                unmatched_runs: AtomicU64::new(0),
                confidence_sum: AtomicU64::new(0),
                categories: RwLock::new(HashMap::new()),
            }),
        }
    }

    /// Record one pipeline run
    pub fn record(&self, record: &MetricsRecord) {
        self.inner.total_runs.fetch_add(1, Ordering::Relaxed);

        if !record.matched {
            self.inner.unmatched_runs.fetch_add(1, Ordering::Relaxed);
            ::metrics::counter!("vibecheck_runs_total", "outcome" => "unmatched").increment(1);
            return;
        }

        self.inner.matched_runs.fetch_add(1, Ordering::Relaxed);
        ::metrics::counter!("vibecheck_runs_total", "outcome" => "matched").increment(1);

        if let Some(confidence) = record.confidence {
            self.inner
                .confidence_sum
                .fetch_add(u64::from(confidence), Ordering::Relaxed);
            ::metrics::histogram!("vibecheck_confidence").record(f64::from(confidence));
        }

        if let Some(category) = &record.category {
            *self
                .inner
                .categories
                .write()
                .entry(category.clone())
                .or_insert(0) += 1;
            ::metrics::counter!("vibecheck_category_total", "category" => category.clone())
                .increment(1);
        }
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        let mut categories: Vec<(String, u64)> = self
            .inner
            .categories
            .read()
            .iter()
            .map(|(category, count)| (category.clone(), *count))
            .collect();
        categories.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        MetricsSnapshot {
            total_runs: self.inner.total_runs.load(Ordering::Relaxed),
            matched_runs: self.inner.matched_runs.load(Ordering::Relaxed),
            unmatched_runs: self.inner.unmatched_runs.load(Ordering::Relaxed),
            confidence_sum: self.inner.confidence_sum.load(Ordering::Relaxed),
            categories,
        }
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsObserver for MetricsCollector {
    fn observe(&self, record: &MetricsRecord) -> Result<()> {
        self.record(record);
        Ok(())
    }
}

/// Snapshot of current metrics
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSnapshot {
    pub total_runs: u64,
    pub matched_runs: u64,
    pub unmatched_runs: u64,
    pub confidence_sum: u64,
    /// Matched runs per category, most frequent first
    pub categories: Vec<(String, u64)>,
}

impl MetricsSnapshot {
    /// Fraction of runs that matched a pattern entry
    pub fn match_rate(&self) -> f64 {
        if self.total_runs == 0 {
            0.0
        } else {
            self.matched_runs as f64 / self.total_runs as f64
        }
    }

    /// Average confidence over matched runs
    pub fn avg_confidence(&self) -> f64 {
        if self.matched_runs == 0 {
            0.0
        } else {
            self.confidence_sum as f64 / self.matched_runs as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vibecheck_core::{PipelineResult, SentimentResult};

    fn matched(category: &str, confidence: u8) -> MetricsRecord {
        MetricsRecord::matched(&PipelineResult {
            ok: true,
            matched: true,
            input: "input".to_string(),
            category: category.to_string(),
            response: "response".to_string(),
            confidence,
            engine_score: 1.5,
            sentiment: SentimentResult::default(),
        })
    }

    #[test]
    fn test_metrics_collection() {
        let metrics = MetricsCollector::new();

        metrics.record(&matched("hype", 60));
        metrics.record(&matched("hype", 80));
        metrics.record(&matched("sad", 70));
        metrics.record(&MetricsRecord::unmatched("sup"));

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.total_runs, 4);
        assert_eq!(snapshot.matched_runs, 3);
        assert_eq!(snapshot.unmatched_runs, 1);
        assert_eq!(snapshot.match_rate(), 0.75);
        assert_eq!(snapshot.avg_confidence(), 70.0);
        assert_eq!(
            snapshot.categories,
            vec![("hype".to_string(), 2), ("sad".to_string(), 1)]
        );
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = MetricsCollector::default().snapshot();
        assert_eq!(snapshot.match_rate(), 0.0);
        assert_eq!(snapshot.avg_confidence(), 0.0);
        assert!(snapshot.categories.is_empty());
    }

    #[test]
    fn test_clones_share_counters() {
        let metrics = MetricsCollector::new();
        let observer = metrics.clone();

        observer.observe(&MetricsRecord::unmatched("sup")).unwrap();
        assert_eq!(metrics.snapshot().total_runs, 1);
    }
}
