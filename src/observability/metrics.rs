//! Promotion metrics
//!
//! - Counters only
//! - Monotonic increase
//! - Reset only on process start

use std::sync::atomic::{AtomicU64, Ordering};

/// Operational counters for promotion runs.
///
/// All counters use Relaxed atomics, so a single registry can be shared
/// across threads evaluating independent records.
#[derive(Debug, Default)]
pub struct PromotionMetrics {
    /// Records passed to the evaluator
    records_evaluated: AtomicU64,
    /// Records that moved up a class
    students_promoted: AtomicU64,
    /// Records left unchanged
    promotions_skipped: AtomicU64,
    /// Batch runs
    batches_run: AtomicU64,
}

impl PromotionMetrics {
    /// Create a registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one promoting evaluation
    pub fn record_promoted(&self) {
        self.records_evaluated.fetch_add(1, Ordering::Relaxed);
        self.students_promoted.fetch_add(1, Ordering::Relaxed);
    }

    /// Count one non-promoting evaluation
    pub fn record_skipped(&self) {
        self.records_evaluated.fetch_add(1, Ordering::Relaxed);
        self.promotions_skipped.fetch_add(1, Ordering::Relaxed);
    }

    /// Count one batch run
    pub fn increment_batches(&self) {
        self.batches_run.fetch_add(1, Ordering::Relaxed);
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            records_evaluated: self.records_evaluated.load(Ordering::Relaxed),
            students_promoted: self.students_promoted.load(Ordering::Relaxed),
            promotions_skipped: self.promotions_skipped.load(Ordering::Relaxed),
            batches_run: self.batches_run.load(Ordering::Relaxed),
        }
    }

    /// Current values as a JSON object
    pub fn to_json(&self) -> serde_json::Value {
        let s = self.snapshot();
        serde_json::json!({
            "records_evaluated": s.records_evaluated,
            "students_promoted": s.students_promoted,
            "promotions_skipped": s.promotions_skipped,
            "batches_run": s.batches_run,
        })
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub records_evaluated: u64,
    pub students_promoted: u64,
    pub promotions_skipped: u64,
    pub batches_run: u64,
}
