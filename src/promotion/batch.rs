//! Batch promotion
//!
//! Runs the evaluator over a slice of records and tallies the outcomes.
//! Records are independent, so the tallies do not depend on their order.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::evaluator::{PromotionDecision, PromotionEvaluator};
use super::reason::SkipReason;
use crate::student::StudentRecord;

/// Summary of a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    /// Records evaluated
    pub evaluated: usize,
    /// Records promoted
    pub promoted: usize,
    /// Skipped records per reason, in check order
    pub skipped: BTreeMap<SkipReason, usize>,
    /// Positions of promoted records in the input
    pub promoted_indices: Vec<usize>,
    /// Decision for each record, by position
    #[serde(skip)]
    pub decisions: Vec<PromotionDecision>,
}

impl BatchReport {
    /// Number of records skipped for `reason`.
    pub fn skipped_for(&self, reason: SkipReason) -> usize {
        self.skipped.get(&reason).copied().unwrap_or(0)
    }

    /// Total skipped records.
    pub fn total_skipped(&self) -> usize {
        self.skipped.values().sum()
    }

    fn record(&mut self, index: usize, decision: PromotionDecision) {
        self.evaluated += 1;
        match &decision {
            PromotionDecision::Promoted(_) => {
                self.promoted += 1;
                self.promoted_indices.push(index);
            }
            PromotionDecision::Skipped(reason) => {
                *self.skipped.entry(*reason).or_insert(0) += 1;
            }
        }
        self.decisions.push(decision);
    }
}

impl PromotionEvaluator<'_> {
    /// Promotes every eligible record in place and reports what happened.
    pub fn evaluate_batch(&self, records: &mut [StudentRecord], today: NaiveDate) -> BatchReport {
        let mut report = BatchReport::default();

        for (index, record) in records.iter_mut().enumerate() {
            let decision = self.evaluate(record, today);
            if let PromotionDecision::Promoted(patch) = &decision {
                patch.apply(record);
            }
            report.record(index, decision);
        }

        report
    }
}
