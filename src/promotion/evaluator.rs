//! Promotion evaluation
//!
//! Decides whether a student record moves up one class. Checks run in a
//! fixed order and the first failing check ends evaluation:
//!
//! 1. role is "student"
//! 2. `className` (or legacy `class`) is set
//! 3. board is set
//! 4. board has a rule
//! 5. not already promoted this calendar year
//! 6. current month is at or past the board's promotion month
//! 7. class name contains a number
//! 8. that number is a valid integer below the final class
//!
//! Evaluation is deterministic and side-effect free. The date is always
//! supplied by the caller.

use chrono::{Datelike, NaiveDate};

use super::patch::PromotionPatch;
use super::reason::SkipReason;
use crate::rules::{normalize_board, PromotionRuleTable};
use crate::student::{extract_class_number, format_class_name, StudentRecord, FINAL_CLASS};

/// Outcome of evaluating one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromotionDecision {
    /// Record should move up; apply the patch to do so.
    Promoted(PromotionPatch),

    /// Record stays as it is.
    Skipped(SkipReason),
}

impl PromotionDecision {
    /// Check if the record is promoted.
    pub fn is_promoted(&self) -> bool {
        matches!(self, Self::Promoted(_))
    }

    /// Get the patch if promoted.
    pub fn patch(&self) -> Option<&PromotionPatch> {
        match self {
            Self::Promoted(patch) => Some(patch),
            Self::Skipped(_) => None,
        }
    }

    /// Get the skip reason if skipped.
    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            Self::Skipped(reason) => Some(*reason),
            Self::Promoted(_) => None,
        }
    }

    /// One-line explanation of the decision.
    pub fn explain(&self) -> String {
        match self {
            Self::Promoted(patch) => format!(
                "promoted from '{}' to '{}' under {} rules for {}",
                patch.from_class, patch.to_class, patch.board, patch.year
            ),
            Self::Skipped(reason) => {
                format!("not promoted: {} ({})", reason.description(), reason.as_str())
            }
        }
    }
}

/// Evaluates student records against an injected rule table.
#[derive(Debug, Clone, Copy)]
pub struct PromotionEvaluator<'a> {
    rules: &'a PromotionRuleTable,
}

impl<'a> PromotionEvaluator<'a> {
    /// Creates an evaluator over the given rules.
    pub fn new(rules: &'a PromotionRuleTable) -> Self {
        Self { rules }
    }

    /// The rule table in use.
    pub fn rules(&self) -> &'a PromotionRuleTable {
        self.rules
    }

    /// Evaluates a record without modifying it.
    pub fn evaluate(&self, record: &StudentRecord, today: NaiveDate) -> PromotionDecision {
        match self.check(record, today) {
            Ok(patch) => PromotionDecision::Promoted(patch),
            Err(reason) => PromotionDecision::Skipped(reason),
        }
    }

    /// Evaluates a record and applies the promotion in place.
    ///
    /// Returns true if the record was promoted. A false return leaves the
    /// record untouched.
    pub fn promote(&self, record: &mut StudentRecord, today: NaiveDate) -> bool {
        match self.check(record, today) {
            Ok(patch) => {
                patch.apply(record);
                true
            }
            Err(_) => false,
        }
    }

    fn check(&self, record: &StudentRecord, today: NaiveDate) -> Result<PromotionPatch, SkipReason> {
        if !record.is_student() {
            return Err(SkipReason::NotStudent);
        }

        let class_name = record
            .effective_class_name()
            .ok_or(SkipReason::MissingClassName)?;
        let board = record.board().ok_or(SkipReason::MissingBoard)?;
        let rule = self.rules.get(board).ok_or(SkipReason::UnknownBoard)?;

        let year = today.year();
        if record.last_promoted_year == Some(year) {
            return Err(SkipReason::AlreadyPromotedThisYear);
        }
        if today.month() < rule.promote_month() {
            return Err(SkipReason::BeforePromotionMonth);
        }

        let current = extract_class_number(class_name)
            .ok_or(SkipReason::NoClassNumber)?
            .map_err(|_| SkipReason::InvalidClassNumber)?;
        if current >= FINAL_CLASS {
            return Err(SkipReason::FinalClass);
        }

        // One level per evaluation, even if earlier years were missed
        let next = current + 1;
        Ok(PromotionPatch {
            board: normalize_board(board),
            from_class: class_name.to_string(),
            to_class: format_class_name(next),
            class_number: next,
            year,
        })
    }
}
