//! Promotion patch
//!
//! The change a successful evaluation wants to make. Applying it is the
//! caller's decision; persisting the result is the caller's job too.

use serde::Serialize;

use crate::student::StudentRecord;

/// Fields written by a promotion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionPatch {
    /// Normalized board whose rule applied
    pub board: String,
    /// Class name before promotion, as stored
    pub from_class: String,
    /// Class name after promotion ("Class N")
    pub to_class: String,
    /// Numeric class after promotion
    pub class_number: u32,
    /// Year recorded in `lastPromotedYear`
    pub year: i32,
}

impl PromotionPatch {
    /// Writes `className`, `class` and `lastPromotedYear` on the record.
    pub fn apply(&self, record: &mut StudentRecord) {
        record.set_class(&self.to_class);
        record.last_promoted_year = Some(self.year);
    }
}
