//! Skip reasons
//!
//! Every non-promoting evaluation names the first precondition that failed.
//! Reasons are diagnostics for logs and reports; they are never errors.

use std::fmt;

use serde::Serialize;

/// Why an evaluation left the record unchanged.
///
/// Variants are listed in the order the evaluator checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkipReason {
    /// Role is not "student"
    NotStudent,
    /// Neither `className` nor `class` is set
    MissingClassName,
    /// No board on the record
    MissingBoard,
    /// Board has no rule in the table
    UnknownBoard,
    /// `lastPromotedYear` equals the current year
    AlreadyPromotedThisYear,
    /// Current month is before the board's promotion month
    BeforePromotionMonth,
    /// Class name contains no digits
    NoClassNumber,
    /// Class digits do not form a usable integer
    InvalidClassNumber,
    /// Student is already in the final class
    FinalClass,
}

impl SkipReason {
    /// All reasons, in check order.
    pub const ALL: [SkipReason; 9] = [
        SkipReason::NotStudent,
        SkipReason::MissingClassName,
        SkipReason::MissingBoard,
        SkipReason::UnknownBoard,
        SkipReason::AlreadyPromotedThisYear,
        SkipReason::BeforePromotionMonth,
        SkipReason::NoClassNumber,
        SkipReason::InvalidClassNumber,
        SkipReason::FinalClass,
    ];

    /// Stable code used in logs and CLI output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStudent => "NOT_STUDENT",
            Self::MissingClassName => "MISSING_CLASS_NAME",
            Self::MissingBoard => "MISSING_BOARD",
            Self::UnknownBoard => "UNKNOWN_BOARD",
            Self::AlreadyPromotedThisYear => "ALREADY_PROMOTED_THIS_YEAR",
            Self::BeforePromotionMonth => "BEFORE_PROMOTION_MONTH",
            Self::NoClassNumber => "NO_CLASS_NUMBER",
            Self::InvalidClassNumber => "INVALID_CLASS_NUMBER",
            Self::FinalClass => "FINAL_CLASS",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::NotStudent => "record is not a student",
            Self::MissingClassName => "record has no class name",
            Self::MissingBoard => "record has no board",
            Self::UnknownBoard => "board has no promotion rule",
            Self::AlreadyPromotedThisYear => "student was already promoted this year",
            Self::BeforePromotionMonth => "board's promotion month has not started",
            Self::NoClassNumber => "class name contains no class number",
            Self::InvalidClassNumber => "class number is not a valid integer",
            Self::FinalClass => "student is already in the final class",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
