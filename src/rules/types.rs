//! Rule table types
//!
//! A rule table maps a normalized board key to the calendar month in which
//! that board's students move up a class. Tables are immutable once built.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::errors::{RuleError, RuleResult};

/// Normalizes a board identifier for lookup: trimmed and uppercased.
pub fn normalize_board(board: &str) -> String {
    board.trim().to_uppercase()
}

/// Wire form of a rule. The month stays signed so that out-of-range values
/// are reported as `InvalidMonth` rather than as a parse failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct RawRule {
    pub(crate) promote_month: i64,
}

/// Promotion rule for one board.
///
/// The month is always within 1..=12; every constructor, including
/// deserialization, checks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawRule")]
pub struct PromotionRule {
    promote_month: u32,
}

impl PromotionRule {
    /// Creates a rule, rejecting months outside 1..=12.
    pub fn new(board: &str, promote_month: u32) -> RuleResult<Self> {
        Self::checked(board, i64::from(promote_month))
    }

    /// Calendar month (1-12) from which promotion applies
    pub fn promote_month(&self) -> u32 {
        self.promote_month
    }

    fn checked(board: &str, month: i64) -> RuleResult<Self> {
        u32::try_from(month)
            .ok()
            .filter(|m| (1..=12).contains(m))
            .map(|promote_month| Self { promote_month })
            .ok_or_else(|| RuleError::InvalidMonth {
                board: board.to_string(),
                month,
            })
    }
}

impl TryFrom<RawRule> for PromotionRule {
    type Error = RuleError;

    fn try_from(raw: RawRule) -> RuleResult<Self> {
        Self::checked("<rule>", raw.promote_month)
    }
}

/// Board-keyed promotion rules.
///
/// Keys are stored normalized; `get` normalizes its argument the same way,
/// so "cbse", " CBSE " and "CBSE" resolve to one rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PromotionRuleTable {
    rules: BTreeMap<String, PromotionRule>,
}

impl PromotionRuleTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in board calendar: WB promotes from January, every other
    /// known board from April.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (board, month) in [("CBSE", 4), ("ICSE", 4), ("WB", 1), ("STATE", 4)] {
            table.rules.insert(board.to_string(), PromotionRule { promote_month: month });
        }
        table
    }

    /// Builds a table from raw `(board, month)` pairs.
    ///
    /// Fails on empty keys, out-of-range months, or two keys that collide
    /// after normalization.
    pub fn from_entries<I, S>(entries: I) -> RuleResult<Self>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for (board, month) in entries {
            let key = normalize_board(board.as_ref());
            if key.is_empty() {
                return Err(RuleError::EmptyBoard);
            }
            let rule = PromotionRule::checked(&key, month)?;
            if table.rules.contains_key(&key) {
                return Err(RuleError::DuplicateBoard(key));
            }
            table.rules.insert(key, rule);
        }
        Ok(table)
    }

    /// Adds or replaces the rule for a board.
    pub fn insert(&mut self, board: &str, rule: PromotionRule) -> RuleResult<()> {
        let key = normalize_board(board);
        if key.is_empty() {
            return Err(RuleError::EmptyBoard);
        }
        self.rules.insert(key, rule);
        Ok(())
    }

    /// Looks up the rule for a board, case- and whitespace-insensitively.
    pub fn get(&self, board: &str) -> Option<&PromotionRule> {
        self.rules.get(&normalize_board(board))
    }

    /// Number of boards in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True if the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates rules in board order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PromotionRule)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v))
    }
}
