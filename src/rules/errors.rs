//! Rule table error types
//!
//! Error codes:
//! - PROMO_RULES_INVALID_MONTH
//! - PROMO_RULES_EMPTY_BOARD
//! - PROMO_RULES_DUPLICATE_BOARD
//! - PROMO_RULES_IO
//! - PROMO_RULES_PARSE
//!
//! Rule errors only surface while loading a table. Evaluation against a
//! loaded table never fails.

use thiserror::Error;

/// Result type for rule table operations
pub type RuleResult<T> = Result<T, RuleError>;

/// Errors raised while building or loading a promotion rule table
#[derive(Debug, Error)]
pub enum RuleError {
    /// Promotion month outside 1..=12
    #[error("board '{board}' has invalid promoteMonth {month}; expected 1-12")]
    InvalidMonth { board: String, month: i64 },

    /// Board key is empty after trimming
    #[error("board key must not be empty")]
    EmptyBoard,

    /// Two keys normalize to the same board
    #[error("board '{0}' is defined more than once")]
    DuplicateBoard(String),

    /// Rule file could not be read
    #[error("failed to read rule file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Rule file is not a valid rule table
    #[error("invalid rule file '{path}': {message}")]
    Parse { path: String, message: String },
}

impl RuleError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            RuleError::InvalidMonth { .. } => "PROMO_RULES_INVALID_MONTH",
            RuleError::EmptyBoard => "PROMO_RULES_EMPTY_BOARD",
            RuleError::DuplicateBoard(_) => "PROMO_RULES_DUPLICATE_BOARD",
            RuleError::Io { .. } => "PROMO_RULES_IO",
            RuleError::Parse { .. } => "PROMO_RULES_PARSE",
        }
    }
}
