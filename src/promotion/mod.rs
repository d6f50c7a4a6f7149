//! Student promotion
//!
//! Moves a student up one class per calendar year, once the board's
//! promotion month has started. Evaluation is:
//! - Deterministic: same record, rules and date give the same decision
//! - Side-effect free: `evaluate` returns a patch and never mutates
//! - Silent on bad data: every unmet precondition is a skip, never an error

mod batch;
mod evaluator;
mod patch;
mod reason;

pub use batch::BatchReport;
pub use evaluator::{PromotionDecision, PromotionEvaluator};
pub use patch::PromotionPatch;
pub use reason::SkipReason;
