//! Board promotion rules
//!
//! Each board promotes its students once per calendar year, starting from a
//! fixed month. The table is loaded once and passed explicitly to the
//! evaluator; there is no process-wide rule state.

mod errors;
mod loader;
mod types;

pub use errors::{RuleError, RuleResult};
pub use loader::RuleLoader;
pub use types::{normalize_board, PromotionRule, PromotionRuleTable};
