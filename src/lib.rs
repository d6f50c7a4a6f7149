//! classpromo - board-aware class promotion for student records
//!
//! A student moves up one class per calendar year once their board's
//! promotion month has started. The rule table and the date are always
//! supplied by the caller; evaluation never touches global state or the
//! system clock.
//!
//! ```
//! use chrono::NaiveDate;
//! use classpromo::promotion::PromotionEvaluator;
//! use classpromo::rules::PromotionRuleTable;
//! use classpromo::student::StudentRecord;
//!
//! let rules = PromotionRuleTable::builtin();
//! let evaluator = PromotionEvaluator::new(&rules);
//! let mut record = StudentRecord::student("CBSE", "Class 7");
//!
//! let april = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();
//! assert!(evaluator.promote(&mut record, april));
//! assert_eq!(record.class_name.as_deref(), Some("Class 8"));
//! ```

pub mod cli;
pub mod config;
pub mod observability;
pub mod promotion;
pub mod rules;
pub mod student;
