//! Promotion Invariant Tests
//!
//! - Non-students are never modified
//! - At most one promotion per calendar year
//! - No promotion before the board's promotion month
//! - Class never advances past 12
//! - `className` and `class` always match after promotion
//! - Board lookup ignores case and surrounding whitespace

use chrono::NaiveDate;
use classpromo::promotion::{PromotionEvaluator, SkipReason};
use classpromo::rules::{PromotionRule, PromotionRuleTable, RuleLoader};
use classpromo::student::StudentRecord;
use serde_json::json;

// =============================================================================
// Helper Functions
// =============================================================================

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn record(value: serde_json::Value) -> StudentRecord {
    serde_json::from_value(value).unwrap()
}

fn every_month(year: i32) -> impl Iterator<Item = NaiveDate> {
    (1..=12).map(move |m| date(year, m, 15))
}

// =============================================================================
// Role Gate
// =============================================================================

/// Non-student records are never promoted and never modified.
#[test]
fn test_non_students_untouched() {
    let rules = PromotionRuleTable::builtin();
    let evaluator = PromotionEvaluator::new(&rules);

    for role in [json!("teacher"), json!("admin"), json!("STUDENT"), json!(null)] {
        let original = record(json!({
            "role": role,
            "board": "CBSE",
            "className": "Class 7",
            "class": "Class 7"
        }));

        for today in every_month(2026) {
            let mut candidate = original.clone();
            assert!(!evaluator.promote(&mut candidate, today));
            assert_eq!(candidate, original);
        }
    }
}

// =============================================================================
// Promotion Effect
// =============================================================================

/// CBSE student in Class 7 is promoted from 1 April onward.
#[test]
fn test_cbse_promotion_on_or_after_april() {
    let rules = PromotionRuleTable::builtin();
    let evaluator = PromotionEvaluator::new(&rules);

    for today in [date(2026, 4, 1), date(2026, 7, 19), date(2026, 12, 31)] {
        let mut student = StudentRecord::student("CBSE", "Class 7");

        assert!(evaluator.promote(&mut student, today));
        assert_eq!(student.class_name.as_deref(), Some("Class 8"));
        assert_eq!(student.legacy_class.as_deref(), Some("Class 8"));
        assert_eq!(student.last_promoted_year, Some(2026));
    }
}

/// Evaluating again within the same year is a no-op.
#[test]
fn test_no_double_promotion_within_year() {
    let rules = PromotionRuleTable::builtin();
    let evaluator = PromotionEvaluator::new(&rules);
    let mut student = StudentRecord::student("CBSE", "Class 7");

    assert!(evaluator.promote(&mut student, date(2026, 4, 1)));
    let after_first = student.clone();

    for today in every_month(2026) {
        assert!(!evaluator.promote(&mut student, today));
        assert_eq!(student, after_first);
    }

    // Next year promotes again
    assert!(evaluator.promote(&mut student, date(2027, 4, 1)));
    assert_eq!(student.class_name.as_deref(), Some("Class 9"));
    assert_eq!(student.last_promoted_year, Some(2027));
}

/// A board with promoteMonth = 4 does not promote in March.
#[test]
fn test_promotion_month_window() {
    let rules = RuleLoader::parse(r#"{ "WB": { "promoteMonth": 4 } }"#).unwrap();
    let evaluator = PromotionEvaluator::new(&rules);
    let student = StudentRecord::student("WB", "Class 5");

    let march = evaluator.evaluate(&student, date(2026, 3, 31));
    assert_eq!(march.skip_reason(), Some(SkipReason::BeforePromotionMonth));

    assert!(evaluator.evaluate(&student, date(2026, 4, 1)).is_promoted());
    assert!(evaluator.evaluate(&student, date(2026, 11, 30)).is_promoted());
}

/// Built-in WB rule promotes from January.
#[test]
fn test_builtin_wb_promotes_in_march() {
    let rules = PromotionRuleTable::builtin();
    let evaluator = PromotionEvaluator::new(&rules);
    let student = StudentRecord::student("WB", "Class 5");

    assert!(evaluator.evaluate(&student, date(2026, 3, 10)).is_promoted());
}

// =============================================================================
// Upper Bound
// =============================================================================

/// Class 12 never promotes, whatever the date.
#[test]
fn test_class_twelve_is_final() {
    let rules = PromotionRuleTable::builtin();
    let evaluator = PromotionEvaluator::new(&rules);

    for year in 2024..=2030 {
        for today in every_month(year) {
            let mut student = StudentRecord::student("CBSE", "Class 12");
            assert!(!evaluator.promote(&mut student, today));
            assert_eq!(student.class_name.as_deref(), Some("Class 12"));
            assert_eq!(student.last_promoted_year, None);
        }
    }
}

/// Repeated yearly promotion stops at 12.
#[test]
fn test_yearly_promotion_stops_at_twelve() {
    let rules = PromotionRuleTable::builtin();
    let evaluator = PromotionEvaluator::new(&rules);
    let mut student = StudentRecord::student("ICSE", "Class 1");

    for year in 2020..2040 {
        evaluator.promote(&mut student, date(year, 6, 1));
    }

    assert_eq!(student.class_name.as_deref(), Some("Class 12"));
    assert_eq!(student.last_promoted_year, Some(2030));
}

// =============================================================================
// Board Normalization
// =============================================================================

/// Lowercase and padded boards match like the canonical key.
#[test]
fn test_board_case_insensitive() {
    let rules = PromotionRuleTable::builtin();
    let evaluator = PromotionEvaluator::new(&rules);
    let today = date(2026, 5, 1);

    let canonical = evaluator.evaluate(&StudentRecord::student("CBSE", "Class 3"), today);
    for board in ["cbse", "Cbse", "  cbse\t"] {
        let decision = evaluator.evaluate(&StudentRecord::student(board, "Class 3"), today);
        assert_eq!(decision, canonical);
    }
}

/// Unknown boards never promote.
#[test]
fn test_unknown_board_never_promotes() {
    let rules = PromotionRuleTable::builtin();
    let evaluator = PromotionEvaluator::new(&rules);

    for today in every_month(2026) {
        let decision = evaluator.evaluate(&StudentRecord::student("IB", "Class 3"), today);
        assert_eq!(decision.skip_reason(), Some(SkipReason::UnknownBoard));
    }
}

/// Rules are injected: the same record promotes under one table and not another.
#[test]
fn test_rules_are_injected() {
    let mut ib_rules = PromotionRuleTable::new();
    ib_rules.insert("IB", PromotionRule::new("IB", 9).unwrap()).unwrap();

    let student = StudentRecord::student("IB", "Class 3");
    let today = date(2026, 9, 1);

    assert!(PromotionEvaluator::new(&ib_rules).evaluate(&student, today).is_promoted());
    assert!(!PromotionEvaluator::new(&PromotionRuleTable::builtin())
        .evaluate(&student, today)
        .is_promoted());
}

// =============================================================================
// Legacy Field
// =============================================================================

/// A record with only the legacy `class` field is promoted and both fields end
/// up synchronized.
#[test]
fn test_legacy_class_field() {
    let rules = PromotionRuleTable::builtin();
    let evaluator = PromotionEvaluator::new(&rules);
    let mut student = record(json!({
        "_id": "65a1",
        "role": "student",
        "board": "STATE",
        "class": "Class 9"
    }));

    assert!(evaluator.promote(&mut student, date(2026, 4, 10)));

    let output = serde_json::to_value(&student).unwrap();
    assert_eq!(output["className"], "Class 10");
    assert_eq!(output["class"], "Class 10");
    assert_eq!(output["lastPromotedYear"], 2026);
    assert_eq!(output["_id"], "65a1");
}

/// `className` wins over a stale legacy `class`.
#[test]
fn test_primary_class_name_wins() {
    let rules = PromotionRuleTable::builtin();
    let evaluator = PromotionEvaluator::new(&rules);
    let mut student = record(json!({
        "role": "student",
        "board": "CBSE",
        "className": "Class 6",
        "class": "Class 2"
    }));

    assert!(evaluator.promote(&mut student, date(2026, 4, 10)));
    assert_eq!(student.class_name.as_deref(), Some("Class 7"));
    assert_eq!(student.legacy_class.as_deref(), Some("Class 7"));
}

// =============================================================================
// Purity
// =============================================================================

/// `evaluate` is deterministic and leaves its input alone.
#[test]
fn test_evaluate_is_pure() {
    let rules = PromotionRuleTable::builtin();
    let evaluator = PromotionEvaluator::new(&rules);
    let student = StudentRecord::student("CBSE", "Class 4");
    let today = date(2026, 8, 8);

    let first = evaluator.evaluate(&student, today);
    for _ in 0..50 {
        assert_eq!(evaluator.evaluate(&student, today), first);
    }
    assert_eq!(student, StudentRecord::student("CBSE", "Class 4"));
}

/// One rule table can be shared across threads.
#[test]
fn test_shared_rules_across_threads() {
    use std::sync::Arc;
    use std::thread;

    let rules = Arc::new(PromotionRuleTable::builtin());
    let handles: Vec<_> = (1..=11)
        .map(|class| {
            let rules = Arc::clone(&rules);
            thread::spawn(move || {
                let mut student = StudentRecord::student("CBSE", format!("Class {}", class));
                PromotionEvaluator::new(&rules).promote(&mut student, date(2026, 4, 1));
                student.class_name
            })
        })
        .collect();

    for (class, handle) in (1..=11).zip(handles) {
        assert_eq!(handle.join().unwrap(), Some(format!("Class {}", class + 1)));
    }
}
