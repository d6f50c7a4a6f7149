//! Class name parsing and formatting
//!
//! Stored class names are free text such as "Class 7", "7th" or "Grade 10 - B".
//! The class number is the first run of ASCII digits; anything else in the
//! string is ignored.

use std::num::ParseIntError;
use std::sync::OnceLock;

use regex::Regex;

/// Highest class a student can be in. Students at or above it never move up.
pub const FINAL_CLASS: u32 = 12;

static DIGITS: OnceLock<Regex> = OnceLock::new();

fn digits() -> &'static Regex {
    DIGITS.get_or_init(|| Regex::new(r"[0-9]+").expect("static pattern is valid"))
}

/// Extracts the class number from a class name.
///
/// Returns `None` when the name contains no digits, and `Some(Err(_))` when
/// the digit run does not fit a `u32`.
pub fn extract_class_number(class_name: &str) -> Option<Result<u32, ParseIntError>> {
    digits()
        .find(class_name)
        .map(|m| m.as_str().parse::<u32>())
}

/// Canonical class name written back after promotion.
pub fn format_class_name(number: u32) -> String {
    format!("Class {}", number)
}
