//! # Student Record
//!
//! The slice of a user document that promotion reads and writes. Field names
//! follow the stored document (`className`, `class`, `lastPromotedYear`);
//! every other field rides along untouched in `extra`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Role value that makes a record eligible for promotion.
pub const STUDENT_ROLE: &str = "student";

/// User record as seen by the promotion evaluator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    /// Account role ("student", "teacher", "admin", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Curriculum board, matched case-insensitively against the rule table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board: Option<String>,

    /// Current class, e.g. "Class 7"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    /// Legacy alias of `class_name`, still read by older documents
    #[serde(default, rename = "class", skip_serializing_if = "Option::is_none")]
    pub legacy_class: Option<String>,

    /// Calendar year of the last automatic promotion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_promoted_year: Option<i32>,

    /// Remaining document fields, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StudentRecord {
    /// Creates a student record with the given board and class name.
    pub fn student(board: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            role: Some(STUDENT_ROLE.to_string()),
            board: Some(board.into()),
            class_name: Some(class_name.into()),
            ..Self::default()
        }
    }

    /// True if the role is exactly "student".
    pub fn is_student(&self) -> bool {
        self.role.as_deref() == Some(STUDENT_ROLE)
    }

    /// The effective class name: `className` when non-empty, else the legacy
    /// `class` when non-empty.
    pub fn effective_class_name(&self) -> Option<&str> {
        non_empty(self.class_name.as_deref()).or_else(|| non_empty(self.legacy_class.as_deref()))
    }

    /// The board, if present and non-empty.
    pub fn board(&self) -> Option<&str> {
        non_empty(self.board.as_deref())
    }

    /// Sets both class fields to the same value.
    pub fn set_class(&mut self, class_name: &str) {
        self.class_name = Some(class_name.to_string());
        self.legacy_class = Some(class_name.to_string());
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
