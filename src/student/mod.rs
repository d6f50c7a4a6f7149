//! Student records and class names

mod class_name;
mod record;

pub use class_name::{extract_class_number, format_class_name, FINAL_CLASS};
pub use record::{StudentRecord, STUDENT_ROLE};
