//! Observability for classpromo
//!
//! - Structured logging (JSON lines on stderr)
//! - Counter metrics
//! - Typed lifecycle events
//!
//! Observability never changes an evaluation result. A failed log write is
//! dropped silently.
//!
//! # Usage
//!
//! ```ignore
//! use classpromo::observability::{log_event_with_fields, Event, PromotionMetrics};
//!
//! log_event_with_fields(Event::RulesLoaded, &[("boards", "4")]);
//!
//! let metrics = PromotionMetrics::new();
//! metrics.record_promoted();
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsSnapshot, PromotionMetrics};

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
