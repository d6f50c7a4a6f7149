//! Observable events
//!
//! Events are explicit and typed; each maps to a stable log name and a
//! default severity.

use std::fmt;

use super::logger::Severity;

/// Observable events in classpromo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration loaded
    ConfigLoaded,
    /// Rule table loaded or built in
    RulesLoaded,
    /// A record moved up a class
    StudentPromoted,
    /// A record was evaluated and left unchanged
    PromotionSkipped,
    /// Batch evaluation begins
    BatchBegin,
    /// Batch evaluation complete
    BatchComplete,
    /// Command failed before producing a response
    CommandFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::RulesLoaded => "RULES_LOADED",
            Event::StudentPromoted => "STUDENT_PROMOTED",
            Event::PromotionSkipped => "PROMOTION_SKIPPED",
            Event::BatchBegin => "BATCH_BEGIN",
            Event::BatchComplete => "BATCH_COMPLETE",
            Event::CommandFailed => "COMMAND_FAILED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::PromotionSkipped => Severity::Trace,
            Event::CommandFailed => Severity::Error,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
