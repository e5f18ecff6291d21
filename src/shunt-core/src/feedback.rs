//! Operator feedback channel.
//!
//! Status changes report their per-shunt outcome as human-readable
//! messages on an injected sink. The sink is the only record of which
//! items in a batch succeeded, were skipped, or were no-ops, so callers
//! that care about outcomes supply a sink they can inspect afterwards.

use serde::{Deserialize, Serialize};

/// Severity of a feedback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Outcome of a successful change.
    Status,
    /// The request was a no-op.
    Warning,
    /// The request referenced an unknown shunt.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Status => write!(f, "status"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// One feedback message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackMessage {
    pub severity: Severity,
    pub text: String,
}

/// Sink for per-shunt outcome messages.
pub trait FeedbackSink {
    /// Record one message.
    fn message(&mut self, severity: Severity, text: &str);
}

/// Sink that buffers messages for later inspection.
#[derive(Debug, Clone, Default)]
pub struct FeedbackLog {
    messages: Vec<FeedbackMessage>,
}

impl FeedbackLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages recorded so far, in emission order.
    pub fn messages(&self) -> &[FeedbackMessage] {
        &self.messages
    }

    /// Whether any error-severity message was recorded.
    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|m| m.severity == Severity::Error)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl FeedbackSink for FeedbackLog {
    fn message(&mut self, severity: Severity, text: &str) {
        self.messages.push(FeedbackMessage {
            severity,
            text: text.to_string(),
        });
    }
}
