//! Terminal feedback sink.

use shunt_core::{FeedbackSink, Severity};

/// Prints feedback as it is emitted: successes to stdout, warnings and
/// errors to stderr.
#[derive(Debug, Default)]
pub struct TerminalSink {
    errors: usize,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any error-severity message was printed.
    pub fn saw_error(&self) -> bool {
        self.errors > 0
    }
}

impl FeedbackSink for TerminalSink {
    fn message(&mut self, severity: Severity, text: &str) {
        match severity {
            Severity::Status => println!("{text}"),
            Severity::Warning => eprintln!("warning: {text}"),
            Severity::Error => {
                self.errors += 1;
                eprintln!("error: {text}");
            }
        }
    }
}
