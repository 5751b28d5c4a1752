//! Greeting log - the parent-owned record of callback side effects
//!
//! Every successful callback invocation appends exactly one entry here.
//! Entries are kept in arrival order and never persisted.

use chrono::{DateTime, Local};

/// One recorded greeting
#[derive(Debug, Clone)]
pub struct GreetEntry {
    pub message: String,
    pub at: DateTime<Local>,
}

/// Ordered record of greetings produced by the parent's callback
#[derive(Debug, Default)]
pub struct GreetLog {
    entries: Vec<GreetEntry>,
}

impl GreetLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry, timestamped now
    pub fn record(&mut self, message: impl Into<String>) {
        self.entries.push(GreetEntry {
            message: message.into(),
            at: Local::now(),
        });
    }

    pub fn entries(&self) -> &[GreetEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last_message(&self) -> Option<&str> {
        self.entries.last().map(|e| e.message.as_str())
    }
}

/// Render the greeting message for a name
pub fn greet_message(name: &str) -> String {
    format!("Hello {}", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greet_message_format() {
        assert_eq!(greet_message("Child"), "Hello Child");
        assert_eq!(greet_message(""), "Hello ");
    }

    #[test]
    fn test_record_keeps_order() {
        let mut log = GreetLog::new();
        assert!(log.is_empty());

        log.record("Hello Child");
        log.record("Hello there");

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].message, "Hello Child");
        assert_eq!(log.last_message(), Some("Hello there"));
    }
}
