//! Terminal log feed.
//!
//! Domain data rendered by the presentation layer's terminal panel,
//! distinct from `tracing` diagnostics. Message templates are
//! fixed-language regardless of the active locale.

use chrono::NaiveDateTime;
use questline_types::LogLevel;
use serde::Serialize;

/// One line of the terminal feed.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub timestamp: NaiveDateTime,
    pub level: LogLevel,
    pub message: String,
}

/// Append-only log feed for the session.
#[derive(Debug, Default)]
pub struct LogFeed {
    entries: Vec<LogEntry>,
}

impl LogFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, timestamp: NaiveDateTime, level: LogLevel, message: impl Into<String>) {
        self.entries.push(LogEntry {
            timestamp,
            level,
            message: message.into(),
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear the feed (the terminal's `clear` command).
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
