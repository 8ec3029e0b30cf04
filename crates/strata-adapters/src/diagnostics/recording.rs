//! Diagnostics adapter that keeps every message, for assertions in tests.

use std::sync::{Arc, Mutex, PoisonError};

use strata_core::application::ports::Diagnostics;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Warn,
    Info,
}

/// One diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub level: Level,
    pub message: String,
}

/// Collects diagnostics in emission order. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingDiagnostics {
    records: Arc<Mutex<Vec<Record>>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, oldest first.
    pub fn records(&self) -> Vec<Record> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages(Level::Warn)
    }

    pub fn infos(&self) -> Vec<String> {
        self.messages(Level::Info)
    }

    fn messages(&self, level: Level) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|r| r.level == level)
            .map(|r| r.message)
            .collect()
    }

    fn push(&self, level: Level, message: &str) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Record {
                level,
                message: message.to_string(),
            });
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn warn(&self, message: &str) {
        self.push(Level::Warn, message);
    }

    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }
}
