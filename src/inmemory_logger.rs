// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Logger
//!
//! A [`Logger`] that keeps formatted JSON lines in memory instead of writing them
//! anywhere. It exists for tests: install it behind an [`Adapter`](crate::Adapter),
//! run the code under test, then drain and inspect what was logged.

use crate::error::Error;
use crate::formatter::JsonFormatter;
use crate::log_record::LogRecord;
use crate::logger::Logger;
use serde_json::Value;
use std::sync::{Mutex, PoisonError};

/// An in-memory logger that stores each record as a line of JSON.
///
/// # Example
///
/// ```rust
/// use contextlog::{Adapter, InMemoryLogger, LogOptions, ProcessContext};
/// use std::sync::Arc;
///
/// let logger = Arc::new(InMemoryLogger::new());
/// let adapter = Adapter::new(logger.clone(), Arc::new(ProcessContext::new("test")));
///
/// adapter.info("Test message 42", LogOptions::new());
///
/// let records = logger.drain_records();
/// assert_eq!(records[0]["message"], "Test message 42");
/// assert_eq!(records[0]["env"], "test");
/// ```
#[derive(Debug, Default)]
pub struct InMemoryLogger {
    logs: Mutex<Vec<String>>,
    formatter: JsonFormatter,
}

impl InMemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains all logs into a single string, one JSON object per line, clearing the buffer.
    pub fn drain_logs(&self) -> String {
        let mut logs = self.logs.lock().unwrap_or_else(PoisonError::into_inner);
        let result = logs.join("\n");
        logs.clear();
        result
    }

    /// Drains all logs as parsed JSON values, clearing the buffer.
    pub fn drain_records(&self) -> Vec<Value> {
        let mut logs = self.logs.lock().unwrap_or_else(PoisonError::into_inner);
        logs.drain(..)
            .filter_map(|line| serde_json::from_str(&line).ok())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.logs.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Logger for InMemoryLogger {
    fn finish_log_record(&self, record: LogRecord) -> Result<(), Error> {
        let line = self.formatter.format(&record)?;
        self.logs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line);
        Ok(())
    }

    fn flush(&self) -> Result<(), Error> {
        // Nothing buffered outside the vector itself.
        Ok(())
    }
}
