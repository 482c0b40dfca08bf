// SPDX-License-Identifier: MIT OR Apache-2.0

//! The context-augmenting adapter.
//!
//! An [`Adapter`] sits between log call sites and a [`Logger`]. For every call it
//! merges three kinds of metadata into the record's extra fields:
//!
//! - the shared [`ProcessContext`] (`env`, `pid`, `host`);
//! - a `timestamp` taken when the call is made;
//! - the `caller`, `<file>:<line>` of the call site.
//!
//! Call sites are captured with `#[track_caller]` rather than by walking the
//! stack. Every log method on [`Adapter`] is `#[track_caller]`, so `caller` is the
//! line that called the adapter. A wrapper that should be transparent (like the
//! free functions in [`crate::root`]) marks itself `#[track_caller]` too, and the
//! location then resolves one level further out.
//!
//! # Example
//!
//! ```
//! use contextlog::{Adapter, InMemoryLogger, LogOptions, ProcessContext};
//! use std::sync::Arc;
//!
//! let logger = Arc::new(InMemoryLogger::new());
//! let adapter = Adapter::new(logger.clone(), Arc::new(ProcessContext::new("prod")));
//!
//! adapter.info("hello", LogOptions::new().extra("user", "alice"));
//!
//! let record = &logger.drain_records()[0];
//! assert_eq!(record["message"], "hello");
//! assert_eq!(record["levelname"], "INFO");
//! assert_eq!(record["env"], "prod");
//! assert_eq!(record["user"], "alice");
//! assert!(record["caller"].is_string());
//! ```

use crate::config::Config;
use crate::level::Level;
use crate::log_record::{Caller, Extra, LogOptions, LogRecord, keys};
use crate::logger::Logger;
use crate::process_context::ProcessContext;
use crate::stream_logger::StreamLogger;
use chrono::{Local, SecondsFormat};
use serde_json::Value;
use std::error::Error as StdError;
use std::fmt::Display;
use std::sync::Arc;

/// Wraps a [`Logger`], adding process context, timestamp and caller to every record.
///
/// Adapters are cheap to clone and are `Send + Sync`; share one by reference or
/// clone it per component.
#[derive(Debug, Clone)]
pub struct Adapter {
    sink: Arc<dyn Logger>,
    context: Arc<ProcessContext>,
    min_level: Level,
}

impl Adapter {
    /// An adapter writing every level to `sink`.
    pub fn new(sink: Arc<dyn Logger>, context: Arc<ProcessContext>) -> Self {
        Self {
            sink,
            context,
            min_level: Level::Debug,
        }
    }

    /// An adapter writing JSON lines to the configured stream.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(StreamLogger::for_stream(config.stream)),
            Arc::new(ProcessContext::new(config.environment.clone())),
        )
        .with_min_level(config.min_level)
    }

    /// Discards records below `min_level`.
    pub fn with_min_level(mut self, min_level: Level) -> Self {
        self.min_level = min_level;
        self
    }

    pub fn min_level(&self) -> Level {
        self.min_level
    }

    pub fn context(&self) -> &ProcessContext {
        &self.context
    }

    pub fn sink(&self) -> &Arc<dyn Logger> {
        &self.sink
    }

    /// Whether a record at `level` would be written.
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }

    /**
    Enriches `options` with process context, a timestamp and, if known, the caller.

    Context fields come first, then the caller's own extras. A caller-supplied key
    that collides with a reserved one (`env`, `pid`, `host`, `timestamp`, `caller`,
    `message`, `levelname`, `exc_info`) is kept under `extra.<key>`. If the caller
    also supplied `extra.<key>` itself, the moved value gets the first free numeric
    suffix (`extra.<key>.1`, then `.2`, ...), so no caller value is lost.
    When `caller` is `None` the `caller` field is left out.
    */
    pub fn process(&self, options: LogOptions, caller: Option<Caller<'_>>) -> LogOptions {
        let LogOptions { extra, exc_info } = options;
        let mut merged = Extra::with_capacity(extra.len() + 5);
        for (key, value) in self.context.fields() {
            merged.insert(key.to_string(), value);
        }
        merged.insert(keys::TIMESTAMP.to_string(), Value::from(timestamp()));
        if let Some(caller) = caller {
            merged.insert(keys::CALLER.to_string(), Value::from(caller.to_string()));
        }
        for (key, value) in &extra {
            let key = if keys::is_reserved(key) {
                keys::shadowed(key, |name| extra.contains_key(name) || merged.contains_key(name))
            } else {
                key.clone()
            };
            merged.insert(key, value.clone());
        }
        LogOptions {
            extra: merged,
            exc_info,
        }
    }

    /// Logs with an explicitly supplied caller. The log methods and macros all end up here.
    pub fn log_at(
        &self,
        level: Level,
        message: impl Display,
        options: LogOptions,
        caller: Option<Caller<'_>>,
    ) {
        if !self.enabled(level) {
            return;
        }
        let options = self.process(options, caller);
        let record = LogRecord::new(level, message.to_string(), options);
        if let Err(e) = self.sink.finish_log_record(record) {
            crate::error::report(e);
        }
    }

    #[track_caller]
    pub fn log(&self, level: Level, message: impl Display, options: LogOptions) {
        self.log_at(level, message, options, Some(Caller::here()));
    }

    #[track_caller]
    pub fn debug(&self, message: impl Display, options: LogOptions) {
        self.log_at(Level::Debug, message, options, Some(Caller::here()));
    }

    #[track_caller]
    pub fn info(&self, message: impl Display, options: LogOptions) {
        self.log_at(Level::Info, message, options, Some(Caller::here()));
    }

    #[track_caller]
    pub fn warning(&self, message: impl Display, options: LogOptions) {
        self.log_at(Level::Warning, message, options, Some(Caller::here()));
    }

    #[track_caller]
    pub fn error(&self, message: impl Display, options: LogOptions) {
        self.log_at(Level::Error, message, options, Some(Caller::here()));
    }

    #[track_caller]
    pub fn critical(&self, message: impl Display, options: LogOptions) {
        self.log_at(Level::Critical, message, options, Some(Caller::here()));
    }

    /// Logs at [`Level::Error`] with `exc_info` rendered from `err`.
    #[track_caller]
    pub fn exception<E: StdError + ?Sized>(
        &self,
        message: impl Display,
        err: &E,
        options: LogOptions,
    ) {
        self.log_at(
            Level::Error,
            message,
            options.exc_info(err),
            Some(Caller::here()),
        );
    }

    /// Flushes the underlying sink.
    pub fn flush(&self) -> Result<(), crate::Error> {
        self.sink.flush()
    }
}

fn timestamp() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Micros, false)
}
