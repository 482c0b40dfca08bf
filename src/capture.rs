// SPDX-License-Identifier: MIT OR Apache-2.0

//! Routes records from the [`log`] facade through an [`Adapter`].
//!
//! Libraries that log with the `log` crate know nothing about contextlog. Installing
//! the capture logger makes their records come out as the same JSON lines as
//! everything else, with process context, timestamp and caller attached:
//!
//! ```
//! contextlog::capture::init_root().unwrap();
//! log::warn!("emitted by a dependency");
//! ```
//!
//! Levels map `error` to ERROR, `warn` to WARNING, `info` to INFO, and both
//! `debug` and `trace` to DEBUG. The record's target is kept as the `target` extra
//! field. The caller comes from the record's file and line and is left out when the
//! record doesn't carry them.

use crate::adapter::Adapter;
use crate::error::Error;
use crate::level::Level;
use crate::log_record::{Caller, LogOptions};

/// `log::Log` implementation forwarding to an adapter.
#[derive(Debug, Clone, Copy)]
pub struct CaptureLogger {
    adapter: &'static Adapter,
}

impl CaptureLogger {
    pub fn new(adapter: &'static Adapter) -> Self {
        Self { adapter }
    }
}

impl log::Log for CaptureLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.adapter.enabled(level_from_log(metadata.level()))
    }

    fn log(&self, record: &log::Record<'_>) {
        let level = level_from_log(record.level());
        if !self.adapter.enabled(level) {
            return;
        }
        let caller = match (record.file(), record.line()) {
            (Some(file), Some(line)) => Some(Caller::new(file, line)),
            _ => None,
        };
        let options = LogOptions::new().extra("target", record.target());
        self.adapter.log_at(level, record.args(), options, caller);
    }

    fn flush(&self) {
        if let Err(e) = self.adapter.flush() {
            crate::error::report(e);
        }
    }
}

/// Installs a [`CaptureLogger`] for `adapter` as the `log` facade's logger.
///
/// The facade's maximum level is set from the adapter's minimum level. Fails if any
/// `log` logger is already installed.
pub fn init(adapter: &'static Adapter) -> Result<(), Error> {
    log::set_boxed_logger(Box::new(CaptureLogger::new(adapter)))?;
    log::set_max_level(level_filter(adapter.min_level()));
    Ok(())
}

/// Captures the `log` facade into the root adapter.
pub fn init_root() -> Result<(), Error> {
    init(crate::root::adapter())
}

pub fn level_from_log(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warning,
        log::Level::Info => Level::Info,
        log::Level::Debug | log::Level::Trace => Level::Debug,
    }
}

fn level_filter(min_level: Level) -> log::LevelFilter {
    match min_level {
        Level::Debug => log::LevelFilter::Trace,
        Level::Info => log::LevelFilter::Info,
        Level::Warning => log::LevelFilter::Warn,
        Level::Error | Level::Critical => log::LevelFilter::Error,
    }
}
