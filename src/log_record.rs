// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log record types for contextlog.
//!
//! A log call carries three things: a level, a message, and a [`LogOptions`] bag
//! holding caller-supplied extra fields and optional exception information. The
//! [`Adapter`](crate::Adapter) enriches the options with process context, a
//! timestamp and the caller's location, and hands the finished [`LogRecord`] to a
//! [`Logger`](crate::Logger).
//!
//! ```
//! use contextlog::{Level, LogOptions, LogRecord};
//!
//! let options = LogOptions::new()
//!     .extra("user", "alice")
//!     .extra("attempt", 3);
//! let record = LogRecord::new(Level::Info, "login", options);
//! assert_eq!(record.extra()["user"], "alice");
//! ```

use crate::Level;
use serde::Serialize;
use serde_json::Value;
use std::error::Error as StdError;
use std::fmt::Display;
use std::panic::Location;
use std::path::Path;

/// Extra fields attached to a single log call, in insertion order.
pub type Extra = serde_json::Map<String, Value>;

pub(crate) mod keys {
    pub(crate) const MESSAGE: &str = "message";
    pub(crate) const LEVELNAME: &str = "levelname";
    pub(crate) const EXC_INFO: &str = "exc_info";
    pub(crate) const ENV: &str = "env";
    pub(crate) const PID: &str = "pid";
    pub(crate) const HOST: &str = "host";
    pub(crate) const TIMESTAMP: &str = "timestamp";
    pub(crate) const CALLER: &str = "caller";

    /// Keys owned by contextlog. Caller-supplied extras never overwrite them.
    pub(crate) const RESERVED: [&str; 8] =
        [MESSAGE, LEVELNAME, EXC_INFO, ENV, PID, HOST, TIMESTAMP, CALLER];

    pub(crate) fn is_reserved(key: &str) -> bool {
        RESERVED.contains(&key)
    }

    /// Where a caller-supplied value for a reserved key ends up: `extra.<key>`, or
    /// `extra.<key>.1`, `extra.<key>.2`, ... when that name is `taken`.
    pub(crate) fn shadowed(key: &str, taken: impl Fn(&str) -> bool) -> String {
        let base = format!("extra.{key}");
        if !taken(&base) {
            return base;
        }
        (1u32..)
            .map(|n| format!("{base}.{n}"))
            .find(|name| !taken(name))
            .unwrap_or(base)
    }
}

/**
Per-call options: extra fields and exception info.

Build one with the chaining methods and pass it to any [`Adapter`](crate::Adapter)
log method. `LogOptions::default()` is the empty bag.
*/
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogOptions {
    pub(crate) extra: Extra,
    pub(crate) exc_info: Option<String>,
}

impl LogOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an extra field from anything convertible into a JSON value.
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /**
    Adds an extra field from any serializable value.

    Logging must not fail because a field can't be serialized, so a value that
    serde rejects is recorded as the text of the serialization error instead.
    */
    pub fn field<T: Serialize + ?Sized>(self, key: impl Into<String>, value: &T) -> Self {
        let value = serde_json::to_value(value)
            .unwrap_or_else(|e| Value::String(format!("<unserializable: {e}>")));
        self.extra(key, value)
    }

    /// Merges a whole mapping of extra fields; later keys replace earlier ones.
    pub fn with_extra(mut self, extra: Extra) -> Self {
        self.extra.extend(extra);
        self
    }

    /**
    Attaches exception information rendered from `err` and its chain of sources.

    The first line is the error itself; each source follows on its own
    `Caused by:` line.
    */
    pub fn exc_info<E: StdError + ?Sized>(mut self, err: &E) -> Self {
        self.exc_info = Some(render_error_chain(err));
        self
    }

    pub fn extra_fields(&self) -> &Extra {
        &self.extra
    }

    pub fn exception_info(&self) -> Option<&str> {
        self.exc_info.as_deref()
    }
}

fn render_error_chain<E: StdError + ?Sized>(err: &E) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str("\nCaused by: ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}

/// Source location a log call was made from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Caller<'a> {
    file: &'a str,
    line: u32,
}

impl<'a> Caller<'a> {
    pub const fn new(file: &'a str, line: u32) -> Self {
        Self { file, line }
    }

    /// The location of the innermost `#[track_caller]` call site.
    #[track_caller]
    pub fn here() -> Caller<'static> {
        Location::caller().into()
    }

    pub fn file(&self) -> &'a str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// File name without its directories.
    pub fn basename(&self) -> &'a str {
        Path::new(self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(self.file)
    }
}

impl<'a> From<&'a Location<'a>> for Caller<'a> {
    fn from(location: &'a Location<'a>) -> Self {
        Self::new(location.file(), location.line())
    }
}

/// Formats as `<basename>:<line>`, the form written to the `caller` field.
impl Display for Caller<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.basename(), self.line)
    }
}

/**
A log record.

The message is formatted once, up front; positional arguments are applied by
`format_args!` at the call site. Records are produced fresh for every call and
handed by value to a [`Logger`](crate::Logger).
*/
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    level: Level,
    message: String,
    options: LogOptions,
}

impl LogRecord {
    pub fn new(level: Level, message: impl Into<String>, options: LogOptions) -> Self {
        Self {
            level,
            message: message.into(),
            options,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn extra(&self) -> &Extra {
        &self.options.extra
    }

    pub fn exc_info(&self) -> Option<&str> {
        self.options.exc_info.as_deref()
    }
}
