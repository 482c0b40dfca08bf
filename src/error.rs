// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error type shared by every fallible operation in contextlog.

use std::io::Write;
use thiserror::Error;

/// Errors produced while configuring or writing logs.
///
/// Logging calls themselves never return these; a failed write is reported on
/// stderr and the call carries on. They surface from setup ([`crate::root::init`],
/// [`crate::Config::from_env`], [`crate::capture::init`]) and from [`crate::Logger`]
/// implementations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The root adapter was already installed.
    #[error("the root logger is already initialized")]
    AlreadyInitialized,

    #[error("unknown log level `{0}`")]
    InvalidLevel(String),

    #[error("unknown output stream `{0}` (expected `stdout` or `stderr`)")]
    InvalidStream(String),

    #[error("failed to serialize log record: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write log record: {0}")]
    Io(#[from] std::io::Error),

    /// Another `log` facade logger is already installed.
    #[error("failed to capture the `log` facade: {0}")]
    Capture(#[from] log::SetLoggerError),
}

/// Reports a problem inside the logging layer itself.
///
/// There is nowhere better to send it, so it goes to stderr as a plain line. If stderr
/// itself can't be written the problem is dropped; logging never panics.
pub(crate) fn report(problem: impl std::fmt::Display) {
    let _ = writeln!(std::io::stderr(), "contextlog: {problem}");
}
