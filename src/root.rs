// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide root adapter and the free functions that log through it.
//!
//! # Lifecycle
//!
//! There is exactly one root adapter per process and it is set exactly once:
//!
//! 1. Early in `main`, call [`init`] (configured from a [`Config`]) or [`install`]
//!    (with an adapter you built yourself).
//! 2. Everywhere else, log with the free functions in this module, the macros
//!    without an adapter argument, or pass [`adapter()`] down by reference.
//!
//! Both [`init`] and [`install`] fail with [`Error::AlreadyInitialized`] once a root
//! adapter exists. If the process logs before either is called, the root is
//! initialized on first use from the environment ([`Config::from_env`]), writing
//! JSON lines to stderr.
//!
//! There is no teardown; the root adapter lives until the process exits. Call
//! [`flush`] before exiting if the sink buffers.
//!
//! # Example
//!
//! ```
//! use contextlog::{Config, LogOptions, root};
//!
//! root::init(Config::default().with_environment("prod")).unwrap();
//!
//! root::info("service started", LogOptions::new().extra("port", 8080));
//! root::warning("cache cold", LogOptions::new());
//! ```
//!
//! # Caller location
//!
//! Every free function is `#[track_caller]`, so the `caller` field names the line
//! that called the free function, not a line inside this module.

use crate::adapter::Adapter;
use crate::config::{Config, env_var};
use crate::error::Error;
use crate::level::Level;
use crate::log_record::LogOptions;
use std::error::Error as StdError;
use std::fmt::Display;
use std::sync::OnceLock;

static ROOT: OnceLock<Adapter> = OnceLock::new();

/// Initializes the root adapter from `config`.
///
/// Builds a JSON stream logger on the configured stream and the process context for
/// the configured environment.
pub fn init(config: Config) -> Result<&'static Adapter, Error> {
    install(Adapter::from_config(&config))
}

/// Installs `adapter` as the root adapter.
pub fn install(adapter: Adapter) -> Result<&'static Adapter, Error> {
    let mut installed_now = false;
    let root = ROOT.get_or_init(|| {
        installed_now = true;
        adapter
    });
    if installed_now {
        Ok(root)
    } else {
        Err(Error::AlreadyInitialized)
    }
}

/// Returns the root adapter, initializing it from the environment if needed.
pub fn adapter() -> &'static Adapter {
    ROOT.get_or_init(|| {
        let config = Config::from_lookup_lenient(env_var);
        Adapter::from_config(&config)
    })
}

/// Whether the root adapter has been set, explicitly or by first use.
pub fn is_initialized() -> bool {
    ROOT.get().is_some()
}

/// Flushes the root adapter's sink, if there is one.
pub fn flush() -> Result<(), Error> {
    match ROOT.get() {
        Some(root) => root.flush(),
        None => Ok(()),
    }
}

/// Log a message to the root adapter at DEBUG level.
#[track_caller]
pub fn debug(message: impl Display, options: LogOptions) {
    adapter().debug(message, options);
}

/// Log a message to the root adapter at INFO level.
#[track_caller]
pub fn info(message: impl Display, options: LogOptions) {
    adapter().info(message, options);
}

/// Log a message to the root adapter at WARNING level.
#[track_caller]
pub fn warning(message: impl Display, options: LogOptions) {
    adapter().warning(message, options);
}

/// Log a message to the root adapter at ERROR level.
#[track_caller]
pub fn error(message: impl Display, options: LogOptions) {
    adapter().error(message, options);
}

/// Log a message to the root adapter at CRITICAL level.
#[track_caller]
pub fn critical(message: impl Display, options: LogOptions) {
    adapter().critical(message, options);
}

/// Log a message to the root adapter at the specified level.
#[track_caller]
pub fn log(level: Level, message: impl Display, options: LogOptions) {
    adapter().log(level, message, options);
}

/// Log a message to the root adapter at ERROR level, including `err` as exception info.
#[track_caller]
pub fn exception<E: StdError + ?Sized>(message: impl Display, err: &E, options: LogOptions) {
    adapter().exception(message, err, options);
}
