// SPDX-License-Identifier: MIT OR Apache-2.0

//! Format-string logging macros.
//!
//! Each macro takes an optional adapter, a format string with its arguments, and
//! optionally `;` followed by `key = value` extra fields:
//!
//! ```rust
//! use contextlog::{Adapter, InMemoryLogger, ProcessContext};
//! use std::sync::Arc;
//!
//! let logger = Arc::new(InMemoryLogger::new());
//! let adapter = Adapter::new(logger.clone(), Arc::new(ProcessContext::new("prod")));
//! let user = "alice";
//!
//! // Through an explicit adapter...
//! contextlog::info!(adapter; "{} logged in", user; user = user, attempts = 2);
//! // ...or through the root adapter.
//! contextlog::warning!("disk at {}%", 91);
//!
//! let record = &logger.drain_records()[0];
//! assert_eq!(record["message"], "alice logged in");
//! assert_eq!(record["attempts"], 2);
//! ```
//!
//! Values are captured with serde, so any `Serialize` type works as an extra field.
//! The call site is recorded with `file!()`/`line!()` at the macro invocation.
//! Nothing after the level check is evaluated when the level is disabled.

/// Shared expansion of the logging macros.
#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    (@options $init:expr, $adapter:expr, $level:expr,
     $fmt:literal $(, $arg:expr)* $(,)? $(; $($key:ident = $val:expr),* $(,)?)?) => {{
        let adapter: &$crate::Adapter = &$adapter;
        let level: $crate::Level = $level;
        if adapter.enabled(level) {
            #[allow(unused_mut)]
            let mut options: $crate::LogOptions = $init;
            $($(options = options.field(stringify!($key), &$val);)*)?
            adapter.log_at(
                level,
                format_args!($fmt $(, $arg)*),
                options,
                Some($crate::Caller::new(file!(), line!())),
            );
        }
    }};
}

/// Log at DEBUG level.
#[macro_export]
macro_rules! debug {
    ($fmt:literal $($rest:tt)*) => {
        $crate::__log!(@options $crate::LogOptions::new(), $crate::root::adapter(), $crate::Level::Debug, $fmt $($rest)*)
    };
    ($adapter:expr; $($rest:tt)+) => {
        $crate::__log!(@options $crate::LogOptions::new(), $adapter, $crate::Level::Debug, $($rest)+)
    };
}

/// Log at INFO level.
#[macro_export]
macro_rules! info {
    ($fmt:literal $($rest:tt)*) => {
        $crate::__log!(@options $crate::LogOptions::new(), $crate::root::adapter(), $crate::Level::Info, $fmt $($rest)*)
    };
    ($adapter:expr; $($rest:tt)+) => {
        $crate::__log!(@options $crate::LogOptions::new(), $adapter, $crate::Level::Info, $($rest)+)
    };
}

/// Log at WARNING level.
#[macro_export]
macro_rules! warning {
    ($fmt:literal $($rest:tt)*) => {
        $crate::__log!(@options $crate::LogOptions::new(), $crate::root::adapter(), $crate::Level::Warning, $fmt $($rest)*)
    };
    ($adapter:expr; $($rest:tt)+) => {
        $crate::__log!(@options $crate::LogOptions::new(), $adapter, $crate::Level::Warning, $($rest)+)
    };
}

/// Log at ERROR level.
#[macro_export]
macro_rules! error {
    ($fmt:literal $($rest:tt)*) => {
        $crate::__log!(@options $crate::LogOptions::new(), $crate::root::adapter(), $crate::Level::Error, $fmt $($rest)*)
    };
    ($adapter:expr; $($rest:tt)+) => {
        $crate::__log!(@options $crate::LogOptions::new(), $adapter, $crate::Level::Error, $($rest)+)
    };
}

/// Log at CRITICAL level.
#[macro_export]
macro_rules! critical {
    ($fmt:literal $($rest:tt)*) => {
        $crate::__log!(@options $crate::LogOptions::new(), $crate::root::adapter(), $crate::Level::Critical, $fmt $($rest)*)
    };
    ($adapter:expr; $($rest:tt)+) => {
        $crate::__log!(@options $crate::LogOptions::new(), $adapter, $crate::Level::Critical, $($rest)+)
    };
}

/// Log at a level chosen at runtime: `log!(Level::Warning, "...")`.
#[macro_export]
macro_rules! log {
    ($adapter:expr; $level:expr, $fmt:literal $($rest:tt)*) => {
        $crate::__log!(@options $crate::LogOptions::new(), $adapter, $level, $fmt $($rest)*)
    };
    ($level:expr, $fmt:literal $($rest:tt)*) => {
        $crate::__log!(@options $crate::LogOptions::new(), $crate::root::adapter(), $level, $fmt $($rest)*)
    };
}

/// Log at ERROR level with exception info: `exception!(err, "...")`.
///
/// The error is borrowed; pass the error value itself, not a `Box<dyn Error>`
/// (use `*boxed` for those).
#[macro_export]
macro_rules! exception {
    ($adapter:expr; $err:expr, $fmt:literal $($rest:tt)*) => {
        $crate::__log!(@options $crate::LogOptions::new().exc_info(&$err), $adapter, $crate::Level::Error, $fmt $($rest)*)
    };
    ($err:expr, $fmt:literal $($rest:tt)*) => {
        $crate::__log!(@options $crate::LogOptions::new().exc_info(&$err), $crate::root::adapter(), $crate::Level::Error, $fmt $($rest)*)
    };
}
