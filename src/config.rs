// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for the root logger.
//!
//! Everything is read from environment variables once, at initialization:
//!
//! | Variable            | Meaning                       | Default  |
//! |---------------------|-------------------------------|----------|
//! | `CLOUD_ENVIRONMENT` | deployment environment name   | `local`  |
//! | `CONTEXTLOG_LEVEL`  | minimum level that is written | `debug`  |
//! | `CONTEXTLOG_STREAM` | `stderr` or `stdout`          | `stderr` |
//!
//! [`Config`] also deserializes with serde, for applications that keep logging
//! settings in their own configuration files.

use crate::error::Error;
use crate::level::Level;
use crate::process_context::{DEFAULT_ENVIRONMENT, environment_from};
use crate::stream_logger::Stream;
use serde::{Deserialize, Serialize};

pub const LEVEL_VAR: &str = "CONTEXTLOG_LEVEL";
pub const STREAM_VAR: &str = "CONTEXTLOG_STREAM";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub environment: String,
    pub min_level: Level,
    pub stream: Stream,
}

/// Reads an environment variable. A value that isn't valid UTF-8 is kept, with the
/// invalid bytes replaced, rather than treated as unset.
pub(crate) fn env_var(key: &str) -> Option<String> {
    std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: DEFAULT_ENVIRONMENT.to_string(),
            min_level: Level::default(),
            stream: Stream::default(),
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(env_var)
    }

    /// Reads the configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let min_level = match lookup(LEVEL_VAR) {
            Some(value) => value.parse()?,
            None => Level::default(),
        };
        let stream = match lookup(STREAM_VAR) {
            Some(value) => value.parse()?,
            None => Stream::default(),
        };
        Ok(Self {
            environment: environment_from(&lookup),
            min_level,
            stream,
        })
    }

    /// Like [`Config::from_lookup`], but a malformed variable is reported and replaced
    /// by its default instead of failing.
    pub(crate) fn from_lookup_lenient(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::from_lookup(&lookup).unwrap_or_else(|e| {
            crate::error::report(format_args!("{e}; using default logging configuration"));
            Self {
                environment: environment_from(&lookup),
                ..Self::default()
            }
        })
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    pub fn with_min_level(mut self, min_level: Level) -> Self {
        self.min_level = min_level;
        self
    }

    pub fn with_stream(mut self, stream: Stream) -> Self {
        self.stream = stream;
        self
    }
}
