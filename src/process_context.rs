// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-wide metadata attached to every log record.
//!
//! A [`ProcessContext`] is built once at startup and shared by `Arc` between every
//! [`Adapter`](crate::Adapter) that logs on behalf of the process. It never changes
//! afterwards: the environment name, process id and hostname are fixed for the
//! lifetime of the process.
//!
//! ```
//! use contextlog::ProcessContext;
//!
//! let context = ProcessContext::new("staging");
//! assert_eq!(context.env(), "staging");
//! assert_eq!(context.pid(), std::process::id());
//! ```

use crate::config::env_var;
use crate::log_record::keys;
use serde_json::Value;

/// Environment variable naming the deployment environment.
pub const ENVIRONMENT_VAR: &str = "CLOUD_ENVIRONMENT";

/// Environment name used when [`ENVIRONMENT_VAR`] is not set.
pub const DEFAULT_ENVIRONMENT: &str = "local";

/// Immutable metadata describing the running process.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProcessContext {
    env: String,
    pid: u32,
    host: String,
}

impl ProcessContext {
    /// Context for the current process in the given environment.
    pub fn new(env: impl Into<String>) -> Self {
        Self::with_identity(env, std::process::id(), current_hostname())
    }

    /// Context with every field supplied explicitly.
    pub fn with_identity(env: impl Into<String>, pid: u32, host: impl Into<String>) -> Self {
        Self {
            env: env.into(),
            pid,
            host: host.into(),
        }
    }

    /// Context for the current process, reading the environment name from
    /// `CLOUD_ENVIRONMENT` (`"local"` when unset). The same name
    /// [`Config::from_env`](crate::Config::from_env) resolves.
    pub fn from_env() -> Self {
        Self::new(environment_from(env_var))
    }

    pub fn env(&self) -> &str {
        &self.env
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// The fields this context contributes to a record, in output order.
    pub(crate) fn fields(&self) -> [(&'static str, Value); 3] {
        [
            (keys::ENV, Value::from(self.env.as_str())),
            (keys::PID, Value::from(self.pid)),
            (keys::HOST, Value::from(self.host.as_str())),
        ]
    }
}

impl Default for ProcessContext {
    fn default() -> Self {
        Self::new(DEFAULT_ENVIRONMENT)
    }
}

/// Resolves the environment name through `lookup`, falling back to [`DEFAULT_ENVIRONMENT`].
pub(crate) fn environment_from(lookup: impl Fn(&str) -> Option<String>) -> String {
    lookup(ENVIRONMENT_VAR).unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string())
}

fn current_hostname() -> String {
    gethostname::gethostname().to_string_lossy().into_owned()
}
