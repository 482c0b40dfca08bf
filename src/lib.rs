//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# contextlog

contextlog writes structured logs as JSON, one object per line, and attaches the
context you always end up wanting when you read them later.

# The problem

A log line that says `connection refused` is not much use when it arrives from one
of forty machines. Which environment? Which process? Which host? Which line of code?
Passing that around by hand at every call site is tedious, and it gets forgotten.

# What contextlog adds

Every record carries:

| Field       | Source                                                      |
|-------------|-------------------------------------------------------------|
| `message`   | the formatted message                                       |
| `levelname` | `DEBUG`, `INFO`, `WARNING`, `ERROR` or `CRITICAL`           |
| `env`       | the `CLOUD_ENVIRONMENT` environment variable, or `local`    |
| `pid`       | the process id                                              |
| `host`      | the hostname                                                |
| `timestamp` | wall-clock time of the call, RFC 3339 with microseconds     |
| `caller`    | `<file>:<line>` of the call site                            |
| `exc_info`  | for [`Adapter::exception`], the error and its sources       |

plus any extra fields supplied with the call.

```text
{"message":"hello","levelname":"INFO","env":"prod","pid":4242,"host":"web-3","timestamp":"2026-10-16T09:12:44.081233+00:00","caller":"main.rs:12","user":"alice"}
```

# The API

The [`Adapter`] does the work: it wraps a [`Logger`] and enriches every record it is
handed. Construct one at startup and pass it by reference, or install one as the
process-wide root and use the free functions in [`root`]:

```rust
use contextlog::{Config, LogOptions, root};

root::init(Config::from_env().unwrap()).unwrap();
root::info("hello", LogOptions::new().extra("user", "alice"));
```

The macros take a format string and `key = value` extras:

```rust
# let user = "alice";
contextlog::info!("{} logged in", user; user = user, method = "password");
```

The caller's location is captured at compile time with `#[track_caller]`, so
wrapping an adapter in your own helper only needs `#[track_caller]` on the helper for
`caller` to keep pointing at the real call site.

# Libraries using `log`

Records from the [`log`](https://crates.io/crates/log) facade can be routed through
an adapter with [`capture::init`], so dependencies' logs come out in the same format.

# Multithreading

Adapters are `Send + Sync` and cheap to clone. Sinks serialize writes, one whole line
per lock, so concurrent records never interleave.
*/

mod adapter;
pub mod capture;
mod config;
mod error;
mod formatter;
mod inmemory_logger;
mod level;
mod log_record;
mod logger;
mod macros;
mod process_context;
pub mod root;
mod stream_logger;

pub use adapter::Adapter;
pub use config::{Config, LEVEL_VAR, STREAM_VAR};
pub use error::Error;
pub use formatter::JsonFormatter;
pub use inmemory_logger::InMemoryLogger;
pub use level::Level;
pub use log_record::{Caller, Extra, LogOptions, LogRecord};
pub use logger::Logger;
pub use process_context::{DEFAULT_ENVIRONMENT, ENVIRONMENT_VAR, ProcessContext};
pub use stream_logger::{Stream, StreamLogger};
