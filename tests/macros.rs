// SPDX-License-Identifier: MIT OR Apache-2.0

//! The format-string macros, both against an explicit adapter and the root.

use contextlog::{Adapter, InMemoryLogger, Level, ProcessContext, root};
use serde::Serialize;
use std::sync::{Arc, Mutex, OnceLock};

static TEST_LOGGER_GUARD: Mutex<()> = Mutex::new(());
static ROOT_LOGGER: OnceLock<Arc<InMemoryLogger>> = OnceLock::new();

fn memory_adapter() -> (Adapter, Arc<InMemoryLogger>) {
    let logger = Arc::new(InMemoryLogger::new());
    let adapter = Adapter::new(logger.clone(), Arc::new(ProcessContext::new("local")));
    (adapter, logger)
}

fn root_logger() -> &'static InMemoryLogger {
    let logger = ROOT_LOGGER.get_or_init(|| {
        let (adapter, logger) = memory_adapter();
        root::install(adapter).unwrap();
        logger
    });
    logger.drain_logs();
    logger
}

#[test]
fn formats_message_and_collects_extras() {
    let (adapter, logger) = memory_adapter();
    let user = "alice";

    contextlog::info!(adapter; "{} has {} items", user, 3; user = user, count = 3);

    let record = &logger.drain_records()[0];
    assert_eq!(record["message"], "alice has 3 items");
    assert_eq!(record["levelname"], "INFO");
    assert_eq!(record["user"], "alice");
    assert_eq!(record["count"], 3);
}

#[test]
fn records_invocation_line() {
    let (adapter, logger) = memory_adapter();

    let line = line!();
    contextlog::warning!(&adapter; "watch out");

    let record = &logger.drain_records()[0];
    assert_eq!(record["caller"], format!("macros.rs:{}", line + 1));
    assert_eq!(record["levelname"], "WARNING");
}

#[test]
fn serializes_structured_extras() {
    #[derive(Serialize)]
    struct Order {
        id: u64,
        total_cents: u64,
    }
    let (adapter, logger) = memory_adapter();
    let order = Order {
        id: 17,
        total_cents: 4999,
    };

    contextlog::debug!(adapter; "order placed"; order = order, paid = true,);

    let record = &logger.drain_records()[0];
    assert_eq!(record["order"]["id"], 17);
    assert_eq!(record["order"]["total_cents"], 4999);
    assert_eq!(record["paid"], true);
}

#[test]
fn every_level_macro() {
    let (adapter, logger) = memory_adapter();

    contextlog::debug!(adapter; "d");
    contextlog::info!(adapter; "i");
    contextlog::warning!(adapter; "w");
    contextlog::error!(adapter; "e");
    contextlog::critical!(adapter; "c");
    contextlog::log!(adapter; Level::Info, "l {}", 1);

    let names: Vec<String> = logger
        .drain_records()
        .iter()
        .map(|r| r["levelname"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL", "INFO"]);
}

#[test]
fn exception_macro_attaches_error() {
    let (adapter, logger) = memory_adapter();
    let err = std::io::Error::other("socket closed");

    contextlog::exception!(adapter; err, "send failed after {} retries", 3; peer = "10.0.0.7");

    let record = &logger.drain_records()[0];
    assert_eq!(record["levelname"], "ERROR");
    assert_eq!(record["message"], "send failed after 3 retries");
    assert_eq!(record["exc_info"], "socket closed");
    assert_eq!(record["peer"], "10.0.0.7");
}

#[test]
fn disabled_levels_skip_argument_evaluation() {
    let logger = Arc::new(InMemoryLogger::new());
    let adapter = Adapter::new(logger.clone(), Arc::new(ProcessContext::new("local")))
        .with_min_level(Level::Error);
    let mut evaluated = false;
    let mut expensive = || {
        evaluated = true;
        "value"
    };

    contextlog::info!(adapter; "skipped {}", expensive());

    assert!(!evaluated);
    assert!(logger.is_empty());
}

#[test]
fn root_forms_log_to_the_root_adapter() {
    let _guard = TEST_LOGGER_GUARD.lock().unwrap();
    let logger = root_logger();
    let err = std::io::Error::other("boom");

    contextlog::info!("root {}", "info"; k = 1);
    contextlog::log!(Level::Critical, "root log");
    contextlog::exception!(err, "root exception");

    let records = logger.drain_records();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["message"], "root info");
    assert_eq!(records[0]["k"], 1);
    assert_eq!(records[1]["levelname"], "CRITICAL");
    assert_eq!(records[2]["exc_info"], "boom");
}
