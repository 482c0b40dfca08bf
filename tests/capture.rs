// SPDX-License-Identifier: MIT OR Apache-2.0

//! Records from the `log` facade come out through the root adapter.

use contextlog::{Adapter, Error, InMemoryLogger, Level, ProcessContext, capture, root};
use std::sync::Arc;

#[test]
fn log_facade_records_are_captured() {
    let logger = Arc::new(InMemoryLogger::new());
    let adapter = Adapter::new(logger.clone(), Arc::new(ProcessContext::new("prod")))
        .with_min_level(Level::Info);
    root::install(adapter).unwrap();
    capture::init_root().unwrap();

    let line = line!();
    log::warn!(target: "dependency", "pool exhausted: {} waiting", 4);
    log::debug!("below the minimum level");

    let records = logger.drain_records();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record["message"], "pool exhausted: 4 waiting");
    assert_eq!(record["levelname"], "WARNING");
    assert_eq!(record["target"], "dependency");
    assert_eq!(record["env"], "prod");
    assert_eq!(record["caller"], format!("capture.rs:{}", line + 1));

    assert!(matches!(capture::init_root(), Err(Error::Capture(_))));
}
