// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::error::Error;
use crate::log_record::LogRecord;
use std::fmt::Debug;

/// A destination for finished log records.
pub trait Logger: Debug + Send + Sync {
    /**
        Submits the log record for output.

        The record arrives fully enriched; the logger only formats and writes it.
    */
    fn finish_log_record(&self, record: LogRecord) -> Result<(), Error>;

    /**
    The application may imminently exit.  Ensure all buffers are flushed and up to date.
    */
    fn flush(&self) -> Result<(), Error>;
}

/*
Boilerplate notes.

# Logger

Clone on Logger doesn't make sense; loggers are shared through Arc instead.
PartialEq/Eq are ambiguous (data equality or the same destination?), so not implemented.
Default is not necessarily sensible since who knows how the logger is constructed.
Send/Sync are required: one logger serves every thread in the process.
*/
