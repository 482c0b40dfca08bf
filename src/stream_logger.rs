// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::error::Error;
use crate::formatter::JsonFormatter;
use crate::log_record::LogRecord;
use crate::logger::Logger;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::str::FromStr;
use std::sync::{Mutex, PoisonError};

/// Standard stream a [`StreamLogger`] can be pointed at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stream {
    #[default]
    Stderr,
    Stdout,
}

impl FromStr for Stream {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stderr" => Ok(Stream::Stderr),
            "stdout" => Ok(Stream::Stdout),
            _ => Err(Error::InvalidStream(s.to_string())),
        }
    }
}

/**
A logger that writes one JSON line per record to a stream.

Each record is formatted before the writer lock is taken and written with a single
`write_all`, so lines from concurrent threads never interleave.
 */
pub struct StreamLogger {
    writer: Mutex<Box<dyn Write + Send>>,
    formatter: JsonFormatter,
}

impl std::fmt::Debug for StreamLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamLogger")
            .field("formatter", &self.formatter)
            .finish_non_exhaustive()
    }
}

impl StreamLogger {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            formatter: JsonFormatter::new(),
        }
    }

    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }

    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }

    pub fn for_stream(stream: Stream) -> Self {
        match stream {
            Stream::Stderr => Self::stderr(),
            Stream::Stdout => Self::stdout(),
        }
    }
}

impl Logger for StreamLogger {
    fn finish_log_record(&self, record: LogRecord) -> Result<(), Error> {
        let mut line = self.formatter.format(&record)?;
        line.push('\n');
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(line.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn flush(&self) -> Result<(), Error> {
        self.writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()?;
        Ok(())
    }
}
