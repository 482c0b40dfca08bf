// SPDX-License-Identifier: MIT OR Apache-2.0

//! Single-line JSON rendering of log records.

use crate::error::Error;
use crate::log_record::{LogRecord, keys};
use serde_json::{Map, Value};

/**
Formats a [`LogRecord`] as one JSON object on one line.

Output keys, in order: `message`, `levelname`, the record's extra fields, then
`exc_info` when the record carries exception information. An extra field named
after one of the formatter's own keys is written as `extra.<key>` rather than
replacing it (with a numeric suffix if the record already has `extra.<key>`).

```
use contextlog::{JsonFormatter, Level, LogOptions, LogRecord};

let record = LogRecord::new(Level::Warning, "disk almost full", LogOptions::new().extra("free_mb", 12));
let line = JsonFormatter::new().format(&record).unwrap();
assert_eq!(line, r#"{"message":"disk almost full","levelname":"WARNING","free_mb":12}"#);
```
*/
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct JsonFormatter {}

impl JsonFormatter {
    pub const fn new() -> Self {
        Self {}
    }

    /// Builds the JSON object for `record` without serializing it.
    pub fn to_value(&self, record: &LogRecord) -> Value {
        let mut object = Map::with_capacity(record.extra().len() + 3);
        object.insert(keys::MESSAGE.to_string(), Value::from(record.message()));
        object.insert(
            keys::LEVELNAME.to_string(),
            Value::from(record.level().name()),
        );
        for (key, value) in record.extra() {
            let key = match key.as_str() {
                keys::MESSAGE | keys::LEVELNAME | keys::EXC_INFO => keys::shadowed(key, |name| {
                    record.extra().contains_key(name) || object.contains_key(name)
                }),
                _ => key.clone(),
            };
            object.insert(key, value.clone());
        }
        if let Some(exc_info) = record.exc_info() {
            object.insert(keys::EXC_INFO.to_string(), Value::from(exc_info));
        }
        Value::Object(object)
    }

    /// Renders `record` as a single line of JSON, without a trailing newline.
    pub fn format(&self, record: &LogRecord) -> Result<String, Error> {
        Ok(serde_json::to_string(&self.to_value(record))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Level, LogOptions};

    fn parse(line: &str) -> Value {
        serde_json::from_str(line).unwrap()
    }

    #[test]
    fn includes_message_and_levelname() {
        let record = LogRecord::new(Level::Info, "hello", LogOptions::new());
        let json = parse(&JsonFormatter::new().format(&record).unwrap());
        assert_eq!(json["message"], "hello");
        assert_eq!(json["levelname"], "INFO");
        assert!(json.get("exc_info").is_none());
    }

    #[test]
    fn output_is_a_single_line() {
        let record = LogRecord::new(
            Level::Error,
            "first line\nsecond line",
            LogOptions::new().extra("note", "a\nb"),
        );
        let line = JsonFormatter::new().format(&record).unwrap();
        assert!(!line.contains('\n'));
        assert_eq!(parse(&line)["message"], "first line\nsecond line");
    }

    #[test]
    fn extras_follow_fixed_keys_in_order() {
        let options = LogOptions::new().extra("user", "alice").extra("count", 2);
        let record = LogRecord::new(Level::Debug, "m", options);
        let line = JsonFormatter::new().format(&record).unwrap();
        assert_eq!(
            line,
            r#"{"message":"m","levelname":"DEBUG","user":"alice","count":2}"#
        );
    }

    #[test]
    fn exc_info_is_written_last() {
        let err = std::io::Error::other("boom");
        let options = LogOptions::new().extra("path", "/tmp/x").exc_info(&err);
        let record = LogRecord::new(Level::Error, "write failed", options);
        let line = JsonFormatter::new().format(&record).unwrap();
        assert!(line.ends_with(r#""exc_info":"boom"}"#), "{line}");
    }

    #[test]
    fn extras_cannot_replace_formatter_keys() {
        let options = LogOptions::new()
            .extra("message", "spoofed")
            .extra("levelname", "CRITICAL");
        let record = LogRecord::new(Level::Info, "real", options);
        let json = JsonFormatter::new().to_value(&record);
        assert_eq!(json["message"], "real");
        assert_eq!(json["levelname"], "INFO");
        assert_eq!(json["extra.message"], "spoofed");
        assert_eq!(json["extra.levelname"], "CRITICAL");
    }

    #[test]
    fn moved_formatter_keys_keep_existing_extras() {
        let options = LogOptions::new()
            .extra("message", "spoofed")
            .extra("extra.message", "literal");
        let record = LogRecord::new(Level::Info, "real", options);
        let json = JsonFormatter::new().to_value(&record);
        assert_eq!(json["message"], "real");
        assert_eq!(json["extra.message"], "literal");
        assert_eq!(json["extra.message.1"], "spoofed");
    }
}
