// SPDX-License-Identifier: Apache-2.0 OR MIT
// Output sinks: where the worker persists formatted records

use crate::record::LogRecord;
use anyhow::{Context, Result};
use chrono::Utc;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Durable destination for formatted records.
///
/// Touched exclusively by the worker thread, so implementations need no
/// internal locking. A write failure must be absorbed and reported, never
/// propagated as a panic out of the worker loop.
pub trait LogSink: Send {
    /// Persist one record
    fn write_record(&mut self, record: &LogRecord);

    /// Flush any buffered output
    fn flush(&mut self);

    /// Identify the current destination (e.g. the full file path)
    fn destination(&self) -> String;
}

/// Append-only text file sink.
///
/// The file is named `<name>.<timestamp>.log` inside the given directory and
/// carries a one-line header. Each record is written as one line and flushed
/// immediately so the artifact is complete the moment the write returns.
pub struct FileSink {
    file: File,
    path: PathBuf,
}

impl FileSink {
    /// Create the log file. Fails on an unwritable directory so the caller
    /// finds out at construction time, not on the worker thread.
    pub fn new(name: &str, directory: impl AsRef<Path>) -> Result<Self> {
        let stamp = Utc::now().format("%Y%m%d-%H%M%S%.3f");
        let file_name = format!("{name}.{stamp}.log");
        let path = directory.as_ref().join(file_name);

        let mut file = OpenOptions::new()
            .create_new(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;

        writeln!(file, "log file created at {}", Utc::now().to_rfc3339())
            .with_context(|| format!("cannot write header to {}", path.display()))?;

        Ok(Self { file, path })
    }
}

impl LogSink for FileSink {
    fn write_record(&mut self, record: &LogRecord) {
        if let Err(err) = writeln!(self.file, "{}", record.formatted()) {
            report_sink_failure(record, &err);
            return;
        }
        if let Err(err) = self.file.flush() {
            report_sink_failure(record, &err);
        }
    }

    fn flush(&mut self) {
        let _ = self.file.flush();
    }

    fn destination(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fallback reporting channel for sink failures: one JSON object per line on
/// stderr, carrying the record that could not be persisted.
fn report_sink_failure(record: &LogRecord, err: &std::io::Error) {
    let line = serde_json::json!({
        "timestamp": Utc::now().to_rfc3339(),
        "error": err.to_string(),
        "dropped": record.formatted(),
    });
    eprintln!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity::Severity;

    #[test]
    fn test_file_sink_creates_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::new("unit", dir.path()).unwrap();
        let path = PathBuf::from(sink.destination());
        assert!(path.exists());
        let stem = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(stem.starts_with("unit."));
        assert!(stem.ends_with(".log"));
    }

    #[test]
    fn test_records_appear_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FileSink::new("order", dir.path()).unwrap();
        sink.write_record(&LogRecord::new(Severity::Info, "a.rs", 1, "first"));
        sink.write_record(&LogRecord::new(Severity::Info, "a.rs", 2, "second"));
        sink.flush();

        let content = std::fs::read_to_string(sink.destination()).unwrap();
        let first = content.find("first").unwrap();
        let second = content.find("second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_header_written_on_creation() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::new("header", dir.path()).unwrap();
        let content = std::fs::read_to_string(sink.destination()).unwrap();
        assert!(content.contains("log file created at"));
    }

    #[test]
    fn test_unwritable_directory_fails_fast() {
        let result = FileSink::new("nope", "/definitely/not/a/directory");
        assert!(result.is_err());
    }
}
