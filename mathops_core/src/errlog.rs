//! Append-only error-event log.
//!
//! Failed operations are appended to a JSONL (JSON Lines) file with
//! file locking, so a second process sharing the log location cannot
//! interleave partial lines. Recording is fire-and-forget: a sink
//! failure is downgraded to a warning and never reaches the caller.

use crate::{Error, ErrorKind, Result};
use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// One persisted error event
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub at: DateTime<Utc>,
    pub kind: ErrorKind,
    pub message: String,
    pub context: String,
}

impl ErrorRecord {
    /// Build a record from a classified error.
    ///
    /// `message` is the error's display form; `context` is its debug
    /// rendering, the closest thing to a trace the error carries.
    pub fn new(error: &Error) -> Self {
        Self {
            at: Utc::now(),
            kind: error.kind(),
            message: error.to_string(),
            context: format!("{:?}", error),
        }
    }
}

/// Error sink trait for recording failed operations.
///
/// Implementations must swallow their own failures and must not block
/// indefinitely.
pub trait ErrorSink {
    fn record(&mut self, record: &ErrorRecord);
}

/// JSONL-based error sink with file locking
pub struct JsonlSink {
    path: PathBuf,
}

impl JsonlSink {
    /// Create a new JSONL sink for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Ensure the parent directory exists
    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    fn try_append(&mut self, record: &ErrorRecord) -> Result<()> {
        self.ensure_parent_dir()?;

        // Open file for appending
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        // Acquire exclusive lock
        file.lock_exclusive()?;

        // Write record as JSON line
        let mut writer = std::io::BufWriter::new(&file);
        let line = serde_json::to_string(record)?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        // Lock is automatically released when file is dropped
        file.unlock()?;
        Ok(())
    }
}

impl ErrorSink for JsonlSink {
    fn record(&mut self, record: &ErrorRecord) {
        match self.try_append(record) {
            Ok(()) => tracing::debug!("Recorded {} error event", record.kind),
            // The sink never fails back into the calculator loop
            Err(e) => tracing::warn!("Failed to record {} error event: {}", record.kind, e),
        }
    }
}

/// Sink that discards every record
pub struct NullSink;

impl ErrorSink for NullSink {
    fn record(&mut self, _record: &ErrorRecord) {}
}

/// Read all error records from a log file.
///
/// Unparseable lines (e.g. a partial write from a crashed process) are
/// skipped with a warning rather than failing the whole read.
pub fn read_records(path: &Path) -> Result<Vec<ErrorRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    // Acquire shared lock for reading
    file.lock_shared()?;

    let reader = BufReader::new(&file);
    let mut records = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<ErrorRecord>(&line) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!("Failed to parse error record at line {}: {}", line_num + 1, e);
            }
        }
    }

    file.unlock()?;
    Ok(records)
}
