//! Append-only command traffic log
//!
//! One `[<ISO-8601>] <message>` record per line, written in a single call
//! so concurrent invocations never interleave partial lines. The sink is
//! write-only; nothing in the pipeline reads it back.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};

use chrono::{SecondsFormat, Utc};

use crate::core::error::Result;

/// Durable append-only log shared by concurrent invocations
#[derive(Clone)]
pub struct CommandLog {
    file: Arc<Mutex<File>>,
}

impl CommandLog {
    /// Open (creating if needed) the log file at `path`
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Arc::new(Mutex::new(file)),
        })
    }

    /// Append one timestamped record
    ///
    /// Logging is best effort; a failed write is reported through tracing
    /// and never fails the command being logged.
    pub fn append(&self, message: &str) {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let record = format!("[{timestamp}] {message}\n");
        match self.file.lock() {
            Ok(mut file) => {
                if let Err(err) = file.write_all(record.as_bytes()) {
                    tracing::warn!(error = %err, "failed to append to command log");
                }
            }
            Err(_) => tracing::warn!("command log lock poisoned, dropping record"),
        }
    }
}
