//! Append-only operation log
//!
//! Each entry is written as a single JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{MovError, MovResult};

use super::entry::AuditEntry;

/// Reads and appends JSONL audit entries at a fixed path
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry as a JSON line
    pub fn log(&self, entry: &AuditEntry) -> MovResult<()> {
        self.log_batch(std::slice::from_ref(entry))
    }

    /// Append several entries with a single open and flush
    ///
    /// The parent directory is created if missing.
    pub fn log_batch(&self, entries: &[AuditEntry]) -> MovResult<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let mut file = self.open_for_append()?;
        for entry in entries {
            let json = serde_json::to_string(entry)
                .map_err(|e| MovError::Json(format!("Failed to serialize audit entry: {}", e)))?;
            writeln!(file, "{}", json)
                .map_err(|e| MovError::Io(format!("Failed to write audit entry: {}", e)))?;
        }
        file.flush()
            .map_err(|e| MovError::Io(format!("Failed to flush audit log: {}", e)))?;

        Ok(())
    }

    /// Read every entry, oldest first
    pub fn read_all(&self) -> MovResult<Vec<AuditEntry>> {
        let mut entries = Vec::new();
        for (line_num, line) in self.lines()?.into_iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let entry: AuditEntry = serde_json::from_str(&line).map_err(|e| {
                MovError::Json(format!(
                    "Failed to parse audit entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;
            entries.push(entry);
        }
        Ok(entries)
    }

    /// Read the most recent `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> MovResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    /// Number of non-empty lines in the log
    pub fn entry_count(&self) -> MovResult<usize> {
        Ok(self
            .lines()?
            .iter()
            .filter(|line| !line.trim().is_empty())
            .count())
    }

    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }

    fn lines(&self) -> MovResult<Vec<String>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }
        let file = File::open(&self.log_path)
            .map_err(|e| MovError::Io(format!("Failed to open audit log: {}", e)))?;
        BufReader::new(file)
            .lines()
            .enumerate()
            .map(|(line_num, line)| {
                line.map_err(|e| {
                    MovError::Io(format!(
                        "Failed to read audit log line {}: {}",
                        line_num + 1,
                        e
                    ))
                })
            })
            .collect()
    }

    fn open_for_append(&self) -> MovResult<File> {
        if let Some(parent) = self.log_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    MovError::Io(format!("Failed to create audit log directory: {}", e))
                })?;
            }
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| MovError::Io(format!("Failed to open audit log: {}", e)))
    }
}
