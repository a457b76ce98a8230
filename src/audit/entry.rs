//! Audit entry data structures

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Operations recorded in the log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// A file was read and validated
    Load,
    /// A file was written
    Save,
    /// One field of one movement changed
    Edit,
    /// One movement was removed
    Delete,
    DeleteByAcquirer,
    DeleteSelected,
    KeepOnly,
    SelectByValue,
    /// A file failed to load
    ValidationFailed,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Operation::Load => "LOAD",
            Operation::Save => "SAVE",
            Operation::Edit => "EDIT",
            Operation::Delete => "DELETE",
            Operation::DeleteByAcquirer => "DELETE_BY_ACQUIRER",
            Operation::DeleteSelected => "DELETE_SELECTED",
            Operation::KeepOnly => "KEEP_ONLY",
            Operation::SelectByValue => "SELECT_BY_VALUE",
            Operation::ValidationFailed => "VALIDATION_FAILED",
        };
        write!(f, "{}", label)
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Movement file the operation concerns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Human-readable summary
    pub details: String,

    /// Record or field text before the operation (edits and deletions)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,

    /// Field text after an edit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

impl AuditEntry {
    /// Create an entry with a details line only
    pub fn new(operation: Operation, file: Option<&Path>, details: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            file: file.map(|p| p.display().to_string()),
            details: details.into(),
            before: None,
            after: None,
        }
    }

    /// Create an entry for a single field edit
    pub fn edit(
        file: &Path,
        index: usize,
        field: &str,
        before: impl Into<String>,
        after: impl Into<String>,
    ) -> Self {
        Self {
            before: Some(before.into()),
            after: Some(after.into()),
            ..Self::new(
                Operation::Edit,
                Some(file),
                format!("movement {}: {}", index, field),
            )
        }
    }

    /// Create an entry for a single deletion, keeping the removed line
    pub fn delete(file: &Path, index: usize, removed_line: impl Into<String>) -> Self {
        Self {
            before: Some(removed_line.into()),
            ..Self::new(Operation::Delete, Some(file), format!("movement {}", index))
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation
        );

        if let Some(file) = &self.file {
            output.push_str(&format!(" {}", file));
        }
        if !self.details.is_empty() {
            output.push_str(&format!(": {}", self.details));
        }

        match (&self.before, &self.after) {
            (Some(before), Some(after)) => {
                output.push_str(&format!("\n  Changes: {:?} -> {:?}", before, after))
            }
            (Some(before), None) => output.push_str(&format!("\n  Removed: {}", before)),
            _ => {}
        }

        output
    }
}
