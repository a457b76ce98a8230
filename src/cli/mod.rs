//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the movement file aggregate and services.
//! Every command that reads or writes a file records it in the operation
//! log; a log that cannot be written produces a warning, never a failure.

pub mod batch;
pub mod file;
pub mod log;
pub mod record;

pub use batch::{handle_batch_command, BatchCommands};
pub use file::{handle_show_command, handle_validate_command, ShowArgs};
pub use log::handle_log_command;
pub use record::{handle_record_command, RecordCommands};

use std::path::{Path, PathBuf};

use crate::audit::{AuditEntry, AuditLogger, Operation};
use crate::config::{MoveditPaths, Settings};
use crate::error::MovResult;
use crate::models::MovementFile;
use crate::storage::{read_movement_file, write_movement_file};

/// Settings and the operation log shared by every command
pub struct CliContext {
    pub settings: Settings,
    logger: AuditLogger,
}

impl CliContext {
    pub fn new(paths: &MoveditPaths, settings: Settings) -> Self {
        Self {
            settings,
            logger: AuditLogger::new(paths.audit_log()),
        }
    }

    pub fn logger(&self) -> &AuditLogger {
        &self.logger
    }

    pub fn currency(&self) -> &str {
        &self.settings.currency_symbol
    }

    /// Append an entry, warning on stderr if the log cannot be written
    pub fn audit(&self, entry: AuditEntry) {
        if let Err(e) = self.logger.log(&entry) {
            eprintln!("Warning: could not write operation log: {}", e);
        }
    }

    /// Load a movement file, logging the load or the validation failure
    pub fn load(&self, path: &Path) -> MovResult<MovementFile> {
        match read_movement_file(path) {
            Ok(file) => {
                self.audit(AuditEntry::new(
                    Operation::Load,
                    Some(path),
                    format!("{} movements, total {}", file.len(), file.total_value()),
                ));
                Ok(file)
            }
            Err(e) => {
                self.audit(AuditEntry::new(
                    Operation::ValidationFailed,
                    Some(path),
                    e.to_string(),
                ));
                Err(e)
            }
        }
    }

    /// Write `file` to `output`, or back over `source` when no output is given
    ///
    /// `change` describes the mutation and is logged, followed by the save,
    /// only once the write has succeeded.
    pub fn commit(
        &self,
        source: &Path,
        output: Option<&Path>,
        file: &MovementFile,
        change: AuditEntry,
    ) -> MovResult<PathBuf> {
        let target = output.unwrap_or(source).to_path_buf();
        write_movement_file(&target, file)?;
        self.audit(change);
        self.audit(AuditEntry::new(
            Operation::Save,
            Some(target.as_path()),
            format!("{} movements, total {}", file.len(), file.total_value()),
        ));
        println!("Saved {}", target.display());
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = "\
H20250616UN20250616        0000000000000000000000000000000000000000000000000000000000000000
M462025061046607900000098240000020000000000001710020250616335525646000050620030001730000000
T00001 000017100999999999999999999999999999999999999999999999999999999999999999999999999999
";

    fn context(temp: &TempDir) -> CliContext {
        let paths = MoveditPaths::with_base_dir(temp.path().join("config"));
        CliContext::new(&paths, Settings::default())
    }

    #[test]
    fn test_load_and_commit_are_logged() {
        let temp = TempDir::new().unwrap();
        let ctx = context(&temp);
        let source = temp.path().join("movs.txt");
        std::fs::write(&source, SAMPLE).unwrap();

        let file = ctx.load(&source).unwrap();
        let output = temp.path().join("out.txt");
        let change = AuditEntry::new(Operation::KeepOnly, Some(source.as_path()), "kept {0}");
        ctx.commit(&source, Some(output.as_path()), &file, change).unwrap();

        let entries = ctx.logger().read_all().unwrap();
        let operations: Vec<Operation> = entries.iter().map(|e| e.operation).collect();
        assert_eq!(
            operations,
            vec![Operation::Load, Operation::KeepOnly, Operation::Save]
        );
        assert_eq!(std::fs::read_to_string(output).unwrap(), SAMPLE);
    }

    #[test]
    fn test_failed_commit_logs_no_change() {
        let temp = TempDir::new().unwrap();
        let ctx = context(&temp);
        let source = temp.path().join("movs.txt");
        std::fs::write(&source, SAMPLE).unwrap();
        let mut file = ctx.load(&source).unwrap();
        file.delete(0).unwrap();

        // The output's parent is a regular file, so the write fails
        let blocker = temp.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let output = blocker.join("out.txt");
        let change = AuditEntry::delete(&source, 0, "M46...");
        assert!(ctx
            .commit(&source, Some(output.as_path()), &file, change)
            .is_err());

        let entries = ctx.logger().read_all().unwrap();
        let operations: Vec<Operation> = entries.iter().map(|e| e.operation).collect();
        assert_eq!(operations, vec![Operation::Load]);
        assert_eq!(std::fs::read_to_string(&source).unwrap(), SAMPLE);
    }

    #[test]
    fn test_failed_load_is_logged() {
        let temp = TempDir::new().unwrap();
        let ctx = context(&temp);
        let source = temp.path().join("bad.txt");
        std::fs::write(&source, SAMPLE.replace("T00001", "T00002")).unwrap();

        assert!(ctx.load(&source).is_err());
        let entries = ctx.logger().read_all().unwrap();
        assert_eq!(entries[0].operation, Operation::ValidationFailed);
    }

    #[test]
    fn test_unwritable_log_does_not_fail_load() {
        let temp = TempDir::new().unwrap();
        // A regular file where the log directory should be
        let blocker = temp.path().join("config");
        std::fs::write(&blocker, "").unwrap();
        let ctx = context(&temp);
        let source = temp.path().join("movs.txt");
        std::fs::write(&source, SAMPLE).unwrap();

        assert!(ctx.load(&source).is_ok());
    }
}
