//! Operation log for movedit
//!
//! Records every load, save and mutation the CLI performs in an
//! append-only log, so an edited settlement file can be traced back to the
//! commands that changed it.
//!
//! # Architecture
//!
//! - `AuditEntry`: one log entry with timestamp, operation, the file it
//!   concerns, a details line, and before/after record text for edits and
//!   deletions.
//! - `AuditLogger`: appends entries to the log file as line-delimited JSON
//!   (JSONL) and reads them back.
//!
//! # Example
//!
//! ```rust,ignore
//! use movedit::audit::{AuditEntry, AuditLogger, Operation};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::new(
//!     Operation::DeleteByAcquirer,
//!     Some(&path),
//!     "acquirer 46: removed 2, kept 1",
//! ))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
