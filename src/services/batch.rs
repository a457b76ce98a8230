//! Batch mutation service
//!
//! Index-set and predicate based removals over a movement file. Every
//! operation validates its input first, so a failed call leaves the file
//! exactly as it was; a successful one leaves the trailer reconciled.

use crate::error::{MovError, MovResult};
use crate::models::{Money, MovementFile};
use crate::selection::{IndexSet, SelectionEngine, SelectionOutcome};

/// Service for batch operations on one loaded file
pub struct BatchService<'a> {
    file: &'a mut MovementFile,
}

/// How many movements a batch operation kept and removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub kept: usize,
    pub removed: usize,
}

impl<'a> BatchService<'a> {
    /// Create a new batch service over `file`
    pub fn new(file: &'a mut MovementFile) -> Self {
        Self { file }
    }

    /// Remove every movement whose index is not in `indices`
    pub fn keep_only(&mut self, indices: &IndexSet) -> MovResult<BatchSummary> {
        self.check_indices(indices)?;
        let removed = self
            .file
            .retain_positions(|position, _| indices.contains(&position));
        Ok(self.summary(removed))
    }

    /// Remove exactly the movements listed in `indices`
    pub fn delete_selected(&mut self, indices: &IndexSet) -> MovResult<BatchSummary> {
        self.check_indices(indices)?;
        let removed = self
            .file
            .retain_positions(|position, _| !indices.contains(&position));
        Ok(self.summary(removed))
    }

    /// Remove every movement from the given acquirer
    ///
    /// The code must be exactly two ASCII digits. No matches is not an error.
    pub fn delete_by_acquirer(&mut self, code: &str) -> MovResult<BatchSummary> {
        let code = code.trim();
        if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MovError::Validation(format!(
                "Acquirer code must be exactly 2 digits, got '{}'",
                code
            )));
        }

        let removed = self
            .file
            .delete_where(|movement| movement.acquirer_code() == code);
        Ok(self.summary(removed))
    }

    /// Keep only a subset of movements summing exactly to `target`
    ///
    /// On [`SelectionOutcome::NoExactCombination`] the file is left
    /// untouched and the summary reports nothing removed.
    pub fn keep_exact_value(
        &mut self,
        engine: &SelectionEngine,
        target: Money,
    ) -> MovResult<(SelectionOutcome, BatchSummary)> {
        let outcome = engine.find_in_file(&*self.file, target);
        let summary = match outcome.selection() {
            Some(selection) => self.keep_only(&selection.indices)?,
            None => self.summary(0),
        };
        Ok((outcome, summary))
    }

    fn check_indices(&self, indices: &IndexSet) -> MovResult<()> {
        let len = self.file.len();
        if let Some(bad) = indices.iter().find(|index| **index >= len) {
            return Err(MovError::Validation(format!(
                "Movement index {} out of range (file has {} movements)",
                bad, len
            )));
        }
        Ok(())
    }

    fn summary(&self, removed: usize) -> BatchSummary {
        BatchSummary {
            kept: self.file.len(),
            removed,
        }
    }
}

/// Parse a comma or whitespace separated list of 0-based indices
pub fn parse_index_set(input: &str) -> MovResult<IndexSet> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<usize>().map_err(|_| {
                MovError::Validation(format!("'{}' is not a valid movement index", part))
            })
        })
        .collect()
}
