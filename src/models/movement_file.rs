//! Movement file aggregate
//!
//! Owns the header, the ordered movements and the trailer of one file and
//! keeps the trailer reconciled: after load and after every mutation the
//! trailer declares exactly the number of movements and their exact total.

use std::io::{BufRead, Write};

use super::field::RECORD_WIDTH;
use super::filter::MovementFilter;
use super::header::HeaderRecord;
use super::money::Money;
use super::movement::{MovementField, MovementRecord};
use super::record::RecordKind;
use super::trailer::{check_totals, TrailerRecord};
use crate::error::{MovError, MovResult};

/// A loaded (or synthesized) settlement movement file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementFile {
    header: HeaderRecord,
    movements: Vec<MovementRecord>,
    trailer: TrailerRecord,
}

impl MovementFile {
    /// Create an empty file with the given header and a zeroed trailer
    pub fn new(header: HeaderRecord) -> Self {
        Self {
            header,
            movements: Vec::new(),
            trailer: TrailerRecord::empty(),
        }
    }

    /// Read and validate a whole file
    ///
    /// Trailing `\r` is dropped from each line so CRLF files load too. A
    /// line that is not valid UTF-8 is a format error for that line.
    pub fn load<R: BufRead>(reader: R) -> MovResult<Self> {
        let mut lines = Vec::new();
        for (i, raw) in reader.split(b'\n').enumerate() {
            let mut raw = raw?;
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }
            let line = String::from_utf8(raw).map_err(|_| {
                MovError::Format("contains bytes that are not valid UTF-8 text".into())
                    .at_line(i + 1)
            })?;
            lines.push(line);
        }
        Self::from_lines(&lines)
    }

    /// Validate and decode a complete list of lines
    ///
    /// Nothing is kept unless every structural and reconciliation check
    /// passes.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> MovResult<Self> {
        if lines.is_empty() {
            return Err(MovError::Validation(
                "File is empty; expected a Header, movements and a Trailer".into(),
            ));
        }

        for (i, line) in lines.iter().enumerate() {
            let len = line.as_ref().chars().count();
            if len != RECORD_WIDTH {
                return Err(MovError::Validation(format!(
                    "Line {} has {} characters, expected {}",
                    i + 1,
                    len,
                    RECORD_WIDTH
                )));
            }
        }

        let first = lines[0].as_ref();
        if RecordKind::of_line(first) != Some(RecordKind::Header) {
            return Err(MovError::Validation(format!(
                "First record must be a {}",
                RecordKind::Header
            )));
        }

        let last_index = lines.len() - 1;
        let last = lines[last_index].as_ref();
        if last_index == 0 || RecordKind::of_line(last) != Some(RecordKind::Trailer) {
            return Err(MovError::Validation(format!(
                "Last record must be a {}",
                RecordKind::Trailer
            )));
        }

        let header = HeaderRecord::decode(first).map_err(|e| e.at_line(1))?;

        let mut movements = Vec::with_capacity(last_index.saturating_sub(1));
        for (i, line) in lines[1..last_index].iter().enumerate() {
            let line_number = i + 2;
            let line = line.as_ref();
            if RecordKind::of_line(line) != Some(RecordKind::Movement) {
                return Err(MovError::Validation(format!(
                    "Line {} must be a {} record",
                    line_number,
                    RecordKind::Movement
                )));
            }
            movements.push(MovementRecord::decode(line).map_err(|e| e.at_line(line_number))?);
        }

        let trailer = TrailerRecord::decode(last).map_err(|e| e.at_line(last_index + 1))?;

        if trailer.record_count() != movements.len() {
            return Err(MovError::Validation(format!(
                "Trailer declares {} movements but the file has {}",
                trailer.record_count(),
                movements.len()
            )));
        }

        let total = exact_total(&movements);
        if total != Some(trailer.total_value()) {
            return Err(MovError::Validation(format!(
                "Trailer declares a total of {} but the movements sum to {}",
                trailer.total_value(),
                total.map_or_else(|| "more than fits in cents".to_string(), |t| t.to_string())
            )));
        }

        Ok(Self {
            header,
            movements,
            trailer,
        })
    }

    pub fn header(&self) -> &HeaderRecord {
        &self.header
    }

    pub fn trailer(&self) -> &TrailerRecord {
        &self.trailer
    }

    pub fn movements(&self) -> &[MovementRecord] {
        &self.movements
    }

    /// Movement at `index`, or an index error
    pub fn movement(&self, index: usize) -> MovResult<&MovementRecord> {
        self.movements.get(index).ok_or(MovError::IndexOutOfRange {
            index,
            len: self.movements.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.movements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movements.is_empty()
    }

    /// Sum of all movement values
    pub fn total_value(&self) -> Money {
        self.movements.iter().map(MovementRecord::value).sum()
    }

    /// Whether the trailer agrees with the movements
    pub fn is_reconciled(&self) -> bool {
        self.trailer.record_count() == self.movements.len()
            && self.trailer.total_value() == self.total_value()
    }

    /// Append a movement at the end of the file
    pub fn push(&mut self, movement: MovementRecord) -> MovResult<()> {
        let total = self
            .total_value()
            .checked_add(movement.value())
            .ok_or_else(|| MovError::Format("Total value overflow".into()))?;
        check_totals(self.movements.len() + 1, total)?;

        self.movements.push(movement);
        self.recalculate_trailer();
        Ok(())
    }

    /// Rewrite the trailer's count and total from the current movements
    pub fn recalculate_trailer(&mut self) {
        let count = self.movements.len();
        let total = self.total_value();
        self.trailer.set_totals(count, total);
    }

    /// Replace one field of one movement from user text
    ///
    /// Returns the field's previous display text. The input is validated,
    /// including the effect on the trailer total, before anything changes.
    pub fn edit(&mut self, index: usize, field: MovementField, new_value: &str) -> MovResult<String> {
        let current = self.movement(index)?;
        let previous = current.field_text(field);
        let updated = current.with_field(field, new_value)?;

        if field == MovementField::SaleValue {
            let total = self.total_value() - current.value() + updated.value();
            check_totals(self.movements.len(), total)?;
        }

        self.movements[index] = updated;
        self.recalculate_trailer();
        Ok(previous)
    }

    /// Remove the movement at `index`, returning it
    pub fn delete(&mut self, index: usize) -> MovResult<MovementRecord> {
        if index >= self.movements.len() {
            return Err(MovError::IndexOutOfRange {
                index,
                len: self.movements.len(),
            });
        }
        let removed = self.movements.remove(index);
        self.recalculate_trailer();
        Ok(removed)
    }

    /// Remove every movement matching `predicate`, returning how many went
    pub fn delete_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&MovementRecord) -> bool,
    {
        self.retain_positions(|_, movement| !predicate(movement))
    }

    /// Keep only the movements for which `keep(index, movement)` holds
    ///
    /// Indices are positions before the call. Relative order is preserved.
    /// Returns the number of removed movements.
    pub fn retain_positions<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(usize, &MovementRecord) -> bool,
    {
        let before = self.movements.len();
        let mut position = 0;
        self.movements.retain(|movement| {
            let kept = keep(position, movement);
            position += 1;
            kept
        });
        self.recalculate_trailer();
        before - self.movements.len()
    }

    /// Indices of movements matching a filter, in file order
    pub fn filter(&self, filter: &MovementFilter) -> Vec<usize> {
        self.movements
            .iter()
            .enumerate()
            .filter(|(_, movement)| filter.matches(movement))
            .map(|(index, _)| index)
            .collect()
    }

    /// `(index, value)` pairs in file order, the selection engine's input
    pub fn value_candidates(&self) -> Vec<(usize, Money)> {
        self.movements
            .iter()
            .enumerate()
            .map(|(index, movement)| (index, movement.value()))
            .collect()
    }

    /// Header line, each movement line in order, trailer line
    pub fn serialize(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.movements.len() + 2);
        lines.push(self.header.encode());
        lines.extend(self.movements.iter().map(MovementRecord::encode));
        lines.push(self.trailer.encode());
        lines
    }

    /// Write the serialized file, one newline-terminated line per record
    pub fn write_to<W: Write>(&self, mut writer: W) -> MovResult<()> {
        for line in self.serialize() {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()?;
        Ok(())
    }
}

fn exact_total(movements: &[MovementRecord]) -> Option<Money> {
    movements
        .iter()
        .try_fold(Money::zero(), |acc, m| acc.checked_add(m.value()))
}
