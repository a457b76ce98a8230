//! Trailer record
//!
//! The last line of every movement file, declaring how many movements the
//! file holds and their total value in cents.

use serde::Serialize;

use super::field::{check_line, Field};
use super::money::Money;
use crate::error::{MovError, MovResult};

const RECORD_COUNT: Field = Field::new("record count", 1, 5);
const SEPARATOR: Field = Field::new("separator", 6, 1);
const TOTAL_VALUE: Field = Field::new("total value", 7, 9);
const FILLER: Field = Field::new("filler", 16, 75);

/// The 'T' record closing a movement file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrailerRecord {
    record_count: u32,
    separator: String,
    total_value: Money,
    filler: String,
}

impl TrailerRecord {
    pub const TAG: char = 'T';

    /// Build a trailer declaring `count` movements worth `total`
    pub fn new(record_count: usize, total_value: Money) -> MovResult<Self> {
        check_totals(record_count, total_value)?;
        Ok(Self {
            record_count: record_count as u32,
            separator: " ".into(),
            total_value,
            filler: "9".repeat(FILLER.width),
        })
    }

    /// Trailer of a file with no movements
    pub fn empty() -> Self {
        Self {
            record_count: 0,
            separator: " ".into(),
            total_value: Money::zero(),
            filler: "9".repeat(FILLER.width),
        }
    }

    /// Decode a trailer line
    pub fn decode(line: &str) -> MovResult<Self> {
        check_line(line, Self::TAG, "Trailer")?;
        Ok(Self {
            record_count: RECORD_COUNT.number(line)? as u32,
            separator: SEPARATOR.slice(line).to_string(),
            total_value: Money::from_cents(TOTAL_VALUE.number(line)? as i64),
            filler: FILLER.slice(line).to_string(),
        })
    }

    /// Encode back into a 91-character line
    pub fn encode(&self) -> String {
        format!(
            "{}{:05}{}{:09}{}",
            Self::TAG,
            self.record_count,
            self.separator,
            self.total_value.cents(),
            self.filler
        )
    }

    pub fn record_count(&self) -> usize {
        self.record_count as usize
    }

    pub fn total_value(&self) -> Money {
        self.total_value
    }

    /// Largest number of movements a trailer can declare
    pub fn max_record_count() -> usize {
        RECORD_COUNT.max_number() as usize
    }

    /// Largest total a trailer can declare
    pub fn max_total_value() -> Money {
        Money::from_cents(TOTAL_VALUE.max_number() as i64)
    }

    /// Overwrite the declared totals
    ///
    /// Callers guarantee both values fit (see [`check_totals`]); the
    /// movement file checks before every change that could grow them.
    pub(crate) fn set_totals(&mut self, record_count: usize, total_value: Money) {
        debug_assert!(check_totals(record_count, total_value).is_ok());
        self.record_count = record_count as u32;
        self.total_value = total_value;
    }
}

/// Check that a count and total can be represented in a trailer
pub fn check_totals(record_count: usize, total_value: Money) -> MovResult<()> {
    if record_count > TrailerRecord::max_record_count() {
        return Err(MovError::field(
            RECORD_COUNT.name,
            format!(
                "{} movements do not fit in {} digits",
                record_count, RECORD_COUNT.width
            ),
        ));
    }
    if total_value.is_negative() || total_value > TrailerRecord::max_total_value() {
        return Err(MovError::field(
            TOTAL_VALUE.name,
            format!(
                "{} cents do not fit in {} digits",
                total_value.cents(),
                TOTAL_VALUE.width
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::field::RECORD_WIDTH;

    const LINE: &str = "T00003 000057100999999999999999999999999999999999999999999999999999999999999999999999999999";

    #[test]
    fn test_decode_fields() {
        let trailer = TrailerRecord::decode(LINE).unwrap();
        assert_eq!(trailer.record_count(), 3);
        assert_eq!(trailer.total_value(), Money::from_cents(57100));
    }

    #[test]
    fn test_round_trip() {
        assert_eq!(TrailerRecord::decode(LINE).unwrap().encode(), LINE);
    }

    #[test]
    fn test_new_matches_file_layout() {
        let trailer = TrailerRecord::new(3, Money::from_cents(57100)).unwrap();
        assert_eq!(trailer.encode(), LINE);
        assert_eq!(trailer.encode().len(), RECORD_WIDTH);
    }

    #[test]
    fn test_new_rejects_overflow() {
        assert!(TrailerRecord::new(100_000, Money::zero()).is_err());
        assert!(TrailerRecord::new(1, Money::from_cents(1_000_000_000)).is_err());
        assert!(TrailerRecord::new(1, Money::from_cents(999_999_999)).is_ok());
    }

    #[test]
    fn test_rejects_non_digit_count() {
        let bad = LINE.replacen("00003", "0000A", 1);
        assert!(TrailerRecord::decode(&bad).unwrap_err().is_format());
    }
}
