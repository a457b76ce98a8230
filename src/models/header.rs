//! Header record
//!
//! The first line of every movement file: two processing dates, the unit
//! code and a reserved zone that is carried through untouched.

use chrono::NaiveDate;
use serde::Serialize;

use super::field::{check_line, Field};
use crate::error::MovResult;

const PROCESSING_DATE: Field = Field::new("processing date", 1, 8);
const UNIT_CODE: Field = Field::new("unit code", 9, 2);
const SECOND_DATE: Field = Field::new("second processing date", 11, 8);
const RESERVED: Field = Field::new("header reserved zone", 19, 72);

/// The 'H' record opening a movement file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderRecord {
    processing_date: String,
    unit_code: String,
    second_processing_date: String,
    reserved: String,
}

impl HeaderRecord {
    pub const TAG: char = 'H';

    /// Build a header from scratch
    ///
    /// Dates must be 8 digits (`YYYYMMDD`); the unit code is text and is
    /// truncated to 2 characters.
    pub fn new(processing_date: &str, unit_code: &str, second_processing_date: &str) -> MovResult<Self> {
        Ok(Self {
            processing_date: PROCESSING_DATE.pad_digits(processing_date)?,
            unit_code: UNIT_CODE.pad_text(unit_code)?,
            second_processing_date: SECOND_DATE.pad_digits(second_processing_date)?,
            reserved: format!("{}{}", " ".repeat(8), "0".repeat(64)),
        })
    }

    /// Decode a header line
    pub fn decode(line: &str) -> MovResult<Self> {
        check_line(line, Self::TAG, "Header")?;
        Ok(Self {
            processing_date: PROCESSING_DATE.digits(line)?.to_string(),
            unit_code: UNIT_CODE.slice(line).to_string(),
            second_processing_date: SECOND_DATE.digits(line)?.to_string(),
            reserved: RESERVED.slice(line).to_string(),
        })
    }

    /// Encode back into a 91-character line
    pub fn encode(&self) -> String {
        format!(
            "{}{}{}{}{}",
            Self::TAG,
            self.processing_date,
            self.unit_code,
            self.second_processing_date,
            self.reserved
        )
    }

    pub fn processing_date(&self) -> &str {
        &self.processing_date
    }

    /// Processing date as a calendar date, if it is one
    pub fn processing_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.processing_date, "%Y%m%d").ok()
    }

    pub fn unit_code(&self) -> &str {
        &self.unit_code
    }

    pub fn second_processing_date(&self) -> &str {
        &self.second_processing_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::field::RECORD_WIDTH;

    const LINE: &str = "H20250616UN20250616        0000000000000000000000000000000000000000000000000000000000000000";

    #[test]
    fn test_decode_fields() {
        let header = HeaderRecord::decode(LINE).unwrap();
        assert_eq!(header.processing_date(), "20250616");
        assert_eq!(header.unit_code(), "UN");
        assert_eq!(header.second_processing_date(), "20250616");
        assert_eq!(
            header.processing_naive_date(),
            NaiveDate::from_ymd_opt(2025, 6, 16)
        );
    }

    #[test]
    fn test_round_trip() {
        assert_eq!(HeaderRecord::decode(LINE).unwrap().encode(), LINE);
    }

    #[test]
    fn test_new_matches_file_layout() {
        let header = HeaderRecord::new("20250616", "UN", "20250616").unwrap();
        assert_eq!(header.encode(), LINE);
        assert_eq!(header.encode().len(), RECORD_WIDTH);
    }

    #[test]
    fn test_rejects_bad_dates() {
        assert!(HeaderRecord::new("2025-06-1", "UN", "20250616").is_err());
        let bad = LINE.replacen("20250616", "2025O616", 1);
        assert!(HeaderRecord::decode(&bad).unwrap_err().is_format());
    }

    #[test]
    fn test_rejects_wrong_tag() {
        let bad = LINE.replacen('H', "M", 1);
        assert!(HeaderRecord::decode(&bad).is_err());
    }
}
