//! Fixed-width field layout helpers
//!
//! Every record kind is a 91-character ASCII line carved into fields at
//! fixed offsets. Numeric fields are right-aligned and zero-padded; text
//! fields are left-aligned and space-padded.

use crate::error::{MovError, MovResult};

/// Width of every record line, in characters
pub const RECORD_WIDTH: usize = 91;

/// A named slice of a fixed-width line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub offset: usize,
    pub width: usize,
}

impl Field {
    pub const fn new(name: &'static str, offset: usize, width: usize) -> Self {
        Self {
            name,
            offset,
            width,
        }
    }

    /// Offset one past the last character of this field
    pub const fn end(&self) -> usize {
        self.offset + self.width
    }

    /// Raw slice of a line already checked by [`check_line`]
    pub fn slice<'a>(&self, line: &'a str) -> &'a str {
        &line[self.offset..self.end()]
    }

    /// Slice of the line that must contain only digits
    pub fn digits<'a>(&self, line: &'a str) -> MovResult<&'a str> {
        let raw = self.slice(line);
        if raw.bytes().all(|b| b.is_ascii_digit()) {
            Ok(raw)
        } else {
            Err(MovError::field(
                self.name,
                format!("expected {} digits, found {:?}", self.width, raw),
            ))
        }
    }

    /// Numeric value of a digits-only field
    pub fn number(&self, line: &str) -> MovResult<u64> {
        self.digits(line)?
            .parse()
            .map_err(|e| MovError::field(self.name, e))
    }

    /// Left-align text in the field, truncating from the right when oversized
    pub fn pad_text(&self, value: &str) -> MovResult<String> {
        if !value.is_ascii() {
            return Err(MovError::field(self.name, "text must be ASCII"));
        }
        let truncated = &value[..value.len().min(self.width)];
        Ok(format!("{:<width$}", truncated, width = self.width))
    }

    /// Right-align a digit string, zero-padding on the left
    ///
    /// Input longer than the field is rejected rather than truncated.
    pub fn pad_digits(&self, value: &str) -> MovResult<String> {
        let value = value.trim();
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MovError::field(
                self.name,
                format!("expected digits, found {:?}", value),
            ));
        }
        if value.len() > self.width {
            return Err(MovError::field(
                self.name,
                format!("{:?} does not fit in {} digits", value, self.width),
            ));
        }
        Ok(format!("{:0>width$}", value, width = self.width))
    }

    /// Largest value a numeric field of this width can hold
    pub fn max_number(&self) -> u64 {
        10u64.pow(self.width as u32) - 1
    }
}

/// Check that a line is a complete record of the expected kind
///
/// The line must be exactly [`RECORD_WIDTH`] ASCII characters and start
/// with `tag`.
pub fn check_line(line: &str, tag: char, kind: &str) -> MovResult<()> {
    let len = line.chars().count();
    if len != RECORD_WIDTH {
        return Err(MovError::Format(format!(
            "{} record must have exactly {} characters, found {}",
            kind, RECORD_WIDTH, len
        )));
    }
    if !line.is_ascii() {
        return Err(MovError::Format(format!(
            "{} record contains non-ASCII characters",
            kind
        )));
    }
    if !line.starts_with(tag) {
        return Err(MovError::Format(format!(
            "{} record must start with '{}', found '{}'",
            kind,
            tag,
            &line[..1]
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CODE: Field = Field::new("code", 1, 2);

    #[test]
    fn test_digits_and_number() {
        assert_eq!(CODE.digits("M46").unwrap(), "46");
        assert_eq!(CODE.number("M07").unwrap(), 7);
        assert!(CODE.digits("M4A").unwrap_err().is_format());
    }

    #[test]
    fn test_pad_text_truncates_right() {
        let card = Field::new("card", 0, 5);
        assert_eq!(card.pad_text("12").unwrap(), "12   ");
        assert_eq!(card.pad_text("1234567").unwrap(), "12345");
        assert!(card.pad_text("café").is_err());
    }

    #[test]
    fn test_pad_digits() {
        assert_eq!(CODE.pad_digits("3").unwrap(), "03");
        assert_eq!(CODE.pad_digits("46").unwrap(), "46");
        assert!(CODE.pad_digits("460").is_err());
        assert!(CODE.pad_digits("4x").is_err());
        assert!(CODE.pad_digits("").is_err());
    }

    #[test]
    fn test_max_number() {
        assert_eq!(Field::new("total", 7, 9).max_number(), 999_999_999);
        assert_eq!(CODE.max_number(), 99);
    }

    #[test]
    fn test_check_line() {
        let line = format!("T{}", "9".repeat(90));
        assert!(check_line(&line, 'T', "Trailer").is_ok());
        assert!(check_line(&line, 'H', "Header").unwrap_err().is_format());
        assert!(check_line("T999", 'T', "Trailer").is_err());

        let accented = format!("Té{}", "9".repeat(89));
        assert!(check_line(&accented, 'T', "Trailer").is_err());
    }
}
