//! Record kind dispatch
//!
//! Decodes any line by its leading tag.

use std::fmt;

use super::header::HeaderRecord;
use super::movement::MovementRecord;
use super::trailer::TrailerRecord;
use crate::error::{MovError, MovResult};

/// The three kinds of line a movement file contains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Header,
    Movement,
    Trailer,
}

impl RecordKind {
    /// Kind announced by the first character of a line
    pub fn of_line(line: &str) -> Option<Self> {
        match line.chars().next()? {
            HeaderRecord::TAG => Some(Self::Header),
            MovementRecord::TAG => Some(Self::Movement),
            TrailerRecord::TAG => Some(Self::Trailer),
            _ => None,
        }
    }

    /// Leading character of every line of this kind
    pub fn tag(&self) -> char {
        match self {
            Self::Header => HeaderRecord::TAG,
            Self::Movement => MovementRecord::TAG,
            Self::Trailer => TrailerRecord::TAG,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Header => "Header",
            Self::Movement => "Movement",
            Self::Trailer => "Trailer",
        };
        write!(f, "{} ({})", name, self.tag())
    }
}

/// Any decoded line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Header(HeaderRecord),
    Movement(MovementRecord),
    Trailer(TrailerRecord),
}

impl Record {
    /// Decode a line, choosing the record kind from its tag
    pub fn decode(line: &str) -> MovResult<Self> {
        match RecordKind::of_line(line) {
            Some(RecordKind::Header) => HeaderRecord::decode(line).map(Self::Header),
            Some(RecordKind::Movement) => MovementRecord::decode(line).map(Self::Movement),
            Some(RecordKind::Trailer) => TrailerRecord::decode(line).map(Self::Trailer),
            None => Err(MovError::Format(format!(
                "Unknown record tag in line {:?}",
                line.chars().take(1).collect::<String>()
            ))),
        }
    }

    pub fn encode(&self) -> String {
        match self {
            Self::Header(h) => h.encode(),
            Self::Movement(m) => m.encode(),
            Self::Trailer(t) => t.encode(),
        }
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Header(_) => RecordKind::Header,
            Self::Movement(_) => RecordKind::Movement,
            Self::Trailer(_) => RecordKind::Trailer,
        }
    }
}
