//! Movement filters
//!
//! Narrow a movement list the way an operator scans a settlement file:
//! by acquirer, by movement date, or by a fragment of the card or NSU.

use serde::{Deserialize, Serialize};

use super::movement::MovementRecord;

/// Criteria a movement must meet; empty criteria match everything
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementFilter {
    /// Exact acquirer code
    pub acquirer_code: Option<String>,
    /// Exact movement date (`YYYYMMDD`)
    pub movement_date: Option<String>,
    /// Substring of the card number
    pub card_contains: Option<String>,
    /// Substring of the NSU
    pub nsu_contains: Option<String>,
}

impl MovementFilter {
    pub fn is_empty(&self) -> bool {
        self.acquirer_code.is_none()
            && self.movement_date.is_none()
            && self.card_contains.is_none()
            && self.nsu_contains.is_none()
    }

    pub fn matches(&self, movement: &MovementRecord) -> bool {
        if let Some(code) = &self.acquirer_code {
            if movement.acquirer_code() != code {
                return false;
            }
        }
        if let Some(date) = &self.movement_date {
            if movement.movement_date() != date {
                return false;
            }
        }
        if let Some(card) = &self.card_contains {
            if !movement.card_number().contains(card.as_str()) {
                return false;
            }
        }
        if let Some(nsu) = &self.nsu_contains {
            if !movement.nsu().contains(nsu.as_str()) {
                return false;
            }
        }
        true
    }
}
