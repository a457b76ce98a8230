//! Core data models for movedit
//!
//! This module contains the record codec for the three fixed-width record
//! kinds, the money type, and the movement file aggregate that keeps the
//! trailer reconciled with the movements.

pub mod field;
pub mod filter;
pub mod header;
pub mod money;
pub mod movement;
pub mod movement_file;
pub mod record;
pub mod trailer;

pub use field::RECORD_WIDTH;
pub use filter::MovementFilter;
pub use header::HeaderRecord;
pub use money::{Money, MoneyParseError};
pub use movement::{MovementBuilder, MovementField, MovementRecord};
pub use movement_file::MovementFile;
pub use record::{Record, RecordKind};
pub use trailer::TrailerRecord;
