//! movedit - editor for fixed-width settlement movement files
//!
//! This library reads, validates, edits and writes the flat files card
//! acquirers use to report settlement movements: one header line, any
//! number of movement lines and one trailer line, each 91 characters wide.
//! The trailer always declares the exact number of movements and their
//! total value; every mutation keeps it that way.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Money, the fixed-width record codec and the movement file
//!   aggregate
//! - `selection`: Exact-value subset selection over movement values
//! - `services`: Batch keep/delete operations
//! - `storage`: Reading files and writing them back atomically
//! - `audit`: Operation log
//! - `config`: Configuration and path management
//! - `display`: Plain-text formatting for the CLI
//! - `cli`: Command handlers for the `movedit` binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use movedit::models::Money;
//! use movedit::selection::SelectionEngine;
//! use movedit::services::BatchService;
//! use movedit::storage::{read_movement_file, write_movement_file};
//!
//! let mut file = read_movement_file("movs.txt")?;
//! let engine = SelectionEngine::default();
//! let (outcome, summary) =
//!     BatchService::new(&mut file).keep_exact_value(&engine, Money::from_cents(27100))?;
//! if outcome.is_found() {
//!     write_movement_file("movs.txt", &file)?;
//! }
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod selection;
pub mod services;
pub mod storage;

pub use error::{MovError, MovResult};
