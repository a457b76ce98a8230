//! Display formatting for terminal output
//!
//! Formats movement files, single records, selection results and the
//! operation log as plain text tables.

pub mod movement;

pub use movement::{
    format_batch_summary, format_file_summary, format_log_entries, format_movement_details,
    format_movement_table, format_selection,
};
