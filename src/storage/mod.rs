//! Storage layer for movedit
//!
//! Reads movement files from disk and writes them back atomically.

pub mod file_io;

pub use file_io::{read_movement_file, write_json_atomic, write_movement_file};
