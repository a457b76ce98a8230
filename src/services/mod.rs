//! Service layer for movedit
//!
//! The service layer provides multi-record operations on top of the
//! movement file aggregate.

pub mod batch;

pub use batch::{parse_index_set, BatchService, BatchSummary};
