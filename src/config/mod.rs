//! Configuration module for movedit
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Settings persistence, including the selection engine's limits

pub mod paths;
pub mod settings;

pub use paths::MoveditPaths;
pub use settings::Settings;
