//! Path management for movedit
//!
//! Provides XDG-compliant path resolution for the settings file and the
//! operation log.
//!
//! ## Path Resolution Order
//!
//! 1. `MOVEDIT_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/movedit` or `~/.config/movedit`
//! 3. Windows: `%APPDATA%\movedit`

use std::path::PathBuf;

use crate::error::MovError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "MOVEDIT_DATA_DIR";

/// Manages all paths used by movedit
#[derive(Debug, Clone)]
pub struct MoveditPaths {
    /// Base directory for settings and the audit log
    base_dir: PathBuf,
}

impl MoveditPaths {
    /// Create a new MoveditPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if neither the override nor a home directory can
    /// be determined.
    pub fn new() -> Result<Self, MovError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create MoveditPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/movedit/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), MovError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| MovError::Io(format!("Failed to create base directory: {}", e)))?;
        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, MovError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                MovError::Config(format!(
                    "HOME is not set; set {} to choose a data directory",
                    DATA_DIR_ENV
                ))
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("movedit"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, MovError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| MovError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("movedit"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoveditPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);
        let paths = MoveditPaths::new().unwrap();
        env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoveditPaths::with_base_dir(temp_dir.path().join("nested").join("movedit"));

        assert!(!paths.base_dir().exists());
        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoveditPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }
}
