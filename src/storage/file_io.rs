//! File I/O utilities with atomic writes
//!
//! Movement files and settings are written to a temporary sibling first and
//! renamed over the target, so a failed write never leaves a truncated file.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::MovError;
use crate::models::MovementFile;

/// Read and validate a movement file
///
/// A missing or unreadable file is a storage error; malformed content keeps
/// the format or validation error from the decoder.
pub fn read_movement_file<P: AsRef<Path>>(path: P) -> Result<MovementFile, MovError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(MovError::Storage(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let file = File::open(path)
        .map_err(|e| MovError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    MovementFile::load(BufReader::new(file))
}

/// Write a movement file atomically (write to temp, then rename)
pub fn write_movement_file<P: AsRef<Path>>(path: P, file: &MovementFile) -> Result<(), MovError> {
    write_atomic(path.as_ref(), |writer| file.write_to(writer))
}

/// Write pretty JSON atomically
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), MovError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    write_atomic(path.as_ref(), |writer| {
        serde_json::to_writer_pretty(&mut *writer, data)
            .map_err(|e| MovError::Storage(format!("Failed to serialize data: {}", e)))?;
        writeln!(writer)?;
        Ok(())
    })
}

fn write_atomic<F>(path: &Path, write: F) -> Result<(), MovError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), MovError>,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                MovError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = temp_path_for(path);

    let result = (|| {
        let file = File::create(&temp_path)
            .map_err(|e| MovError::Storage(format!("Failed to create temp file: {}", e)))?;
        let mut writer = BufWriter::new(file);
        write(&mut writer)?;
        writer
            .flush()
            .map_err(|e| MovError::Storage(format!("Failed to flush data: {}", e)))?;
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| MovError::Storage(format!("Failed to sync data: {}", e)))?;
        fs::rename(&temp_path, path)
            .map_err(|e| MovError::Storage(format!("Failed to rename temp file: {}", e)))
    })();

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

/// `movs.txt` -> `movs.txt.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name: OsString = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
