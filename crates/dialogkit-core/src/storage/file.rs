//! Plain text and JSON file helpers
//!
//! Thin wrappers over `std::fs` that attach the offending path to every
//! failure. Nothing here retries or recovers.

use super::{Result, io_error};
use crate::error::StorageError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read a UTF-8 text file into a string
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| io_error(path, source))
}

/// Write `text` to `path`, replacing any previous content
pub fn dump_str_to_file<P: AsRef<Path>>(path: P, text: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, text).map_err(|source| io_error(path, source))
}

/// Serialize `obj` as JSON with two-space indentation and write it to `path`
pub fn dump_json_to_file<P: AsRef<Path>, T: Serialize + ?Sized>(path: P, obj: &T) -> Result<()> {
    let path = path.as_ref();
    let text = serde_json::to_string_pretty(obj).map_err(|source| StorageError::Json {
        path: Some(path.to_string_lossy().to_string()),
        source,
    })?;
    dump_str_to_file(path, &text)
}

/// Read a JSON file into any deserializable type
pub fn read_json_file<P: AsRef<Path>, T: DeserializeOwned>(path: P) -> Result<T> {
    let path = path.as_ref();
    let content = read_file(path)?;
    serde_json::from_str(&content).map_err(|source| StorageError::Json {
        path: Some(path.to_string_lossy().to_string()),
        source,
    })
}

/// Create any missing parent directories of `file_path`.
///
/// A directory that already exists is fine; every other failure is returned.
pub fn create_dir_for_file<P: AsRef<Path>>(file_path: P) -> Result<()> {
    let Some(parent) = file_path.as_ref().parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }

    match fs::create_dir_all(parent) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists && parent.is_dir() => Ok(()),
        Err(source) => Err(io_error(parent, source)),
    }
}
