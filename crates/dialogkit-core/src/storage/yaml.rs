//! YAML reading and writing
//!
//! Everything goes through `serde_yaml`, which only builds plain scalars,
//! sequences and mappings. Unknown tags are kept as `Value::Tagged` rather
//! than turned into objects. Output is block style with non-ASCII text
//! written as-is, and mappings keep their insertion order.

use super::Result;
use super::file::{dump_str_to_file, read_file};
use crate::error::StorageError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;

fn yaml_error(path: Option<&Path>, source: serde_yaml::Error) -> StorageError {
    StorageError::Yaml {
        path: path.map(|p| p.to_string_lossy().to_string()),
        source,
    }
}

/// Parse a YAML document from a string
pub fn read_yaml_string<T: DeserializeOwned>(string: &str) -> Result<T> {
    serde_yaml::from_str(string).map_err(|e| yaml_error(None, e))
}

/// Read `path` and interpret its contents as YAML
pub fn read_yaml_file<P: AsRef<Path>, T: DeserializeOwned>(path: P) -> Result<T> {
    let path = path.as_ref();
    let content = read_file(path)?;
    serde_yaml::from_str(&content).map_err(|e| yaml_error(Some(path), e))
}

/// Render `obj` as a block-style YAML string
pub fn dump_yaml_to_string<T: Serialize + ?Sized>(obj: &T) -> Result<String> {
    serde_yaml::to_string(obj).map_err(|e| yaml_error(None, e))
}

/// Write `obj` to `path` as block-style YAML
pub fn dump_yaml_to_file<P: AsRef<Path>, T: Serialize + ?Sized>(path: P, obj: &T) -> Result<()> {
    let path = path.as_ref();
    let text = serde_yaml::to_string(obj).map_err(|e| yaml_error(Some(path), e))?;
    dump_str_to_file(path, &text)
}
