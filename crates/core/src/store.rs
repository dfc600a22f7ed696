//! File helpers that attach paths to IO and JSON failures.

use crate::{PublishError, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Reads a UTF-8 text file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|err| PublishError::io(path, err))
}

/// Parses a JSON file without imposing a shape on it.
pub fn read_json(path: &Path) -> Result<Value> {
    let raw = read_text(path)?;
    serde_json::from_str(&raw).map_err(|err| PublishError::json(path, err))
}

/// Writes `value` as JSON indented with two spaces, replacing any existing file.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|err| PublishError::json(path, err))?;
    fs::write(path, json).map_err(|err| PublishError::io(path, err))
}
