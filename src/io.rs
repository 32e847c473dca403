//! File surface: whole-file parse and write.
//!
//! There is no streaming; a read loads the entire file into memory before
//! tokenizing. Both directions report failures as typed results — the read
//! and write paths are deliberately symmetric.

use std::fs;
use std::path::Path;

use crate::error::JsonResult;
use crate::parser::parse_str;
use crate::serialize::indented;
use crate::value::JsonValue;

/// Default indent width used when writing files.
pub const DEFAULT_INDENT: usize = 4;

/// Read a whole file into memory and parse it into a value tree.
pub fn parse_file(path: impl AsRef<Path>) -> JsonResult<JsonValue> {
    let source = fs::read_to_string(path)?;
    parse_str(&source)
}

/// Write the indented form of a tree to a path, creating missing parent
/// directories first.
pub fn write_file(value: &JsonValue, path: impl AsRef<Path>, indent: usize) -> JsonResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, indented(value, indent))?;
    Ok(())
}
