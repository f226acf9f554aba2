//! Whole-file document persistence: load, save, validate.
//!
//! Documents are read and written in one piece; there is no locking and no
//! atomicity beyond what the filesystem provides. Saved output is 2-space
//! indented UTF-8 with non-ASCII characters emitted literally and a single
//! trailing newline.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;

use crate::types::Error;

/// Loads a JSON document from `path`.
pub fn load(path: &Path) -> Result<Value, Error> {
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
        _ => Error::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    serde_json::from_str(&text).map_err(|source| Error::Document {
        path: path.to_path_buf(),
        source,
    })
}

/// Serializes `doc` back to `path`.
pub fn save(path: &Path, doc: &Value) -> Result<(), Error> {
    let mut text = serde_json::to_string_pretty(doc).map_err(Error::Serialize)?;
    text.push('\n');

    fs::write(path, text).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// True iff `path` exists and holds valid JSON. Never raises; callers that
/// need silence (the `validate` command) rely on that.
pub fn validate(path: &Path) -> bool {
    fs::read_to_string(path)
        .map(|text| serde_json::from_str::<Value>(&text).is_ok())
        .unwrap_or(false)
}
