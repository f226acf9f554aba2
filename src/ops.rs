//! The operation set: everything the CLI can do to a loaded document.
//!
//! Each operation takes the document root, a parsed path, and its own
//! arguments. Read-only operations return the exact text to print; mutating
//! operations edit the document in place and leave saving to the caller.
//!
//! Wherever resolution can come up empty, absence is not an error: `get`,
//! `find`, `length`, and `list_array` fall back to the documented
//! empty/zero/default output instead. A stored JSON `null` is folded into
//! the absent case for `get`, `format`, and `add`.

use serde_json::Value;

use crate::manipulators::{assign, remove, resolve, resolve_mut};
use crate::types::{Error, JsonPath};

/// Renders the value at `path` for display: scalars bare (booleans
/// lowercase), objects and arrays as compact JSON, absent or null as the
/// empty string.
pub fn get(doc: &Value, path: &JsonPath) -> String {
    match resolve(doc, path) {
        None | Some(Value::Null) => String::new(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(container) => compact(container),
    }
}

/// Sets `raw` at `path`. The text is parsed as JSON when possible and used
/// as a literal string otherwise, so `set .count 3` stores a number while
/// `set .default project-x` stores a string.
pub fn set(doc: &mut Value, path: &JsonPath, raw: &str) {
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    assign(doc, path, value);
}

/// Deletes the value at `path`; a miss anywhere along the way is a no-op.
pub fn delete(doc: &mut Value, path: &JsonPath) {
    remove(doc, path);
}

/// Appends a JSON value to the array at `path`.
///
/// The value argument must be valid JSON. An absent (or null) target is
/// auto-created as a one-element array; a present non-array target is a
/// type mismatch.
pub fn add(doc: &mut Value, path: &JsonPath, raw: &str) -> Result<(), Error> {
    let value: Value = serde_json::from_str(raw).map_err(Error::Value)?;

    if matches!(resolve(doc, path), None | Some(Value::Null)) {
        assign(doc, path, Value::Array(vec![value]));
        return Ok(());
    }

    match resolve_mut(doc, path) {
        Some(Value::Array(items)) => {
            items.push(value);
            Ok(())
        }
        _ => Err(Error::NotAnArray(path.clone())),
    }
}

/// Drops every object element of the array at `path` whose `field` equals
/// `value` (string comparison). Non-object elements are always kept. The
/// filtered array is assigned back to the same path.
pub fn remove_matching(
    doc: &mut Value,
    path: &JsonPath,
    field: &str,
    value: &str,
) -> Result<(), Error> {
    let kept: Vec<Value> = match resolve(doc, path) {
        Some(Value::Array(items)) => items
            .iter()
            .filter(|item| !field_matches(item, field, value))
            .cloned()
            .collect(),
        _ => return Err(Error::NotAnArray(path.clone())),
    };

    assign(doc, path, Value::Array(kept));
    Ok(())
}

/// Returns the first object element of the array at `path` whose `field`
/// equals `value`, as compact JSON. No array, no match, or no such path all
/// render as the empty string.
pub fn find(doc: &Value, path: &JsonPath, field: &str, value: &str) -> String {
    if let Some(Value::Array(items)) = resolve(doc, path) {
        if let Some(found) = items.iter().find(|item| field_matches(item, field, value)) {
            return compact(found);
        }
    }
    String::new()
}

/// Element count of an array, key count of an object, 0 for anything else
/// (absent included).
pub fn length(doc: &Value, path: &JsonPath) -> usize {
    match resolve(doc, path) {
        Some(Value::Array(items)) => items.len(),
        Some(Value::Object(map)) => map.len(),
        _ => 0,
    }
}

/// Pretty-prints the value at `path` with 2-space indentation; absent or
/// null renders as the literal `{}`.
pub fn format(doc: &Value, path: &JsonPath) -> String {
    match resolve(doc, path) {
        None | Some(Value::Null) => "{}".to_string(),
        Some(value) => pretty(value),
    }
}

/// One line per object element of the array at `path`: the requested fields,
/// string-coerced (missing or null fields become empty), joined by `|`.
/// Non-object elements are skipped; a non-array target yields no lines.
pub fn list_array(doc: &Value, path: &JsonPath, fields: &[String]) -> Vec<String> {
    let Some(Value::Array(items)) = resolve(doc, path) else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(Value::as_object)
        .map(|item| {
            fields
                .iter()
                .map(|field| item.get(field).map(field_text).unwrap_or_default())
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect()
}

fn field_matches(item: &Value, field: &str, value: &str) -> bool {
    item.as_object()
        .and_then(|map| map.get(field))
        .and_then(Value::as_str)
        == Some(value)
}

fn field_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        container => compact(container),
    }
}

// Serializing an in-memory Value cannot fail.
fn compact(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}
