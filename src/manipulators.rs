use serde_json::{Map, Value};

use crate::types::{JsonPath, PathToken};

/// Resolves a path against a value, read-only.
///
/// Walks the tokens in order: a key token looks up a field on an object, an
/// index token selects an in-range element of an array. Any other pairing,
/// a missing field, or an out-of-range index makes the whole resolution
/// absent (`None`). Absent is distinct from a stored JSON `null`, which
/// resolves to `Some(Value::Null)`.
pub fn resolve<'a>(value: &'a Value, path: &JsonPath) -> Option<&'a Value> {
    path.tokens()
        .iter()
        .try_fold(value, |target, token| match (target, token) {
            (Value::Object(map), PathToken::Key(key)) => map.get(key),
            (Value::Array(items), PathToken::Index(index)) => items.get(*index),
            _ => None,
        })
}

/// The mutable twin of [`resolve`], used for in-place edits such as
/// appending to an existing array.
pub fn resolve_mut<'a>(value: &'a mut Value, path: &JsonPath) -> Option<&'a mut Value> {
    path.tokens()
        .iter()
        .try_fold(value, |target, token| match (target, token) {
            (Value::Object(map), PathToken::Key(key)) => map.get_mut(key),
            (Value::Array(items), PathToken::Index(index)) => items.get_mut(*index),
            _ => None,
        })
}

/// Sets `new_value` at `path`, creating intermediate objects as needed.
///
/// For the root path the whole value is replaced, but only when `new_value`
/// is an object; a non-object root replacement leaves the value untouched.
/// For any other path, every non-final token addresses an object field: a
/// missing or non-object intermediate is replaced with a fresh empty object
/// before descending (auto-vivification creates objects, never arrays), and
/// the final field is set outright, whatever was there before.
pub fn assign(value: &mut Value, path: &JsonPath, new_value: Value) {
    assign_tokens(value, path.tokens(), new_value);
}

fn assign_tokens(value: &mut Value, tokens: &[PathToken], new_value: Value) {
    match tokens {
        [] => {
            if new_value.is_object() {
                *value = new_value;
            }
        }
        [last] => {
            ensure_object(value).insert(last.field_name(), new_value);
        }
        [token, rest @ ..] => {
            let entry = ensure_object(value)
                .entry(token.field_name())
                .or_insert(Value::Null);
            assign_tokens(entry, rest, new_value);
        }
    }
}

/// Deletes the value at `path`, never creating anything along the way.
///
/// The root path resets the value to an empty object. For any other path the
/// walk stops silently at the first missing or non-object intermediate, and
/// deleting an absent final field is a no-op, which makes removal
/// idempotent. Field order of the remaining keys is preserved.
pub fn remove(value: &mut Value, path: &JsonPath) {
    remove_tokens(value, path.tokens());
}

fn remove_tokens(value: &mut Value, tokens: &[PathToken]) {
    match tokens {
        [] => {
            *value = Value::Object(Map::new());
        }
        [last] => {
            if let Some(map) = value.as_object_mut() {
                map.shift_remove(&last.field_name());
            }
        }
        [token, rest @ ..] => {
            if let Some(next) = value
                .as_object_mut()
                .and_then(|map| map.get_mut(&token.field_name()))
            {
                remove_tokens(next, rest);
            }
        }
    }
}

fn ensure_object(value: &mut Value) -> &mut Map<String, Value> {
    if !value.is_object() {
        *value = Value::Object(Map::new());
    }
    match value {
        Value::Object(map) => map,
        _ => unreachable!("value was just coerced to an object"),
    }
}
