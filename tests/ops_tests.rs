use dotjson::{ops, resolve, JsonPath};
use serde_json::{json, Value};
use yare::parameterized;

fn keyring() -> Value {
    json!({
        "default": "a",
        "keys": [
            {"name": "a", "key": "x"},
            {"name": "b", "key": "y"}
        ],
        "count": 2,
        "enabled": true,
        "note": null
    })
}

#[parameterized(
    string_is_bare = { ".default", "a" },
    bool_is_lowercase = { ".enabled", "true" },
    number_is_bare = { ".count", "2" },
    null_is_empty = { ".note", "" },
    absent_is_empty = { ".missing", "" },
    array_is_compact_json = { ".keys", r#"[{"name":"a","key":"x"},{"name":"b","key":"y"}]"# },
    object_is_compact_json = { ".keys[0]", r#"{"name":"a","key":"x"}"# },
    nested_scalar = { ".keys[1].key", "y" },
)]
fn get_renders(path: &str, expected: &str) {
    assert_eq!(ops::get(&keyring(), &JsonPath::from(path)), expected);
}

#[parameterized(
    number_text_parses = { ".count", "3", json!(3) },
    bool_text_parses = { ".enabled", "false", json!(false) },
    null_text_parses = { ".note", "null", json!(null) },
    object_text_parses = { ".env", r#"{"region":"eu"}"#, json!({"region": "eu"}) },
    bare_word_is_a_string = { ".default", "project-x", json!("project-x") },
    quoted_text_is_a_string = { ".default", "\"b\"", json!("b") },
    broken_json_is_a_string = { ".broken", "{not json", json!("{not json") },
)]
fn set_parses_json_or_stores_literal(path: &str, raw: &str, expected: Value) {
    let mut doc = keyring();
    let path = JsonPath::from(path);
    ops::set(&mut doc, &path, raw);
    assert_eq!(resolve(&doc, &path).cloned(), Some(expected));
}

#[test]
fn set_root_with_object_replaces_document() {
    let mut doc = keyring();
    ops::set(&mut doc, &JsonPath::from("."), r#"{"fresh":true}"#);
    assert_eq!(doc, json!({"fresh": true}));
}

#[test]
fn set_root_with_non_object_is_noop() {
    let mut doc = keyring();
    ops::set(&mut doc, &JsonPath::from("."), "5");
    assert_eq!(doc, keyring());
}

#[test]
fn delete_drops_the_key() {
    let mut doc = keyring();
    ops::delete(&mut doc, &JsonPath::from(".default"));
    assert_eq!(resolve(&doc, &JsonPath::from(".default")), None);
}

#[test]
fn add_appends_and_find_sees_the_new_element() {
    let mut doc = keyring();
    let keys = JsonPath::from(".keys");
    let before = ops::length(&doc, &keys);

    ops::add(&mut doc, &keys, r#"{"name":"c","key":"z"}"#).unwrap();

    assert_eq!(ops::length(&doc, &keys), before + 1);
    assert_eq!(
        ops::find(&doc, &keys, "name", "c"),
        r#"{"name":"c","key":"z"}"#
    );
}

#[test]
fn add_creates_array_at_absent_path() {
    let mut doc = json!({});
    ops::add(&mut doc, &JsonPath::from(".keys"), r#"{"name":"a"}"#).unwrap();
    assert_eq!(doc, json!({"keys": [{"name": "a"}]}));
}

#[test]
fn add_treats_stored_null_as_absent() {
    let mut doc = json!({"keys": null});
    ops::add(&mut doc, &JsonPath::from(".keys"), "1").unwrap();
    assert_eq!(doc, json!({"keys": [1]}));
}

#[test]
fn add_to_non_array_is_a_type_mismatch() {
    let mut doc = keyring();
    let err = ops::add(&mut doc, &JsonPath::from(".default"), "1").unwrap_err();
    assert_eq!(err.to_string(), "Path .default is not an array");
}

// The root path goes through the same is-array check as any other path.
#[test]
fn add_to_object_root_is_a_type_mismatch() {
    let mut doc = keyring();
    let err = ops::add(&mut doc, &JsonPath::from("."), "1").unwrap_err();
    assert_eq!(err.to_string(), "Path . is not an array");
    assert_eq!(doc, keyring());
}

#[test]
fn add_appends_when_document_root_is_an_array() {
    let mut doc = json!([{"name": "a"}]);
    ops::add(&mut doc, &JsonPath::from("."), r#"{"name":"b"}"#).unwrap();
    assert_eq!(doc, json!([{"name": "a"}, {"name": "b"}]));
}

#[test]
fn add_rejects_invalid_json_value() {
    let mut doc = keyring();
    let err = ops::add(&mut doc, &JsonPath::from(".keys"), "{not json").unwrap_err();
    assert!(err.to_string().starts_with("Invalid JSON value:"));
    // The document is untouched on failure.
    assert_eq!(doc, keyring());
}

#[test]
fn remove_matching_drops_only_matching_objects() {
    let mut doc = json!({
        "keys": [
            {"name": "a", "key": "x"},
            {"name": "b", "key": "y"},
            {"name": "a", "key": "z"},
            42,
            "loose"
        ]
    });
    ops::remove_matching(&mut doc, &JsonPath::from(".keys"), "name", "a").unwrap();
    assert_eq!(
        doc,
        json!({"keys": [{"name": "b", "key": "y"}, 42, "loose"]})
    );
}

#[test]
fn remove_matching_compares_strings_only() {
    let mut doc = json!({"keys": [{"name": 1}]});
    ops::remove_matching(&mut doc, &JsonPath::from(".keys"), "name", "1").unwrap();
    assert_eq!(doc, json!({"keys": [{"name": 1}]}));
}

#[test]
fn remove_matching_without_match_keeps_array() {
    let mut doc = keyring();
    ops::remove_matching(&mut doc, &JsonPath::from(".keys"), "name", "zz").unwrap();
    assert_eq!(ops::length(&doc, &JsonPath::from(".keys")), 2);
}

#[parameterized(
    absent_path = { ".missing" },
    scalar_path = { ".default" },
    object_path = { ".keys[0]" },
    root_object_path = { "." },
)]
fn remove_matching_requires_an_array(path: &str) {
    let mut doc = keyring();
    assert!(ops::remove_matching(&mut doc, &JsonPath::from(path), "name", "a").is_err());
}

#[parameterized(
    match_returns_compact_json = { ".keys", "name", "b", r#"{"name":"b","key":"y"}"# },
    first_match_wins = { ".keys", "key", "x", r#"{"name":"a","key":"x"}"# },
    no_match_is_empty = { ".keys", "name", "zz", "" },
    absent_path_is_empty = { ".missing", "name", "a", "" },
    non_array_is_empty = { ".default", "name", "a", "" },
    non_string_fields_never_match = { ".keys", "count", "2", "" },
)]
fn find_cases(path: &str, field: &str, value: &str, expected: &str) {
    assert_eq!(
        ops::find(&keyring(), &JsonPath::from(path), field, value),
        expected
    );
}

#[parameterized(
    array_len = { ".keys", 2 },
    object_key_count = { ".keys[0]", 2 },
    root_object = { ".", 5 },
    scalar_is_zero = { ".default", 0 },
    null_is_zero = { ".note", 0 },
    absent_is_zero = { ".missing", 0 },
)]
fn length_cases(path: &str, expected: usize) {
    assert_eq!(ops::length(&keyring(), &JsonPath::from(path)), expected);
}

#[test]
fn format_pretty_prints_with_two_space_indent() {
    assert_eq!(
        ops::format(&keyring(), &JsonPath::from(".keys[0]")),
        "{\n  \"name\": \"a\",\n  \"key\": \"x\"\n}"
    );
}

#[parameterized(
    scalar = { ".default", "\"a\"" },
    absent = { ".missing", "{}" },
    stored_null = { ".note", "{}" },
)]
fn format_edge_cases(path: &str, expected: &str) {
    assert_eq!(ops::format(&keyring(), &JsonPath::from(path)), expected);
}

#[test]
fn list_array_joins_requested_fields() {
    assert_eq!(
        ops::list_array(
            &keyring(),
            &JsonPath::from(".keys"),
            &["name".to_string(), "key".to_string()]
        ),
        vec!["a|x", "b|y"]
    );
}

#[test]
fn list_array_blanks_missing_and_null_fields() {
    let doc = json!({"keys": [{"name": "a", "note": null}]});
    assert_eq!(
        ops::list_array(
            &doc,
            &JsonPath::from(".keys"),
            &["name".to_string(), "note".to_string(), "ghost".to_string()]
        ),
        vec!["a||"]
    );
}

#[test]
fn list_array_coerces_scalars_like_get() {
    let doc = json!({"rows": [{"on": true, "n": 3, "tags": [1, 2]}]});
    assert_eq!(
        ops::list_array(
            &doc,
            &JsonPath::from(".rows"),
            &["on".to_string(), "n".to_string(), "tags".to_string()]
        ),
        vec!["true|3|[1,2]"]
    );
}

#[test]
fn list_array_skips_non_object_elements() {
    let doc = json!({"keys": [{"name": "a"}, 42, "loose", {"name": "b"}]});
    assert_eq!(
        ops::list_array(&doc, &JsonPath::from(".keys"), &["name".to_string()]),
        vec!["a", "b"]
    );
}

#[parameterized(
    non_array = { ".default" },
    absent = { ".missing" },
)]
fn list_array_yields_nothing(path: &str) {
    assert!(ops::list_array(&keyring(), &JsonPath::from(path), &["name".to_string()]).is_empty());
}
