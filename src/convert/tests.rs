//! Tests for JSON to CSV fragment conversion

use super::*;
use serde_json::json;

fn as_object(value: serde_json::Value) -> crate::types::JsonObject {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

// ============================================================================
// Stringification Tests
// ============================================================================

#[test]
fn test_stringify_string_passes_through() {
    let value = json!("plain text, untouched");
    assert_eq!(stringify_value(&value).unwrap(), "plain text, untouched");
}

#[test]
fn test_stringify_booleans() {
    assert_eq!(stringify_value(&json!(true)).unwrap(), "true");
    assert_eq!(stringify_value(&json!(false)).unwrap(), "false");
}

#[test]
fn test_stringify_numbers_use_six_fixed_decimals() {
    assert_eq!(stringify_value(&json!(1.5)).unwrap(), "1.500000");
    assert_eq!(stringify_value(&json!(200)).unwrap(), "200.000000");
    assert_eq!(stringify_value(&json!(-0.25)).unwrap(), "-0.250000");
    assert_eq!(stringify_value(&json!(0)).unwrap(), "0.000000");
}

#[test]
fn test_stringify_large_number_has_no_exponent() {
    let text = stringify_value(&json!(1.0e9)).unwrap();
    assert_eq!(text, "1000000000.000000");
    assert!(!text.contains('e'));
}

#[test]
fn test_stringify_other_shapes_fall_back_to_compact_json() {
    assert_eq!(stringify_value(&json!(null)).unwrap(), "null");
    assert_eq!(stringify_value(&json!([1, 2, 3])).unwrap(), "[1,2,3]");
    assert_eq!(
        stringify_value(&json!({"x": 1, "y": "z"})).unwrap(),
        r#"{"x":1,"y":"z"}"#
    );
}

// ============================================================================
// Flattening Tests
// ============================================================================

#[test]
fn test_flatten_sorts_keys_ascending() {
    let object = as_object(json!({"b": 1.5, "a": true, "c": "x"}));
    let (keys, values) = flatten_object(&object).unwrap();

    assert_eq!(keys, vec!["a", "b", "c"]);
    assert_eq!(values, vec!["true", "1.500000", "x"]);
}

#[test]
fn test_flatten_sequences_have_equal_length() {
    let samples = [
        json!({}),
        json!({"only": "one"}),
        json!({"n": 1, "s": "two", "b": false, "nested": {"k": 1}}),
    ];

    for sample in samples {
        let object = as_object(sample);
        let (keys, values) = flatten_object(&object).unwrap();
        assert_eq!(keys.len(), values.len());

        for pair in keys.windows(2) {
            assert!(pair[0] < pair[1], "keys not strictly ascending: {keys:?}");
        }
    }
}

#[test]
fn test_sorted_keys_use_byte_order() {
    let object = as_object(json!({"Z": 1, "a": 2, "B": 3}));
    // Uppercase sorts before lowercase in byte order
    assert_eq!(sorted_keys(&object), vec!["B", "Z", "a"]);
}

// ============================================================================
// Fragment Tests
// ============================================================================

#[test]
fn test_fragment_round_trip() {
    let object = as_object(json!({"b": 1.5, "a": true}));
    let fragment = object_to_fragment(&object).unwrap();

    assert_eq!(fragment.header, b"a,b\n");
    assert_eq!(fragment.row, b"true,1.500000\n");
}

#[test]
fn test_fragment_quotes_embedded_delimiters_and_quotes() {
    let object = as_object(json!({"q": "say \"hi\"", "with,comma": "a,b"}));
    let fragment = object_to_fragment(&object).unwrap();

    assert_eq!(fragment.header, b"q,\"with,comma\"\n");
    assert_eq!(fragment.row, b"\"say \"\"hi\"\"\",\"a,b\"\n");
}

#[test]
fn test_fragment_quotes_embedded_newlines() {
    let object = as_object(json!({"note": "line1\nline2"}));
    let fragment = object_to_fragment(&object).unwrap();

    assert_eq!(fragment.row, b"\"line1\nline2\"\n");
}

#[test]
fn test_fragment_into_bytes_joins_header_and_row() {
    let object = as_object(json!({"a": true}));
    let bytes = object_to_fragment(&object).unwrap().into_bytes();

    assert_eq!(bytes, b"a\ntrue\n");
}

#[test]
fn test_fragment_nested_value_encoded_as_json_cell() {
    let object = as_object(json!({"meta": {"k": 1}}));
    let fragment = object_to_fragment(&object).unwrap();

    // Compact JSON contains quotes, so the cell itself gets quoted
    assert_eq!(fragment.row, b"\"{\"\"k\"\":1}\"\n");
}
