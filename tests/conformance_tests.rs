//! Agreement with the reference JSON encoder.
//!
//! A value whose plain rendering already fits must come out byte-for-byte
//! identical to `serde_json`'s output, one-line and indented alike. The
//! truncated renderings must stay inside their budgets and never leak the
//! reserved marker literals.

use serde_json::json;
use snug_json::{format, format_with_options, snug, FormatOptions, Value};

fn fixture() -> (Value, serde_json::Value) {
    let ours = snug!({
        "id": 12345,
        "name": "Alice",
        "active": true,
        "score": null,
        "tags": ["admin", "ops"],
        "nested": {"empty": {}, "list": [1, 2, 3], "note": "hi \"you\"\n"}
    });
    let reference = json!({
        "id": 12345,
        "name": "Alice",
        "active": true,
        "score": null,
        "tags": ["admin", "ops"],
        "nested": {"empty": {}, "list": [1, 2, 3], "note": "hi \"you\"\n"}
    });
    (ours, reference)
}

#[test]
fn test_one_line_matches_reference_encoder() {
    let (ours, reference) = fixture();
    let expected = serde_json::to_string(&reference).unwrap();

    // wide enough budgets: output must be the plain encoding
    let options = FormatOptions::new().with_one_line_length(1000);
    assert_eq!(format_with_options(&ours, options), Some(expected));
}

#[test]
fn test_indented_matches_reference_encoder() {
    let (ours, reference) = fixture();
    let expected = serde_json::to_string_pretty(&reference).unwrap();

    let options = FormatOptions::new().with_indent(2).with_one_line_length(0);
    assert_eq!(format_with_options(&ours, options), Some(expected));
}

#[test]
fn test_serialize_impl_matches_writer() {
    // `Value: Serialize` and the internal writer describe the same
    // projection, so routing through serde_json agrees with format().
    let (ours, _) = fixture();
    let through_serde = serde_json::to_string(&ours).unwrap();
    let options = FormatOptions::new().with_one_line_length(usize::MAX);
    assert_eq!(format_with_options(&ours, options), Some(through_serde));
}

#[test]
fn test_budget_sweep_never_overshoots() {
    let (ours, _) = fixture();
    let full = format(&ours).unwrap();

    // every ceiling from "tight" to "roomy" is honored once it can hold
    // the 3-char ellipsis
    for max_length in 3..=full.chars().count() + 5 {
        let options = FormatOptions::new().with_max_length(max_length);
        let text = format_with_options(&ours, options).unwrap();
        assert!(
            text.chars().count() <= max_length,
            "budget {max_length} produced {} chars: {text}",
            text.chars().count()
        );
    }
}

#[test]
fn test_no_reserved_literal_leaks_at_any_budget() {
    let (ours, _) = fixture();
    for max_length in 3..120 {
        let options = FormatOptions::new()
            .with_max_length(max_length)
            .with_max_string_length(4)
            .with_max_array_length(1);
        let text = format_with_options(&ours, options).unwrap();
        assert!(!text.contains('\u{E000}'), "budget {max_length} leaked: {text}");
    }
}

#[test]
fn test_value_deserializes_from_reference_encoder() {
    let text = r#"{"id":1,"tags":["a","b"],"ok":true,"n":null,"score":2.5}"#;
    let value: Value = serde_json::from_str(text).unwrap();
    let options = FormatOptions::new().with_one_line_length(1000);
    assert_eq!(format_with_options(&value, options), Some(text.to_string()));
}

#[test]
fn test_escaping_matches_reference_encoder() {
    let tricky = "quote \" backslash \\ newline \n tab \t control \u{1} unicode é";
    let ours = Value::from(tricky);
    let expected = serde_json::to_string(&json!(tricky)).unwrap();
    let options = FormatOptions::new().with_one_line_length(1000);
    assert_eq!(format_with_options(&ours, options), Some(expected));
}
