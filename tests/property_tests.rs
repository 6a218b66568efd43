//! Property-based tests - pragmatic coverage of the formatting guarantees
//! across generated inputs. Focus is on the contracts callers lean on:
//! fitting values render exactly like the reference encoder, budgets hold,
//! absent stays absent.

use proptest::prelude::*;
use snug_json::{format, format_with_options, FormatOptions, Map, Value};

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9 _.-]{0,12}".prop_map(Value::from),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::from),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..6).prop_map(|members| {
                let mut map = Map::new();
                for (key, value) in members {
                    map.insert(key, value);
                }
                Value::Object(map)
            }),
        ]
    })
}

proptest! {
    /// With no budgets, output is exactly what the reference encoder
    /// produces for the same tree.
    #[test]
    fn prop_fitting_values_match_reference(value in arb_value()) {
        let reference = serde_json::to_string(&value).expect("reference encoding");
        let options = FormatOptions::new().with_one_line_length(usize::MAX);
        prop_assert_eq!(format_with_options(&value, options), Some(reference));
    }

    /// Any ceiling that can hold the ellipsis is honored.
    #[test]
    fn prop_max_length_is_honored(value in arb_value(), max_length in 3usize..120) {
        let options = FormatOptions::new().with_max_length(max_length);
        let text = format_with_options(&value, options).expect("non-absent input");
        prop_assert!(
            text.chars().count() <= max_length,
            "budget {} produced {} chars: {}",
            max_length,
            text.chars().count(),
            text
        );
    }

    /// Reserved marker literals never survive into output.
    #[test]
    fn prop_markers_never_leak(
        value in arb_value(),
        max_length in 3usize..80,
        max_array in 1usize..4,
    ) {
        let options = FormatOptions::new()
            .with_max_length(max_length)
            .with_max_array_length(max_array);
        let text = format_with_options(&value, options).expect("non-absent input");
        let marker = '\u{E000}';
        prop_assert!(!text.contains(marker));
    }

    /// The indented rendering with no budgets equals the reference
    /// pretty-printer.
    #[test]
    fn prop_indented_matches_reference(value in arb_value()) {
        let reference = serde_json::to_string_pretty(&value).expect("reference encoding");
        let options = FormatOptions::new().with_indent(2).with_one_line_length(0);
        prop_assert_eq!(format_with_options(&value, options), Some(reference));
    }

    /// An absent top level is absent under every option combination.
    #[test]
    fn prop_absent_is_option_invariant(
        max_length in proptest::option::of(1usize..100),
        max_string in proptest::option::of(1usize..100),
        one_line in 0usize..100,
    ) {
        let mut options = FormatOptions::new().with_one_line_length(one_line);
        if let Some(n) = max_length {
            options = options.with_max_length(n);
        }
        if let Some(n) = max_string {
            options = options.with_max_string_length(n);
        }
        prop_assert_eq!(format_with_options(&Value::Undefined, options), None);
    }

    /// A top-level string either fits whole or is cut to exactly the
    /// threshold plus the ellipsis.
    #[test]
    fn prop_string_truncation_bound(len in 0usize..200, limit in 1usize..40) {
        let value = Value::from("x".repeat(len));
        let options = FormatOptions::new()
            .with_max_string_length(limit)
            // the truncated rendering always fits: limit + ellipsis + quotes
            .with_max_length(limit + 5)
            .with_one_line_length(0);
        let text = format_with_options(&value, options).expect("non-absent input");
        if len > limit + 3 {
            prop_assert_eq!(text, format!("\"{}...\"", "x".repeat(limit)));
        } else {
            prop_assert_eq!(text, format!("\"{}\"", "x".repeat(len)));
        }
    }
}

#[test]
fn test_forced_cut_length_formula() {
    // pre-cut text of a fully collapsed 3-member object is 13 chars; every
    // ceiling below that yields min(13, ceiling - 3) + 3 chars
    let value = snug_json::snug!({"a": 1, "b": 2, "c": 3});
    for max_length in 3usize..13 {
        let options = FormatOptions::new().with_max_length(max_length);
        let text = format_with_options(&value, options).unwrap();
        assert_eq!(text.chars().count(), (max_length - 3).min(13) + 3);
    }

    // sanity: an unbudgeted render is longer than any of the cuts above
    assert!(format(&value).unwrap().chars().count() > 13);
}
