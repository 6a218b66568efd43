//! The kitchen-sink preview: one oversized string, one deep object, one
//! huge array, all squeezed into a hundred characters.
//!
//! Run with: cargo run --example sample

use snug_json::{format_with_options, snug, FormatOptions};

fn main() {
    let complex_data = snug!({
        "longString": ("a".repeat(1000)),
        "deepObject": {"a": {"b": {"c": {"d": 1}}}},
        "longArray": (vec![1; 1000])
    });

    let options = FormatOptions::new()
        .with_max_length(100)
        .with_max_string_length(10)
        .with_max_array_length(5)
        .with_indent(2)
        .with_one_line_length(0);

    match format_with_options(&complex_data, options) {
        Some(text) => println!("{text}"),
        None => println!("(nothing to render)"),
    }
}
