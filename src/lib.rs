//! # snug_json
//!
//! Budget-bounded JSON rendering: turn any value into a compact, readable
//! preview that is guaranteed not to outgrow a configured length.
//!
//! ## Why?
//!
//! Logging or displaying a full serialization of real-world data is often
//! useless: a single oversized string, a thousand-element array, or deep
//! nesting drowns everything else. `snug_json` applies an escalating
//! sequence of transformations, stopping at the least destructive one that
//! fits the budget:
//!
//! 1. the value as-is
//! 2. long strings truncated (`"aaaaaaaaaa..."`)
//! 3. long arrays truncated (`[1,2,3,...+997]`)
//! 4. deep structure collapsed into summaries (`{"key":?,...+12}`, `[42]`)
//! 5. as a last resort, a hard character cut
//!
//! Elided data is never silently dropped: every omission leaves a compact
//! marker saying what was there.
//!
//! ## Quick Start
//!
//! ```rust
//! use snug_json::{format_with_options, snug, FormatOptions};
//!
//! let event = snug!({
//!     "user": "alice",
//!     "payload": ("x".repeat(400)),
//!     "attempts": [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]
//! });
//!
//! let text = format_with_options(
//!     &event,
//!     FormatOptions::new()
//!         .with_max_length(60)
//!         .with_max_string_length(12)
//!         .with_max_array_length(4),
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     text,
//!     r#"{"user":"alice","payload":"xxxxxxxxxxxx...","attempts":[10]}"#
//! );
//! assert_eq!(text.chars().count(), 60);
//! ```
//!
//! ## Working with serde types
//!
//! Anything implementing `Serialize` can be formatted directly:
//!
//! ```rust
//! use serde::Serialize;
//! use snug_json::{to_string_with_options, FormatOptions};
//!
//! #[derive(Serialize)]
//! struct Job {
//!     id: u32,
//!     attempts: Vec<u32>,
//! }
//!
//! let job = Job { id: 7, attempts: vec![1; 12] };
//! let options = FormatOptions::new()
//!     .with_max_array_length(3)
//!     .with_max_length(40);
//! let text = to_string_with_options(&job, options).unwrap().unwrap();
//! assert_eq!(text, r#"{"id":7,"attempts":[1,1,1,...+9]}"#);
//! ```
//!
//! ## One-line vs. multi-line
//!
//! Output stays on one line while it fits `one_line_length` (default 80);
//! past that, an indented rendering is used if one is configured and it
//! fits the hard ceiling. Fitting values render byte-for-byte as a plain
//! JSON encoder would.
//!
//! ## Caveat
//!
//! Omission markers travel through the encoder as reserved string literals
//! opening with a private-use character (U+E000). A user string that
//! reproduces such a literal verbatim is indistinguishable from a marker
//! and will be rewritten. Circular structures are unrepresentable in
//! [`Value`], so cycle handling is out of scope by construction.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`sample.rs`**: the kitchen-sink preview
//! - **`log_context.rs`**: bounded log lines with a redacting replacer
//!
//! Run with: `cargo run --example sample`

pub mod error;
mod fit;
pub mod macros;
pub mod map;
mod marker;
pub mod omit;
pub mod options;
mod pipeline;
pub mod ser;
pub mod value;

pub use error::{Error, Result};
pub use map::Map;
pub use omit::Omitted;
pub use options::{FormatOptions, Indent, Replacer};
pub use ser::ValueSerializer;
pub use value::{Number, Value};

use serde::Serialize;

/// Formats `value` with default options: no budgets, one line up to 80
/// chars.
///
/// Returns `None` exactly when the top-level value has no encoding (a bare
/// [`Value::Undefined`]).
///
/// # Examples
///
/// ```rust
/// use snug_json::{format, snug, Value};
///
/// assert_eq!(format(&snug!(42)), Some("42".to_string()));
/// assert_eq!(format(&snug!("hello")), Some("\"hello\"".to_string()));
/// assert_eq!(format(&Value::Undefined), None);
/// ```
#[must_use = "this returns the rendered text without modifying the value"]
pub fn format(value: &Value) -> Option<String> {
    format_with_options(value, FormatOptions::default())
}

/// Formats `value` under the given budgets.
///
/// The result is the least destructive transformation of `value` whose
/// rendering fits; see the crate docs for the stage order. Returns `None`
/// exactly when the untransformed top-level value has no encoding,
/// regardless of options.
///
/// # Examples
///
/// ```rust
/// use snug_json::{format_with_options, snug, FormatOptions};
///
/// let value = snug!({"a": 1, "b": 2, "c": 3});
///
/// // fits as-is
/// let text = format_with_options(&value, FormatOptions::new()).unwrap();
/// assert_eq!(text, r#"{"a":1,"b":2,"c":3}"#);
///
/// // squeezed into ten chars
/// let text = format_with_options(&value, FormatOptions::new().with_max_length(10)).unwrap();
/// assert_eq!(text, r#"{"a":?,..."#);
/// ```
#[must_use = "this returns the rendered text without modifying the value"]
pub fn format_with_options(value: &Value, options: FormatOptions) -> Option<String> {
    let resolved = options.resolve();
    pipeline::run(value, &resolved)
}

/// Converts any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use snug_json::to_value;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be expressed as JSON-shaped data
/// (e.g. a map with non-string, non-integer keys).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ser::ValueSerializer)
}

/// Formats any `T: Serialize` with default options.
///
/// # Errors
///
/// Returns an error if `value` cannot be converted to a [`Value`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<Option<String>>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, FormatOptions::default())
}

/// Formats any `T: Serialize` under the given budgets.
///
/// The inner `Option` mirrors [`format_with_options`]: `None` means the
/// value has no encoding (reachable through a replacer that discards the
/// root).
///
/// # Errors
///
/// Returns an error if `value` cannot be converted to a [`Value`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: FormatOptions) -> Result<Option<String>>
where
    T: ?Sized + Serialize,
{
    Ok(format_with_options(&to_value(value)?, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_primitive_values() {
        assert_eq!(format(&snug!(42)), Some("42".to_string()));
        assert_eq!(format(&snug!("hello")), Some("\"hello\"".to_string()));
        assert_eq!(format(&snug!(null)), Some("null".to_string()));
        assert_eq!(format(&snug!("")), Some("\"\"".to_string()));
    }

    #[test]
    fn test_format_absent_value() {
        assert_eq!(format(&Value::Undefined), None);
        assert_eq!(
            format_with_options(&Value::Undefined, FormatOptions::new().with_max_length(5)),
            None
        );
    }

    #[test]
    fn test_to_string_roundtrip_through_serde() {
        use serde::Serialize;

        #[derive(Serialize)]
        struct Point {
            x: i32,
            y: i32,
        }

        let text = to_string(&Point { x: 1, y: 2 }).unwrap().unwrap();
        assert_eq!(text, r#"{"x":1,"y":2}"#);
    }

    #[test]
    fn test_to_value_preserves_field_order() {
        use serde::Serialize;

        #[derive(Serialize)]
        struct Ordered {
            zebra: u8,
            apple: u8,
        }

        let value = to_value(&Ordered { zebra: 1, apple: 2 }).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["zebra", "apple"]);
    }
}
