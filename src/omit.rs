//! Markers for data elided during truncation.
//!
//! When the pipeline drops part of a value it leaves one of these markers
//! behind so the rendering can still say *what* was there. A marker is an
//! opaque leaf: no later transformation stage descends into one, and its
//! depth is zero.

use crate::{Map, Value};

/// A stand-in for data that was elided from the output.
///
/// Each variant carries just enough to render a one-glance summary:
///
/// | Variant | Rendering |
/// |---|---|
/// | [`Elided`](Omitted::Elided) | `...` |
/// | [`ObjectSummary`](Omitted::ObjectSummary) | `{"key":?}` or `{"key":?,...+N}` |
/// | [`ArraySummary`](Omitted::ArraySummary) | `[N]` |
/// | [`ArrayTail`](Omitted::ArrayTail) | `...+N` (as a trailing pseudo-element) |
///
/// Markers normally appear in trees built by the pipeline, but they can also
/// be placed by hand (or returned from a replacer) to pre-elide a subtree:
///
/// ```rust
/// use snug_json::{format, snug, Omitted, Value};
///
/// let value = snug!({"kept": 1, "dropped": (Value::Omitted(Omitted::Elided))});
/// assert_eq!(format(&value), Some(r#"{"kept":1,"dropped":...}"#.to_string()));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Omitted {
    /// The entire value was replaced.
    Elided,
    /// An object reduced to one representative key; `remaining` counts the
    /// other keys the object had.
    ObjectSummary { first_key: String, remaining: usize },
    /// An array reduced to its element count.
    ArraySummary { total: usize },
    /// The unrendered tail of a partially kept array; `remaining` counts the
    /// dropped elements.
    ArrayTail { remaining: usize },
}

impl Omitted {
    /// One-level summary of an object: its first key in insertion order plus
    /// the count of everything else. An empty object has nothing to
    /// summarize and stays as it is.
    pub(crate) fn summarize_object(map: &Map) -> Option<Omitted> {
        let first_key = map.keys().next()?.clone();
        Some(Omitted::ObjectSummary {
            first_key,
            remaining: map.len() - 1,
        })
    }

    /// One-level summary of an array. If the last element is already an
    /// [`Omitted::ArrayTail`] the counts merge, so elements dropped earlier
    /// are not counted twice.
    pub(crate) fn summarize_array(items: &[Value]) -> Option<Omitted> {
        let total = match items.last()? {
            Value::Omitted(Omitted::ArrayTail { remaining }) => items.len() - 1 + remaining,
            _ => items.len(),
        };
        Some(Omitted::ArraySummary { total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_summary_counts_remaining_keys() {
        let mut map = Map::new();
        map.insert("a".to_string(), Value::from(1));
        map.insert("b".to_string(), Value::from(2));
        map.insert("c".to_string(), Value::from(3));

        assert_eq!(
            Omitted::summarize_object(&map),
            Some(Omitted::ObjectSummary {
                first_key: "a".to_string(),
                remaining: 2,
            })
        );
    }

    #[test]
    fn test_empty_containers_are_not_summarized() {
        assert_eq!(Omitted::summarize_object(&Map::new()), None);
        assert_eq!(Omitted::summarize_array(&[]), None);
    }

    #[test]
    fn test_array_summary_merges_existing_tail() {
        // 5 kept elements plus a tail standing for 995 dropped ones
        let mut items: Vec<Value> = (0..5).map(Value::from).collect();
        items.push(Value::Omitted(Omitted::ArrayTail { remaining: 995 }));

        assert_eq!(
            Omitted::summarize_array(&items),
            Some(Omitted::ArraySummary { total: 1000 })
        );
    }

    #[test]
    fn test_array_summary_without_tail() {
        let items: Vec<Value> = (0..4).map(Value::from).collect();
        assert_eq!(
            Omitted::summarize_array(&items),
            Some(Omitted::ArraySummary { total: 4 })
        );
    }
}
