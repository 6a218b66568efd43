//! The escalating truncation pipeline.
//!
//! Stages run in a fixed order, each more destructive than the last, and
//! the first candidate that fits wins:
//!
//! 1. the value as given
//! 2. long strings cut to `max_string_length`
//! 3. long arrays cut to `max_array_length` plus a tail marker
//! 4. depth collapse, from the deepest level up to the root
//! 5. a forced cut of whatever is left
//!
//! Every stage feeds the next, so the transforms compose: a collapsed array
//! whose tail was already truncated reports its original element count, not
//! the truncated one. Omission markers are opaque to all stages.

use crate::fit::{self, FitOutcome};
use crate::marker;
use crate::omit::Omitted;
use crate::options::ResolvedOptions;
use crate::ser;
use crate::{Map, Value};

/// Runs the full stage chain. `None` exactly when the top-level value has
/// no encoding.
pub(crate) fn run(value: &Value, options: &ResolvedOptions) -> Option<String> {
    match fit::evaluate(value, options) {
        FitOutcome::Fits(text) => return Some(text),
        FitOutcome::Absent => return None,
        FitOutcome::TooLong => {}
    }

    let mut current = TruncateStrings {
        limit: options.max_string_length,
    }
    .visit(value);
    match fit::evaluate(&current, options) {
        FitOutcome::Fits(text) => return Some(text),
        FitOutcome::Absent => return None,
        FitOutcome::TooLong => {}
    }

    current = TruncateArrays {
        limit: options.max_array_length,
    }
    .visit(&current);
    match fit::evaluate(&current, options) {
        FitOutcome::Fits(text) => return Some(text),
        FitOutcome::Absent => return None,
        FitOutcome::TooLong => {}
    }

    let deepest = depth(&current);
    for level in (1..=deepest).rev() {
        current = CollapseBelow { level }.visit(&current);
        match fit::evaluate(&current, options) {
            FitOutcome::Fits(text) => return Some(text),
            FitOutcome::Absent => return None,
            FitOutcome::TooLong => {}
        }
    }

    // Last resort: hard cut of the flattest remaining rendering. The result
    // can overshoot a ceiling smaller than the 3-char ellipsis itself.
    let encoded = ser::encode(&current, options, false)?;
    let decoded = marker::decode(&encoded);
    let keep = options.max_length.saturating_sub(3);
    let mut cut: String = decoded.chars().take(keep).collect();
    cut.push_str("...");
    Some(cut)
}

/// Nesting depth: 0 for scalars, omission markers and empty containers,
/// otherwise one more than the deepest child.
pub(crate) fn depth(value: &Value) -> usize {
    match value {
        Value::Omitted(_) => 0,
        Value::Object(map) => map.values().map(depth).max().map_or(0, |d| d + 1),
        Value::Array(items) => items.iter().map(depth).max().map_or(0, |d| d + 1),
        _ => 0,
    }
}

/// One traversal shared by every transform: a dispatch arm per shape, with
/// omission markers treated as opaque leaves. Transforms override only the
/// arm they care about.
trait Rewrite {
    fn visit(&self, value: &Value) -> Value {
        match value {
            Value::Omitted(_) => value.clone(),
            Value::Object(map) => self.mapping(map),
            Value::Array(items) => self.sequence(items),
            other => self.scalar(other),
        }
    }

    fn scalar(&self, value: &Value) -> Value {
        value.clone()
    }

    fn mapping(&self, map: &Map) -> Value {
        Value::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), self.visit(value)))
                .collect(),
        )
    }

    fn sequence(&self, items: &[Value]) -> Value {
        Value::Array(items.iter().map(|item| self.visit(item)).collect())
    }
}

/// Stage 2: every string longer than `limit` chars is cut to `limit` chars
/// plus an ellipsis.
struct TruncateStrings {
    limit: usize,
}

impl Rewrite for TruncateStrings {
    fn scalar(&self, value: &Value) -> Value {
        match value {
            Value::String(s) if s.chars().count() > self.limit => {
                let mut cut: String = s.chars().take(self.limit).collect();
                cut.push_str("...");
                Value::String(cut)
            }
            other => other.clone(),
        }
    }
}

/// Stage 3: every array longer than `limit` keeps its first `limit`
/// elements (still visited, so nested arrays truncate too) and gains one
/// tail marker counting the dropped elements.
struct TruncateArrays {
    limit: usize,
}

impl Rewrite for TruncateArrays {
    fn sequence(&self, items: &[Value]) -> Value {
        if items.len() > self.limit {
            let mut kept: Vec<Value> = items[..self.limit]
                .iter()
                .map(|item| self.visit(item))
                .collect();
            kept.push(Value::Omitted(Omitted::ArrayTail {
                remaining: items.len() - self.limit,
            }));
            Value::Array(kept)
        } else {
            Value::Array(items.iter().map(|item| self.visit(item)).collect())
        }
    }
}

/// Stage 4: containers reached after `level - 1` descents become their
/// one-level summary; everything closer to the root is copied unchanged.
/// Empty containers are already minimal and stay as they are.
struct CollapseBelow {
    level: usize,
}

impl Rewrite for CollapseBelow {
    fn mapping(&self, map: &Map) -> Value {
        if self.level <= 1 {
            match Omitted::summarize_object(map) {
                Some(summary) => Value::Omitted(summary),
                None => Value::Object(map.clone()),
            }
        } else {
            let below = CollapseBelow {
                level: self.level - 1,
            };
            Value::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), below.visit(value)))
                    .collect(),
            )
        }
    }

    fn sequence(&self, items: &[Value]) -> Value {
        if self.level <= 1 {
            match Omitted::summarize_array(items) {
                Some(summary) => Value::Omitted(summary),
                None => Value::Array(Vec::new()),
            }
        } else {
            let below = CollapseBelow {
                level: self.level - 1,
            };
            Value::Array(items.iter().map(|item| below.visit(item)).collect())
        }
    }
}
