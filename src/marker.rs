//! Reserved-literal round trip for omission markers.
//!
//! The JSON writer can only emit ordinary JSON values, so omission markers
//! travel through it as reserved string literals; a second pass over the
//! encoded text rewrites each literal into the final compact notation
//! (`...`, `{"key":?,...+N}`, `[N]`, `...+N`). Keeping the rewrite textual
//! means the transformation stages never need to know how the writer spaces
//! or quotes anything.
//!
//! Reserved literals open with U+E000, a private-use code point, so a
//! collision requires user data that deliberately reproduces the full
//! literal. Such a string would be rewritten as if it were a marker; this is
//! a documented caveat rather than a guarded case. Strings that start with
//! U+E000 but do not parse as a marker pass through untouched.

use crate::Omitted;

/// Private-use prefix shared by every reserved literal.
const MARK: char = '\u{E000}';

const ELIDED_TAG: &str = "elided";
const OBJECT_TAG: &str = "object:";
const ARRAY_TAG: &str = "array:";
const TAIL_TAG: &str = "tail:";

/// The reserved string literal standing for `marker` inside encoded text.
///
/// Counts come first in the object form so that a first key containing `:`
/// cannot make the payload ambiguous.
pub(crate) fn encode(marker: &Omitted) -> String {
    match marker {
        Omitted::Elided => format!("{MARK}{ELIDED_TAG}"),
        Omitted::ObjectSummary {
            first_key,
            remaining,
        } => format!("{MARK}{OBJECT_TAG}{remaining}:{first_key}"),
        Omitted::ArraySummary { total } => format!("{MARK}{ARRAY_TAG}{total}"),
        Omitted::ArrayTail { remaining } => format!("{MARK}{TAIL_TAG}{remaining}"),
    }
}

/// Rewrites every reserved literal in `encoded` into its compact notation.
///
/// Must run before any length is measured: budgets apply to the notation
/// the caller will actually see, never to the raw literals.
pub(crate) fn decode(encoded: &str) -> String {
    let mut out = String::with_capacity(encoded.len());
    let mut rest = encoded;
    while let Some(start) = find_literal(rest) {
        out.push_str(&rest[..start]);
        let body_start = start + 1;
        match closing_quote(rest, body_start) {
            Some(end) => {
                match rewrite(&rest[body_start..end]) {
                    Some(notation) => out.push_str(&notation),
                    // Not actually a marker: keep the quoted string verbatim.
                    None => out.push_str(&rest[start..=end]),
                }
                rest = &rest[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Byte offset of the next `"` that opens a reserved literal.
///
/// The writer escapes every `"` inside string contents, so a raw quote is
/// always a string delimiter, and a delimiter directly followed by U+E000
/// can only open a marker candidate.
fn find_literal(text: &str) -> Option<usize> {
    let mut from = 0;
    while let Some(offset) = text[from..].find('"') {
        let idx = from + offset;
        if text[idx + 1..].starts_with(MARK) {
            return Some(idx);
        }
        from = idx + 1;
    }
    None
}

/// Byte offset of the unescaped `"` closing the string opened before `from`.
fn closing_quote(text: &str, from: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut i = from;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return Some(i),
            _ => i += 1,
        }
    }
    None
}

/// Compact notation for one literal body (still in writer-escaped form),
/// or `None` if the body is not a well-formed marker.
///
/// The object arm splices the captured key back between quotes verbatim, so
/// whatever escaping the writer applied to it survives the rewrite.
fn rewrite(body: &str) -> Option<String> {
    let tagged = body.strip_prefix(MARK)?;
    if tagged == ELIDED_TAG {
        return Some("...".to_string());
    }
    if let Some(payload) = tagged.strip_prefix(OBJECT_TAG) {
        let (count, first_key) = payload.split_once(':')?;
        let remaining: usize = count.parse().ok()?;
        return Some(if remaining == 0 {
            format!("{{\"{first_key}\":?}}")
        } else {
            format!("{{\"{first_key}\":?,...+{remaining}}}")
        });
    }
    if let Some(payload) = tagged.strip_prefix(ARRAY_TAG) {
        let total: usize = payload.parse().ok()?;
        return Some(format!("[{total}]"));
    }
    if let Some(payload) = tagged.strip_prefix(TAIL_TAG) {
        let remaining: usize = payload.parse().ok()?;
        return Some(format!("...+{remaining}"));
    }
    None
}
