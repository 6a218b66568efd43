//! Candidate rendering and budget checks.

use crate::marker;
use crate::options::ResolvedOptions;
use crate::ser;
use crate::Value;

/// Result of testing one candidate value against the budgets.
pub(crate) enum FitOutcome {
    /// A rendering within budget; use it.
    Fits(String),
    /// Neither rendering satisfies its budget.
    TooLong,
    /// The value has no encoding at all; the overall result is absent.
    Absent,
}

/// Renders `value` both ways and picks the first rendering within budget.
///
/// The one-line form wins while it fits the aesthetic threshold, even when
/// the hard ceiling is far larger; the indented form is only accepted under
/// the hard ceiling. Markers are decoded before anything is measured, and
/// lengths count chars.
pub(crate) fn evaluate(value: &Value, options: &ResolvedOptions) -> FitOutcome {
    let Some(one_line) = ser::encode(value, options, false) else {
        return FitOutcome::Absent;
    };
    let one_line = marker::decode(&one_line);
    if one_line.chars().count() <= options.one_line_length {
        return FitOutcome::Fits(one_line);
    }

    let Some(indented) = ser::encode(value, options, true) else {
        return FitOutcome::Absent;
    };
    let indented = marker::decode(&indented);
    if indented.chars().count() <= options.max_length {
        return FitOutcome::Fits(indented);
    }

    FitOutcome::TooLong
}
