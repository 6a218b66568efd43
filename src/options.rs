//! Formatting configuration.
//!
//! [`FormatOptions`] collects the caller's budgets; [`FormatOptions::resolve`]
//! turns them into the fully-populated record the pipeline runs on, so no
//! stage ever re-derives a default.
//!
//! ## Examples
//!
//! ```rust
//! use snug_json::{format_with_options, snug, FormatOptions};
//!
//! let value = snug!({"id": 1, "payload": ["a", "b", "c"]});
//! let options = FormatOptions::new().with_max_length(24);
//! let text = format_with_options(&value, options).unwrap();
//! assert!(text.chars().count() <= 24);
//! ```

use crate::Value;

/// Default threshold under which a one-line rendering is preferred.
const DEFAULT_ONE_LINE_LENGTH: usize = 80;

/// Spacing unit for multi-line rendering, forwarded to the writer.
///
/// `Spaces(0)` and empty `Text` both mean "stay on one line", mirroring how
/// standard JSON encoders treat an empty indent.
#[derive(Clone, Debug, PartialEq)]
pub enum Indent {
    /// Indent each level by this many spaces.
    Spaces(usize),
    /// Indent each level by this exact string.
    Text(String),
}

impl Indent {
    fn unit(&self) -> String {
        match self {
            Indent::Spaces(width) => " ".repeat(*width),
            Indent::Text(text) => text.clone(),
        }
    }
}

impl From<usize> for Indent {
    fn from(width: usize) -> Self {
        Indent::Spaces(width)
    }
}

impl From<&str> for Indent {
    fn from(text: &str) -> Self {
        Indent::Text(text.to_string())
    }
}

impl From<String> for Indent {
    fn from(text: String) -> Self {
        Indent::Text(text)
    }
}

/// Hook applied to every value the writer visits that is not an omission
/// marker. Called with `""` for the root and the decimal index for array
/// elements. Returning [`Value::Undefined`] elides the member.
pub type Replacer = fn(&str, &Value) -> Value;

/// Configuration for [`crate::format_with_options`].
///
/// All fields are optional; an unset budget is unbounded.
///
/// # Examples
///
/// ```rust
/// use snug_json::FormatOptions;
///
/// let options = FormatOptions::new()
///     .with_max_length(120)
///     .with_max_string_length(32)
///     .with_max_array_length(8)
///     .with_indent(2);
/// assert_eq!(options.max_length, Some(120));
/// ```
#[derive(Clone, Debug)]
pub struct FormatOptions {
    /// Hard ceiling on the final output length, in chars.
    pub max_length: Option<usize>,
    /// Per-string truncation threshold, in chars.
    pub max_string_length: Option<usize>,
    /// Per-array element-count threshold.
    pub max_array_length: Option<usize>,
    /// Spacing unit for multi-line rendering.
    pub indent: Option<Indent>,
    /// Threshold under which the one-line rendering wins over the indented
    /// one. Defaults to 80 and is clamped to `max_length`.
    pub one_line_length: usize,
    /// Optional value-replacement hook, see [`Replacer`].
    pub replacer: Option<Replacer>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            max_length: None,
            max_string_length: None,
            max_array_length: None,
            indent: None,
            one_line_length: DEFAULT_ONE_LINE_LENGTH,
            replacer: None,
        }
    }
}

impl FormatOptions {
    /// Creates options with every budget unbounded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hard ceiling on output length.
    #[must_use]
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Sets the per-string truncation threshold.
    #[must_use]
    pub fn with_max_string_length(mut self, max_string_length: usize) -> Self {
        self.max_string_length = Some(max_string_length);
        self
    }

    /// Sets the per-array element-count threshold.
    #[must_use]
    pub fn with_max_array_length(mut self, max_array_length: usize) -> Self {
        self.max_array_length = Some(max_array_length);
        self
    }

    /// Sets the spacing unit for multi-line rendering.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snug_json::{FormatOptions, Indent};
    ///
    /// let spaces = FormatOptions::new().with_indent(4);
    /// let tabs = FormatOptions::new().with_indent("\t");
    /// assert_eq!(spaces.indent, Some(Indent::Spaces(4)));
    /// assert_eq!(tabs.indent, Some(Indent::Text("\t".to_string())));
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<Indent>) -> Self {
        self.indent = Some(indent.into());
        self
    }

    /// Sets the one-line preference threshold.
    #[must_use]
    pub fn with_one_line_length(mut self, one_line_length: usize) -> Self {
        self.one_line_length = one_line_length;
        self
    }

    /// Sets the value-replacement hook.
    #[must_use]
    pub fn with_replacer(mut self, replacer: Replacer) -> Self {
        self.replacer = Some(replacer);
        self
    }

    /// Fills every absent field with its default, producing the record the
    /// pipeline runs on.
    pub(crate) fn resolve(&self) -> ResolvedOptions {
        let max_length = self.max_length.unwrap_or(usize::MAX);
        ResolvedOptions {
            max_length,
            max_string_length: self.max_string_length.unwrap_or(usize::MAX),
            max_array_length: self.max_array_length.unwrap_or(usize::MAX),
            one_line_length: self.one_line_length.min(max_length),
            indent: self
                .indent
                .as_ref()
                .map(Indent::unit)
                .filter(|unit| !unit.is_empty()),
            replacer: self.replacer,
        }
    }
}

/// Fully-populated configuration: unbounded budgets become `usize::MAX`,
/// the one-line threshold is clamped to the hard ceiling, and the indent is
/// collapsed to the literal unit string (or nothing).
#[derive(Clone, Debug)]
pub(crate) struct ResolvedOptions {
    pub max_length: usize,
    pub max_string_length: usize,
    pub max_array_length: usize,
    pub one_line_length: usize,
    pub indent: Option<String>,
    pub replacer: Option<Replacer>,
}
