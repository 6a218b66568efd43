//! Error types for the serde bridge.
//!
//! Formatting itself is total: [`crate::format`] always produces either text
//! or `None`, and never constructs an [`Error`]. Errors arise only when
//! converting foreign `Serialize` types into a [`crate::Value`] tree, where
//! the JSON data model imposes real constraints (string keys, mostly).
//!
//! ## Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//!
//! // Non-string, non-numeric map keys cannot become JSON object keys.
//! let bad: BTreeMap<Vec<u8>, u32> = BTreeMap::from([(vec![1u8], 7)]);
//! assert!(snug_json::to_value(&bad).is_err());
//! ```

use std::fmt;
use thiserror::Error;

/// Errors raised while bridging serde data into a [`crate::Value`].
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A map key that has no string representation in JSON
    #[error("map key must be a string, found {0}")]
    InvalidKey(String),

    /// Message produced by a `Serialize` implementation
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an invalid-key error naming the offending key shape.
    pub fn invalid_key(found: &str) -> Self {
        Error::InvalidKey(found.to_string())
    }

    /// Creates an error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snug_json::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
