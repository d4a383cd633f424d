//! The one way harmonizing fails: a harmony that never became a color.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[+-]?(?:\d+\.?\d*|\.\d+)(?:e[+-]?\d+)?\s*%?$").expect("numeric pattern is valid")
});

/// What an unresolved harmony value looked like, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Empty or whitespace-only input.
    Null,
    /// A number or percentage literal, e.g. `42` or `16%`.
    Number,
    /// Any other text: typically a transform name nobody registered.
    String,
}

impl ValueKind {
    /// Classify raw harmony text.
    #[must_use]
    pub fn of(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            Self::Null
        } else if NUMERIC.is_match(text) {
            Self::Number
        } else {
            Self::String
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Null => "null",
            Self::Number => "number",
            Self::String => "string",
        })
    }
}

/// The harmony input did not resolve to a color.
///
/// Raised when a transform name is not in the registry. Deterministic, so
/// retrying with the same input fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("value `{value}` of kind {kind} is not a valid color for harmonizing")]
pub struct InvalidHarmonyError {
    /// The offending harmony value, as given.
    pub value: String,
    /// What the value looked like.
    pub kind: ValueKind,
}

impl InvalidHarmonyError {
    /// Build the error for a harmony value that resolved to nothing.
    #[must_use]
    pub fn unresolved(value: &str) -> Self {
        Self {
            value: value.to_owned(),
            kind: ValueKind::of(value),
        }
    }
}
