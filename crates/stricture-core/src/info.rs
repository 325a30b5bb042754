//! # Documentation-Only Metadata
//!
//! `Unit` and `Documentation` carry no predicate. They exist for external
//! tooling (schema generators, doc generators) to read; the sole contract
//! is that the payload string is preserved verbatim.

use serde::{Deserialize, Serialize};

/// Unit label for the field's value, e.g. `"m/s"` or `"USD"`.
///
/// No runtime assertion; tooling decides what to do with it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Unit {
    unit: String,
}

impl Unit {
    /// Wraps a unit label.
    pub fn new(unit: impl Into<String>) -> Self {
        Self { unit: unit.into() }
    }

    /// The unit label, verbatim.
    pub fn unit(&self) -> &str {
        &self.unit
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unit {}", self.unit)
    }
}

/// Free-text documentation for the field.
///
/// No runtime assertion; tooling decides what to do with it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Documentation {
    text: String,
}

impl Documentation {
    /// Wraps documentation text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The documentation text, verbatim.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Documentation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "doc {:?}", self.text)
    }
}
