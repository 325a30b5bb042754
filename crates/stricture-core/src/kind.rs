//! # Constraint Kind — Single Source of Truth
//!
//! Defines the `ConstraintKind` enum naming all 14 constraint kinds in the
//! vocabulary. This is the ONE definition used across the workspace. Every
//! `match` on `ConstraintKind` must be exhaustive — adding a new kind forces
//! every consumer to handle it at compile time.
//!
//! ## Design
//!
//! `ConstraintKind` is the fieldless shadow of [`Constraint`](crate::Constraint):
//! it carries no bounds or payloads, only identity. Consumers use it for
//! dispatch tables, diagnostics, and serialized tags without needing a type
//! parameter.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ConstraintError;

/// All constraint kinds in the vocabulary.
///
/// Atomic kinds carry a single irreducible check; the two composite kinds
/// (`Interval`, `LengthBounds`) decompose into ordered sequences of atomic
/// kinds and appear last in canonical order.
///
/// # Kinds
///
/// | # | Kind | Asserts |
/// |---|------|---------|
/// |  1 | GreaterThan | value > bound |
/// |  2 | GreaterOrEqual | value >= bound |
/// |  3 | LessThan | value < bound |
/// |  4 | LessOrEqual | value <= bound |
/// |  5 | MultipleOf | value is an integer multiple of divisor |
/// |  6 | MinLength | length(value) >= min |
/// |  7 | MaxLength | length(value) <= max |
/// |  8 | RegexMatch | pattern fully matches value |
/// |  9 | Timezone | timezone presence/identity of value |
/// | 10 | Predicate | stored function returns true |
/// | 11 | Unit | documentation-only unit label |
/// | 12 | Documentation | documentation-only text |
/// | 13 | Interval | composite of comparison bounds |
/// | 14 | LengthBounds | composite of length bounds |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    /// Strict lower bound (value > bound).
    GreaterThan,
    /// Inclusive lower bound (value >= bound).
    GreaterOrEqual,
    /// Strict upper bound (value < bound).
    LessThan,
    /// Inclusive upper bound (value <= bound).
    LessOrEqual,
    /// Divisibility by a stored divisor.
    MultipleOf,
    /// Minimum element count.
    MinLength,
    /// Maximum element count.
    MaxLength,
    /// Full-string regex match.
    RegexMatch,
    /// Timezone presence or identity of a datetime-like value.
    Timezone,
    /// Arbitrary stored predicate function.
    Predicate,
    /// Unit label for documentation tooling; no runtime assertion.
    Unit,
    /// Free-text documentation; no runtime assertion.
    Documentation,
    /// Composite: any subset of the four comparison bounds.
    Interval,
    /// Composite: minimum and optional maximum length.
    LengthBounds,
}

/// Total number of constraint kinds. Used for compile-time assertions.
pub const CONSTRAINT_KIND_COUNT: usize = 14;

impl ConstraintKind {
    /// Returns all 14 constraint kinds in canonical order (atomic kinds
    /// first, composites last).
    pub fn all_kinds() -> &'static [ConstraintKind] {
        &[
            Self::GreaterThan,
            Self::GreaterOrEqual,
            Self::LessThan,
            Self::LessOrEqual,
            Self::MultipleOf,
            Self::MinLength,
            Self::MaxLength,
            Self::RegexMatch,
            Self::Timezone,
            Self::Predicate,
            Self::Unit,
            Self::Documentation,
            Self::Interval,
            Self::LengthBounds,
        ]
    }

    /// Returns the snake_case string identifier for this kind.
    ///
    /// This must match the serde serialization format and the variant tags
    /// produced when serializing [`Constraint`](crate::Constraint).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GreaterThan => "greater_than",
            Self::GreaterOrEqual => "greater_or_equal",
            Self::LessThan => "less_than",
            Self::LessOrEqual => "less_or_equal",
            Self::MultipleOf => "multiple_of",
            Self::MinLength => "min_length",
            Self::MaxLength => "max_length",
            Self::RegexMatch => "regex_match",
            Self::Timezone => "timezone",
            Self::Predicate => "predicate",
            Self::Unit => "unit",
            Self::Documentation => "documentation",
            Self::Interval => "interval",
            Self::LengthBounds => "length_bounds",
        }
    }

    /// Returns `true` for the composite kinds, which decompose into ordered
    /// sequences of atomic constraints.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Interval | Self::LengthBounds)
    }

    /// Returns `true` for kinds with a single irreducible check.
    pub fn is_atomic(&self) -> bool {
        !self.is_composite()
    }

    /// Returns `true` for the documentation-only kinds, which carry no
    /// runtime assertion.
    pub fn is_documentation_only(&self) -> bool {
        matches!(self, Self::Unit | Self::Documentation)
    }
}

impl std::fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConstraintKind {
    type Err = ConstraintError;

    /// Parse a constraint kind from its snake_case string identifier.
    ///
    /// Accepts the same identifiers produced by [`ConstraintKind::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "greater_than" => Ok(Self::GreaterThan),
            "greater_or_equal" => Ok(Self::GreaterOrEqual),
            "less_than" => Ok(Self::LessThan),
            "less_or_equal" => Ok(Self::LessOrEqual),
            "multiple_of" => Ok(Self::MultipleOf),
            "min_length" => Ok(Self::MinLength),
            "max_length" => Ok(Self::MaxLength),
            "regex_match" => Ok(Self::RegexMatch),
            "timezone" => Ok(Self::Timezone),
            "predicate" => Ok(Self::Predicate),
            "unit" => Ok(Self::Unit),
            "documentation" => Ok(Self::Documentation),
            "interval" => Ok(Self::Interval),
            "length_bounds" => Ok(Self::LengthBounds),
            other => Err(ConstraintError::UnknownKind {
                name: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_kinds_count() {
        assert_eq!(ConstraintKind::all_kinds().len(), CONSTRAINT_KIND_COUNT);
        assert_eq!(ConstraintKind::all_kinds().len(), 14);
    }

    #[test]
    fn test_all_kinds_unique() {
        let kinds = ConstraintKind::all_kinds();
        let mut seen = std::collections::HashSet::new();
        for k in kinds {
            assert!(seen.insert(k), "Duplicate kind: {k}");
        }
    }

    #[test]
    fn test_composites_last_in_canonical_order() {
        let kinds = ConstraintKind::all_kinds();
        let first_composite = kinds
            .iter()
            .position(|k| k.is_composite())
            .expect("canonical order contains composites");
        assert!(
            kinds[first_composite..].iter().all(|k| k.is_composite()),
            "atomic kind found after the first composite"
        );
        assert_eq!(kinds.iter().filter(|k| k.is_composite()).count(), 2);
    }

    #[test]
    fn test_documentation_only_kinds() {
        assert!(ConstraintKind::Unit.is_documentation_only());
        assert!(ConstraintKind::Documentation.is_documentation_only());
        assert!(!ConstraintKind::GreaterThan.is_documentation_only());
        assert!(!ConstraintKind::Interval.is_documentation_only());
    }

    #[test]
    fn test_as_str_roundtrip() {
        for kind in ConstraintKind::all_kinds() {
            let s = kind.as_str();
            let parsed: ConstraintKind = s
                .parse()
                .unwrap_or_else(|e| panic!("Failed to parse {s:?}: {e}"));
            assert_eq!(*kind, parsed);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("between".parse::<ConstraintKind>().is_err());
        assert!("GreaterThan".parse::<ConstraintKind>().is_err()); // case-sensitive
        assert!("".parse::<ConstraintKind>().is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        for kind in ConstraintKind::all_kinds() {
            let json = serde_json::to_string(kind).unwrap();
            let parsed: ConstraintKind = serde_json::from_str(&json).unwrap();
            assert_eq!(*kind, parsed);
        }
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for kind in ConstraintKind::all_kinds() {
            let json = serde_json::to_string(kind).unwrap();
            let expected = format!("\"{}\"", kind.as_str());
            assert_eq!(json, expected);
        }
    }

    #[test]
    fn test_display_matches_as_str() {
        for kind in ConstraintKind::all_kinds() {
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn test_exhaustive_match_compiles() {
        // This test ensures that adding a new kind variant causes a compile
        // error here, forcing the developer to update all match arms.
        fn kind_description(k: &ConstraintKind) -> &'static str {
            match k {
                ConstraintKind::GreaterThan => "strict lower bound",
                ConstraintKind::GreaterOrEqual => "inclusive lower bound",
                ConstraintKind::LessThan => "strict upper bound",
                ConstraintKind::LessOrEqual => "inclusive upper bound",
                ConstraintKind::MultipleOf => "divisibility",
                ConstraintKind::MinLength => "minimum length",
                ConstraintKind::MaxLength => "maximum length",
                ConstraintKind::RegexMatch => "full-string regex match",
                ConstraintKind::Timezone => "timezone requirement",
                ConstraintKind::Predicate => "stored predicate",
                ConstraintKind::Unit => "unit label",
                ConstraintKind::Documentation => "free-text documentation",
                ConstraintKind::Interval => "comparison composite",
                ConstraintKind::LengthBounds => "length composite",
            }
        }
        for k in ConstraintKind::all_kinds() {
            assert!(!kind_description(k).is_empty());
        }
    }
}
