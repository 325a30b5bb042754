//! # Regex Pattern — Full-Match Constraint
//!
//! `RegexMatch` stores a pattern and a flag bitset, compiles them once at
//! construction, and checks candidates with a full-string match (a match
//! that does not span the whole candidate is a failure, unlike a search).
//!
//! ## Design
//!
//! Compilation happens exactly once, in the constructor, so an invalid
//! pattern is a construction error and `satisfies` is infallible. The
//! compiled program is an implementation detail: equality, hashing, and
//! serialization see only the declarative fields (pattern and flags).
//! Patterns follow `regex-lite` syntax, with ASCII-only Perl character
//! classes.

use regex_lite::{Regex, RegexBuilder};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize};

use crate::error::ConstraintError;

// ─── Pattern flags ──────────────────────────────────────────────────

/// Bitset of regex compilation flags.
///
/// Flags combine with `|`:
///
/// ```
/// use stricture_core::PatternFlags;
///
/// let flags = PatternFlags::CASE_INSENSITIVE | PatternFlags::MULTI_LINE;
/// assert!(flags.contains(PatternFlags::CASE_INSENSITIVE));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct PatternFlags(u16);

impl PatternFlags {
    /// No flags set.
    pub const NONE: PatternFlags = PatternFlags(0);
    /// Letters match regardless of case.
    pub const CASE_INSENSITIVE: PatternFlags = PatternFlags(1);
    /// `^` and `$` match at line boundaries inside the candidate.
    pub const MULTI_LINE: PatternFlags = PatternFlags(1 << 1);
    /// `.` also matches `\n`.
    pub const DOT_MATCHES_NEW_LINE: PatternFlags = PatternFlags(1 << 2);
    /// Swap the meaning of greedy and lazy repetition.
    pub const SWAP_GREED: PatternFlags = PatternFlags(1 << 3);
    /// Ignore literal whitespace in the pattern and allow `#` comments.
    pub const IGNORE_WHITESPACE: PatternFlags = PatternFlags(1 << 4);
    /// Treat `\r\n` as a line terminator for `^`/`$` in multi-line mode.
    pub const CRLF: PatternFlags = PatternFlags(1 << 5);

    const KNOWN_BITS: u16 = 0b0011_1111;

    const FLAG_NAMES: &'static [(PatternFlags, &'static str)] = &[
        (Self::CASE_INSENSITIVE, "case_insensitive"),
        (Self::MULTI_LINE, "multi_line"),
        (Self::DOT_MATCHES_NEW_LINE, "dot_matches_new_line"),
        (Self::SWAP_GREED, "swap_greed"),
        (Self::IGNORE_WHITESPACE, "ignore_whitespace"),
        (Self::CRLF, "crlf"),
    ];

    /// The raw bitset.
    pub fn bits(self) -> u16 {
        self.0
    }

    /// Decodes a bitset, rejecting bits outside the known flags.
    pub fn from_bits(bits: u16) -> Result<Self, ConstraintError> {
        if bits & !Self::KNOWN_BITS != 0 {
            return Err(ConstraintError::UnknownPatternFlags { bits });
        }
        Ok(Self(bits))
    }

    /// Returns `true` when every flag in `other` is set in `self`.
    pub fn contains(self, other: PatternFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` when no flag is set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for PatternFlags {
    type Output = PatternFlags;

    fn bitor(self, rhs: PatternFlags) -> PatternFlags {
        PatternFlags(self.0 | rhs.0)
    }
}

impl std::fmt::Display for PatternFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let mut first = true;
        for (flag, name) in Self::FLAG_NAMES {
            if self.contains(*flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for PatternFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u16::deserialize(deserializer)?;
        PatternFlags::from_bits(bits).map_err(serde::de::Error::custom)
    }
}

// ─── RegexMatch constraint ──────────────────────────────────────────

/// Full-string regex constraint.
///
/// # Examples
///
/// ```
/// use stricture_core::RegexMatch;
///
/// let digits = RegexMatch::new(r"\d+")?;
/// assert!(digits.satisfies("123"));
/// assert!(!digits.satisfies("12a"));
/// # Ok::<(), stricture_core::ConstraintError>(())
/// ```
#[derive(Clone)]
pub struct RegexMatch {
    pattern: String,
    flags: PatternFlags,
    regex: Regex,
}

impl RegexMatch {
    /// Compiles a pattern with no flags.
    pub fn new(pattern: impl Into<String>) -> Result<Self, ConstraintError> {
        Self::with_flags(pattern, PatternFlags::NONE)
    }

    /// Compiles a pattern with the given flags.
    pub fn with_flags(
        pattern: impl Into<String>,
        flags: PatternFlags,
    ) -> Result<Self, ConstraintError> {
        let pattern = pattern.into();
        let regex = compile(&pattern, flags)?;
        Ok(Self {
            pattern,
            flags,
            regex,
        })
    }

    /// The pattern as supplied, without the full-match anchoring.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The compilation flags.
    pub fn flags(&self) -> PatternFlags {
        self.flags
    }

    /// Returns `true` when the pattern matches the entire candidate.
    pub fn satisfies(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }
}

/// Anchors with `\A`/`\z` rather than `^`/`$` so that full-match semantics
/// survive the multi-line flag.
fn compile(pattern: &str, flags: PatternFlags) -> Result<Regex, ConstraintError> {
    let anchored = format!(r"\A(?:{pattern})\z");
    RegexBuilder::new(&anchored)
        .case_insensitive(flags.contains(PatternFlags::CASE_INSENSITIVE))
        .multi_line(flags.contains(PatternFlags::MULTI_LINE))
        .dot_matches_new_line(flags.contains(PatternFlags::DOT_MATCHES_NEW_LINE))
        .swap_greed(flags.contains(PatternFlags::SWAP_GREED))
        .ignore_whitespace(flags.contains(PatternFlags::IGNORE_WHITESPACE))
        .crlf(flags.contains(PatternFlags::CRLF))
        .build()
        .map_err(|e| ConstraintError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })
}

impl std::fmt::Debug for RegexMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegexMatch")
            .field("pattern", &self.pattern)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

impl PartialEq for RegexMatch {
    /// Equality is declarative: same pattern and flags. The compiled
    /// program is derived state and does not participate.
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern && self.flags == other.flags
    }
}

impl Eq for RegexMatch {}

impl std::hash::Hash for RegexMatch {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.pattern.hash(state);
        self.flags.hash(state);
    }
}

impl std::fmt::Display for RegexMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "matches /{}/", self.pattern)
    }
}

impl Serialize for RegexMatch {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("RegexMatch", 2)?;
        state.serialize_field("pattern", &self.pattern)?;
        state.serialize_field("flags", &self.flags)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for RegexMatch {
    /// Recompiles the pattern; a pattern that no longer compiles (or flag
    /// bits outside the known set) is a deserialization error.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            pattern: String,
            #[serde(default)]
            flags: PatternFlags,
        }

        let raw = Raw::deserialize(deserializer)?;
        RegexMatch::with_flags(raw.pattern, raw.flags).map_err(serde::de::Error::custom)
    }
}
