//! # Constraint Taxonomy — One Enum Over Every Kind
//!
//! `Constraint<T>` is the tagged union carried by field declarations: every
//! atomic kind plus the two composites, so an attached list can mix both
//! shapes. `CompositeConstraint` is the capability that turns a composite
//! into its ordered atomic equivalent.
//!
//! ## Design
//!
//! The enum deliberately has no unified `satisfies`. The kinds demand
//! different candidate capabilities (ordering, divisibility, measure,
//! zone), and a single method would need all of them at once, excluding
//! every real candidate type. Validation consumers match on the variant
//! and call that kind's `satisfies` where their candidate supports it;
//! [`Constraint::expanded`] and [`Constraint::flatten`] normalize away the
//! composite shapes first when the consumer prefers atomic-only input.

use serde::Serialize;

use crate::bound::{GreaterOrEqual, GreaterThan, Interval, LessOrEqual, LessThan};
use crate::error::ConstraintError;
use crate::info::{Documentation, Unit};
use crate::kind::ConstraintKind;
use crate::length::{LengthBounds, MaxLength, MinLength};
use crate::multiple::MultipleOf;
use crate::pattern::RegexMatch;
use crate::predicate::Predicate;
use crate::temporal::TimezoneRequirement;

// ─── Composite capability ───────────────────────────────────────────

/// Decomposition of a composite constraint into atomic constraints.
///
/// `expand` is pure, deterministic, and restartable: every call yields a
/// fresh, independent, structurally identical sequence, in a fixed order
/// consumers may rely on for diagnostics. The produced sequence contains
/// atomic constraints only; a composite that cannot decompose is a
/// modeling defect, and this trait gives it nowhere to hide.
///
/// Custom composites implement the trait directly:
///
/// ```
/// use stricture_core::{CompositeConstraint, Constraint};
///
/// struct Percentage;
///
/// impl CompositeConstraint<i64> for Percentage {
///     fn expand(&self) -> Vec<Constraint<i64>> {
///         vec![Constraint::greater_or_equal(0), Constraint::less_or_equal(100)]
///     }
/// }
///
/// assert_eq!(Percentage.expand().len(), 2);
/// ```
///
/// Claiming the capability without an expansion rule does not compile:
///
/// ```compile_fail
/// use stricture_core::{CompositeConstraint, Constraint};
///
/// struct NonZeroWindow;
///
/// impl CompositeConstraint<i64> for NonZeroWindow {}
/// ```
pub trait CompositeConstraint<T> {
    /// Expands to the equivalent ordered sequence of atomic constraints.
    fn expand(&self) -> Vec<Constraint<T>>;
}

// ─── Constraint enum ────────────────────────────────────────────────

/// One constraint of any kind, atomic or composite, over a field of type
/// `T`.
///
/// Values are immutable after construction and compare structurally. The
/// serialized form is externally tagged with the same snake_case names as
/// [`ConstraintKind`]; deserialization is not provided because the
/// [`Predicate`] kind stores a function with no serial form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint<T> {
    /// value > bound
    GreaterThan(GreaterThan<T>),
    /// value >= bound
    GreaterOrEqual(GreaterOrEqual<T>),
    /// value < bound
    LessThan(LessThan<T>),
    /// value <= bound
    LessOrEqual(LessOrEqual<T>),
    /// value is an integer multiple of the divisor
    MultipleOf(MultipleOf<T>),
    /// length(value) >= min
    MinLength(MinLength),
    /// length(value) <= max
    MaxLength(MaxLength),
    /// pattern fully matches value
    RegexMatch(RegexMatch),
    /// timezone presence or identity of value
    Timezone(TimezoneRequirement),
    /// stored function returns true for value
    Predicate(Predicate<T>),
    /// documentation-only unit label
    Unit(Unit),
    /// documentation-only free text
    Documentation(Documentation),
    /// composite: any subset of the four comparison bounds
    Interval(Interval<T>),
    /// composite: minimum and optional maximum length
    LengthBounds(LengthBounds),
}

impl<T> Constraint<T> {
    /// Strict lower bound constraint.
    pub fn greater_than(bound: T) -> Self {
        Self::GreaterThan(GreaterThan::new(bound))
    }

    /// Inclusive lower bound constraint.
    pub fn greater_or_equal(bound: T) -> Self {
        Self::GreaterOrEqual(GreaterOrEqual::new(bound))
    }

    /// Strict upper bound constraint.
    pub fn less_than(bound: T) -> Self {
        Self::LessThan(LessThan::new(bound))
    }

    /// Inclusive upper bound constraint.
    pub fn less_or_equal(bound: T) -> Self {
        Self::LessOrEqual(LessOrEqual::new(bound))
    }

    /// Divisibility constraint.
    pub fn multiple_of(divisor: T) -> Self {
        Self::MultipleOf(MultipleOf::new(divisor))
    }

    /// Minimum length constraint.
    pub fn min_length(min: usize) -> Self {
        Self::MinLength(MinLength::new(min))
    }

    /// Maximum length constraint.
    pub fn max_length(max: usize) -> Self {
        Self::MaxLength(MaxLength::new(max))
    }

    /// Full-match regex constraint; fails on an invalid pattern.
    pub fn regex_match(pattern: impl Into<String>) -> Result<Self, ConstraintError> {
        Ok(Self::RegexMatch(RegexMatch::new(pattern)?))
    }

    /// Arbitrary predicate constraint.
    pub fn predicate(func: fn(&T) -> bool) -> Self {
        Self::Predicate(Predicate::new(func))
    }

    /// Documentation-only unit label.
    pub fn unit(label: impl Into<String>) -> Self {
        Self::Unit(Unit::new(label))
    }

    /// Documentation-only free text.
    pub fn documentation(text: impl Into<String>) -> Self {
        Self::Documentation(Documentation::new(text))
    }

    /// The kind tag of this constraint.
    pub fn kind(&self) -> ConstraintKind {
        match self {
            Self::GreaterThan(_) => ConstraintKind::GreaterThan,
            Self::GreaterOrEqual(_) => ConstraintKind::GreaterOrEqual,
            Self::LessThan(_) => ConstraintKind::LessThan,
            Self::LessOrEqual(_) => ConstraintKind::LessOrEqual,
            Self::MultipleOf(_) => ConstraintKind::MultipleOf,
            Self::MinLength(_) => ConstraintKind::MinLength,
            Self::MaxLength(_) => ConstraintKind::MaxLength,
            Self::RegexMatch(_) => ConstraintKind::RegexMatch,
            Self::Timezone(_) => ConstraintKind::Timezone,
            Self::Predicate(_) => ConstraintKind::Predicate,
            Self::Unit(_) => ConstraintKind::Unit,
            Self::Documentation(_) => ConstraintKind::Documentation,
            Self::Interval(_) => ConstraintKind::Interval,
            Self::LengthBounds(_) => ConstraintKind::LengthBounds,
        }
    }

    /// Returns `true` for the composite variants.
    pub fn is_composite(&self) -> bool {
        self.kind().is_composite()
    }

    /// Returns `true` for the atomic variants.
    pub fn is_atomic(&self) -> bool {
        self.kind().is_atomic()
    }
}

impl<T: Clone> Constraint<T> {
    /// Normalizes this constraint to atomic form: a composite is replaced
    /// by its expansion, an atomic constraint by a one-element sequence
    /// holding a copy of itself.
    pub fn expanded(&self) -> Vec<Constraint<T>> {
        match self {
            Self::Interval(interval) => interval.expand(),
            Self::LengthBounds(bounds) => {
                <LengthBounds as CompositeConstraint<T>>::expand(bounds)
            }
            atomic => vec![atomic.clone()],
        }
    }

    /// Normalizes a whole constraint list to atomic form, preserving list
    /// order and each composite's expansion order.
    pub fn flatten(constraints: &[Constraint<T>]) -> Vec<Constraint<T>> {
        constraints.iter().flat_map(Self::expanded).collect()
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Constraint<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use std::fmt::Display;
        match self {
            Self::GreaterThan(c) => Display::fmt(c, f),
            Self::GreaterOrEqual(c) => Display::fmt(c, f),
            Self::LessThan(c) => Display::fmt(c, f),
            Self::LessOrEqual(c) => Display::fmt(c, f),
            Self::MultipleOf(c) => Display::fmt(c, f),
            Self::MinLength(c) => Display::fmt(c, f),
            Self::MaxLength(c) => Display::fmt(c, f),
            Self::RegexMatch(c) => Display::fmt(c, f),
            Self::Timezone(c) => Display::fmt(c, f),
            Self::Predicate(c) => Display::fmt(c, f),
            Self::Unit(c) => Display::fmt(c, f),
            Self::Documentation(c) => Display::fmt(c, f),
            Self::Interval(c) => Display::fmt(c, f),
            Self::LengthBounds(c) => Display::fmt(c, f),
        }
    }
}

// ─── Lifting the kind structs into the enum ─────────────────────────

impl<T> From<GreaterThan<T>> for Constraint<T> {
    fn from(c: GreaterThan<T>) -> Self {
        Self::GreaterThan(c)
    }
}

impl<T> From<GreaterOrEqual<T>> for Constraint<T> {
    fn from(c: GreaterOrEqual<T>) -> Self {
        Self::GreaterOrEqual(c)
    }
}

impl<T> From<LessThan<T>> for Constraint<T> {
    fn from(c: LessThan<T>) -> Self {
        Self::LessThan(c)
    }
}

impl<T> From<LessOrEqual<T>> for Constraint<T> {
    fn from(c: LessOrEqual<T>) -> Self {
        Self::LessOrEqual(c)
    }
}

impl<T> From<MultipleOf<T>> for Constraint<T> {
    fn from(c: MultipleOf<T>) -> Self {
        Self::MultipleOf(c)
    }
}

impl<T> From<MinLength> for Constraint<T> {
    fn from(c: MinLength) -> Self {
        Self::MinLength(c)
    }
}

impl<T> From<MaxLength> for Constraint<T> {
    fn from(c: MaxLength) -> Self {
        Self::MaxLength(c)
    }
}

impl<T> From<RegexMatch> for Constraint<T> {
    fn from(c: RegexMatch) -> Self {
        Self::RegexMatch(c)
    }
}

impl<T> From<TimezoneRequirement> for Constraint<T> {
    fn from(c: TimezoneRequirement) -> Self {
        Self::Timezone(c)
    }
}

impl<T> From<Predicate<T>> for Constraint<T> {
    fn from(c: Predicate<T>) -> Self {
        Self::Predicate(c)
    }
}

impl<T> From<Unit> for Constraint<T> {
    fn from(c: Unit) -> Self {
        Self::Unit(c)
    }
}

impl<T> From<Documentation> for Constraint<T> {
    fn from(c: Documentation) -> Self {
        Self::Documentation(c)
    }
}

impl<T> From<Interval<T>> for Constraint<T> {
    fn from(c: Interval<T>) -> Self {
        Self::Interval(c)
    }
}

impl<T> From<LengthBounds> for Constraint<T> {
    fn from(c: LengthBounds) -> Self {
        Self::LengthBounds(c)
    }
}
