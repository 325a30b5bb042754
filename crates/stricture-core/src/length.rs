//! # Length Bounds — Sized-Value Constraints
//!
//! `MinLength` and `MaxLength` bound the element count of a candidate, and
//! `LengthBounds` is their composite. Element counts come from the
//! [`Measured`] trait: strings measure Unicode scalar values (not bytes),
//! collections measure elements.
//!
//! ## Design
//!
//! Bounds are `usize`, so a negative length bound is unrepresentable and
//! construction never fails. An absent maximum means unbounded, never a
//! zero sentinel. Both bounds are inclusive.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use crate::constraint::{CompositeConstraint, Constraint};

// ─── Measurement capability ─────────────────────────────────────────

/// Element count for length constraints.
///
/// String types count Unicode scalar values so that a multi-byte character
/// contributes one to the length; collection types count elements.
pub trait Measured {
    /// Returns the element count of the value.
    fn measure(&self) -> usize;
}

impl Measured for str {
    fn measure(&self) -> usize {
        self.chars().count()
    }
}

impl Measured for String {
    fn measure(&self) -> usize {
        self.as_str().measure()
    }
}

impl<T> Measured for [T] {
    fn measure(&self) -> usize {
        self.len()
    }
}

impl<T> Measured for Vec<T> {
    fn measure(&self) -> usize {
        self.len()
    }
}

impl<T> Measured for VecDeque<T> {
    fn measure(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Measured for HashMap<K, V, S> {
    fn measure(&self) -> usize {
        self.len()
    }
}

impl<T, S> Measured for HashSet<T, S> {
    fn measure(&self) -> usize {
        self.len()
    }
}

impl<K, V> Measured for BTreeMap<K, V> {
    fn measure(&self) -> usize {
        self.len()
    }
}

impl<T> Measured for BTreeSet<T> {
    fn measure(&self) -> usize {
        self.len()
    }
}

// ─── Atomic length bounds ───────────────────────────────────────────

/// Inclusive minimum length: `length(candidate) >= min`.
///
/// # Examples
///
/// ```
/// use stricture_core::MinLength;
///
/// let min = MinLength::new(2);
/// assert!(min.satisfies("ab"));
/// assert!(!min.satisfies("a"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MinLength {
    min: usize,
}

impl MinLength {
    /// Wraps a minimum element count.
    pub fn new(min: usize) -> Self {
        Self { min }
    }

    /// The minimum element count.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Returns `true` when the candidate measures at least `min` elements.
    pub fn satisfies<V: Measured + ?Sized>(&self, candidate: &V) -> bool {
        candidate.measure() >= self.min
    }
}

impl std::fmt::Display for MinLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "length >= {}", self.min)
    }
}

/// Inclusive maximum length: `length(candidate) <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaxLength {
    max: usize,
}

impl MaxLength {
    /// Wraps a maximum element count.
    pub fn new(max: usize) -> Self {
        Self { max }
    }

    /// The maximum element count.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Returns `true` when the candidate measures at most `max` elements.
    pub fn satisfies<V: Measured + ?Sized>(&self, candidate: &V) -> bool {
        candidate.measure() <= self.max
    }
}

impl std::fmt::Display for MaxLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "length <= {}", self.max)
    }
}

// ─── LengthBounds composite ─────────────────────────────────────────

/// Composite length constraint: minimum length (default 0) and optional
/// maximum length (default unbounded).
///
/// Expands to [`MinLength`] when the minimum is greater than zero, then
/// [`MaxLength`] when a maximum is set, in that order. A default
/// `LengthBounds` therefore expands to the empty sequence.
///
/// # Examples
///
/// ```
/// use stricture_core::LengthBounds;
///
/// let short = LengthBounds::new(1, Some(3));
/// assert!(short.satisfies("ab"));
/// assert!(!short.satisfies(""));
/// assert!(!short.satisfies("abcd"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LengthBounds {
    #[serde(default)]
    min_length: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_length: Option<usize>,
}

impl LengthBounds {
    /// Builds length bounds from an inclusive minimum and an optional
    /// inclusive maximum. `None` means unbounded above.
    pub fn new(min_length: usize, max_length: Option<usize>) -> Self {
        Self {
            min_length,
            max_length,
        }
    }

    /// The inclusive minimum element count.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// The inclusive maximum element count, if bounded.
    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Returns `true` when the candidate's measure falls within the bounds.
    pub fn satisfies<V: Measured + ?Sized>(&self, candidate: &V) -> bool {
        let measured = candidate.measure();
        measured >= self.min_length && self.max_length.map_or(true, |max| measured <= max)
    }
}

impl<T> CompositeConstraint<T> for LengthBounds {
    /// Expands to `MinLength` (when the minimum is nonzero) then
    /// `MaxLength` (when a maximum is set).
    fn expand(&self) -> Vec<Constraint<T>> {
        let mut atoms = Vec::new();
        if self.min_length > 0 {
            atoms.push(Constraint::MinLength(MinLength::new(self.min_length)));
        }
        if let Some(max) = self.max_length {
            atoms.push(Constraint::MaxLength(MaxLength::new(max)));
        }
        atoms
    }
}

impl std::fmt::Display for LengthBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.max_length {
            Some(max) => write!(f, "length {}..={max}", self.min_length),
            None => write!(f, "length {}..", self.min_length),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::ConstraintKind;

    // ---- measurement ----

    #[test]
    fn test_strings_measure_chars_not_bytes() {
        assert_eq!("abc".measure(), 3);
        assert_eq!("héllo".measure(), 5);
        assert_eq!("héllo".len(), 6); // the byte count differs
        assert_eq!(String::from("日本語").measure(), 3);
        assert_eq!("".measure(), 0);
    }

    #[test]
    fn test_collections_measure_elements() {
        assert_eq!(vec![1, 2, 3].measure(), 3);
        assert_eq!([0_u8, 0, 0, 0].as_slice().measure(), 4);
        let set: BTreeSet<i32> = [1, 2].into_iter().collect();
        assert_eq!(set.measure(), 2);
        let map: HashMap<&str, i32> = [("a", 1)].into_iter().collect();
        assert_eq!(map.measure(), 1);
    }

    // ---- atomic bounds ----

    #[test]
    fn test_min_length_inclusive() {
        let min = MinLength::new(3);
        assert!(min.satisfies("abc"));
        assert!(min.satisfies("abcd"));
        assert!(!min.satisfies("ab"));
    }

    #[test]
    fn test_max_length_inclusive() {
        let max = MaxLength::new(3);
        assert!(max.satisfies("abc"));
        assert!(max.satisfies(""));
        assert!(!max.satisfies("abcd"));
    }

    #[test]
    fn test_zero_min_accepts_empty() {
        assert!(MinLength::new(0).satisfies(""));
        assert!(MinLength::new(0).satisfies::<Vec<i32>>(&vec![]));
    }

    #[test]
    fn test_bounds_over_collections() {
        let min = MinLength::new(2);
        assert!(min.satisfies(&vec![1, 2]));
        assert!(!min.satisfies(&vec![1]));
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(MinLength::new(1).to_string(), "length >= 1");
        assert_eq!(MaxLength::new(3).to_string(), "length <= 3");
    }

    // ---- length bounds composite ----

    #[test]
    fn test_length_bounds_window() {
        let bounds = LengthBounds::new(1, Some(3));
        assert!(bounds.satisfies("ab"));
        assert!(bounds.satisfies("a"));
        assert!(bounds.satisfies("abc"));
        assert!(!bounds.satisfies(""));
        assert!(!bounds.satisfies("abcd"));
    }

    #[test]
    fn test_length_bounds_unbounded_above() {
        let bounds = LengthBounds::new(2, None);
        assert!(bounds.satisfies("ab"));
        assert!(bounds.satisfies(&"a".repeat(10_000)));
        assert!(!bounds.satisfies("a"));
    }

    #[test]
    fn test_default_is_unconstrained() {
        let bounds = LengthBounds::default();
        assert_eq!(bounds.min_length(), 0);
        assert_eq!(bounds.max_length(), None);
        assert!(bounds.satisfies(""));
        let expanded: Vec<Constraint<String>> = bounds.expand();
        assert!(expanded.is_empty());
    }

    #[test]
    fn test_expansion_order_min_then_max() {
        let bounds = LengthBounds::new(1, Some(3));
        let expanded: Vec<Constraint<String>> = bounds.expand();
        assert_eq!(
            expanded,
            vec![
                Constraint::MinLength(MinLength::new(1)),
                Constraint::MaxLength(MaxLength::new(3)),
            ]
        );
    }

    #[test]
    fn test_zero_min_is_omitted_from_expansion() {
        let bounds = LengthBounds::new(0, Some(5));
        let kinds: Vec<ConstraintKind> = CompositeConstraint::<String>::expand(&bounds)
            .iter()
            .map(|c| c.kind())
            .collect();
        assert_eq!(kinds, vec![ConstraintKind::MaxLength]);
    }

    #[test]
    fn test_expansion_is_restartable() {
        let bounds = LengthBounds::new(2, Some(8));
        let first: Vec<Constraint<String>> = bounds.expand();
        let second: Vec<Constraint<String>> = bounds.expand();
        assert_eq!(first, second);
    }

    #[test]
    fn test_display_forms_composite() {
        assert_eq!(LengthBounds::new(1, Some(3)).to_string(), "length 1..=3");
        assert_eq!(LengthBounds::new(2, None).to_string(), "length 2..");
    }

    #[test]
    fn test_serde_roundtrip() {
        let bounds = LengthBounds::new(1, Some(3));
        let json = serde_json::to_string(&bounds).unwrap();
        assert_eq!(json, r#"{"min_length":1,"max_length":3}"#);
        let back: LengthBounds = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bounds);

        let unbounded = LengthBounds::new(2, None);
        assert_eq!(serde_json::to_string(&unbounded).unwrap(), r#"{"min_length":2}"#);
    }
}
