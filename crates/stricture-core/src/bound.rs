//! # Comparison Bounds — Ordered-Type Constraints
//!
//! The four comparison constraints (`GreaterThan`, `GreaterOrEqual`,
//! `LessThan`, `LessOrEqual`) and their composite, `Interval`. Each bound
//! stores one value of the field's type; `satisfies` compares a candidate
//! against it with the corresponding operator.
//!
//! ## Design
//!
//! Bounds are generic over the field type rather than dynamically typed.
//! `satisfies` exists only where `T: PartialOrd`, so comparing against a
//! type with no ordering is a compile error, not a runtime surprise. The
//! bound value itself is never inspected at construction: an `Interval`
//! with `gt > lt` is a legal (if unsatisfiable) value, exactly like any
//! other contradiction a field author can write.

use serde::{Deserialize, Serialize};

use crate::constraint::{CompositeConstraint, Constraint};

// ─── Atomic comparison bounds ───────────────────────────────────────

/// Strict lower bound: a candidate satisfies this constraint when it is
/// strictly greater than the stored bound.
///
/// # Examples
///
/// ```
/// use stricture_core::GreaterThan;
///
/// let gt = GreaterThan::new(4);
/// assert!(gt.satisfies(&5));
/// assert!(!gt.satisfies(&4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GreaterThan<T> {
    bound: T,
}

impl<T> GreaterThan<T> {
    /// Wraps a bound value. The bound is stored as-is; no validation is
    /// performed against any future candidate type.
    pub fn new(bound: T) -> Self {
        Self { bound }
    }

    /// Access the stored bound.
    pub fn bound(&self) -> &T {
        &self.bound
    }
}

impl<T: PartialOrd> GreaterThan<T> {
    /// Returns `true` when `candidate > bound`.
    pub fn satisfies(&self, candidate: &T) -> bool {
        *candidate > self.bound
    }
}

impl<T: std::fmt::Display> std::fmt::Display for GreaterThan<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "> {}", self.bound)
    }
}

/// Inclusive lower bound: candidate >= bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GreaterOrEqual<T> {
    bound: T,
}

impl<T> GreaterOrEqual<T> {
    /// Wraps a bound value.
    pub fn new(bound: T) -> Self {
        Self { bound }
    }

    /// Access the stored bound.
    pub fn bound(&self) -> &T {
        &self.bound
    }
}

impl<T: PartialOrd> GreaterOrEqual<T> {
    /// Returns `true` when `candidate >= bound`.
    pub fn satisfies(&self, candidate: &T) -> bool {
        *candidate >= self.bound
    }
}

impl<T: std::fmt::Display> std::fmt::Display for GreaterOrEqual<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, ">= {}", self.bound)
    }
}

/// Strict upper bound: candidate < bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LessThan<T> {
    bound: T,
}

impl<T> LessThan<T> {
    /// Wraps a bound value.
    pub fn new(bound: T) -> Self {
        Self { bound }
    }

    /// Access the stored bound.
    pub fn bound(&self) -> &T {
        &self.bound
    }
}

impl<T: PartialOrd> LessThan<T> {
    /// Returns `true` when `candidate < bound`.
    pub fn satisfies(&self, candidate: &T) -> bool {
        *candidate < self.bound
    }
}

impl<T: std::fmt::Display> std::fmt::Display for LessThan<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "< {}", self.bound)
    }
}

/// Inclusive upper bound: candidate <= bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LessOrEqual<T> {
    bound: T,
}

impl<T> LessOrEqual<T> {
    /// Wraps a bound value.
    pub fn new(bound: T) -> Self {
        Self { bound }
    }

    /// Access the stored bound.
    pub fn bound(&self) -> &T {
        &self.bound
    }
}

impl<T: PartialOrd> LessOrEqual<T> {
    /// Returns `true` when `candidate <= bound`.
    pub fn satisfies(&self, candidate: &T) -> bool {
        *candidate <= self.bound
    }
}

impl<T: std::fmt::Display> std::fmt::Display for LessOrEqual<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<= {}", self.bound)
    }
}

// ─── Interval composite ─────────────────────────────────────────────

/// Composite comparison constraint: any subset of the four bounds, each
/// independently optional.
///
/// An interval with every bound unset is legal and expands to the empty
/// sequence (no constraint). Expansion order is fixed: `gt`, `ge`, `lt`,
/// `le`, one atomic constraint per bound that is set. Consumers may rely
/// on that order for deterministic diagnostics.
///
/// # Examples
///
/// ```
/// use stricture_core::Interval;
///
/// let half_open = Interval::new().with_ge(0.5).with_le(1.0);
/// assert!(half_open.satisfies(&0.5));
/// assert!(!half_open.satisfies(&1.1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Interval<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gt: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ge: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lt: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    le: Option<T>,
}

impl<T> Interval<T> {
    /// An interval with every bound unset.
    pub fn new() -> Self {
        Self {
            gt: None,
            ge: None,
            lt: None,
            le: None,
        }
    }

    /// Sets the strict lower bound, returning the updated interval.
    pub fn with_gt(mut self, bound: T) -> Self {
        self.gt = Some(bound);
        self
    }

    /// Sets the inclusive lower bound, returning the updated interval.
    pub fn with_ge(mut self, bound: T) -> Self {
        self.ge = Some(bound);
        self
    }

    /// Sets the strict upper bound, returning the updated interval.
    pub fn with_lt(mut self, bound: T) -> Self {
        self.lt = Some(bound);
        self
    }

    /// Sets the inclusive upper bound, returning the updated interval.
    pub fn with_le(mut self, bound: T) -> Self {
        self.le = Some(bound);
        self
    }

    /// The strict lower bound, if set.
    pub fn gt(&self) -> Option<&T> {
        self.gt.as_ref()
    }

    /// The inclusive lower bound, if set.
    pub fn ge(&self) -> Option<&T> {
        self.ge.as_ref()
    }

    /// The strict upper bound, if set.
    pub fn lt(&self) -> Option<&T> {
        self.lt.as_ref()
    }

    /// The inclusive upper bound, if set.
    pub fn le(&self) -> Option<&T> {
        self.le.as_ref()
    }

    /// Returns `true` when no bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.gt.is_none() && self.ge.is_none() && self.lt.is_none() && self.le.is_none()
    }
}

impl<T: PartialOrd> Interval<T> {
    /// Returns `true` when the candidate satisfies every bound that is set.
    ///
    /// Equivalent to expanding the interval and checking each atomic
    /// constraint; bounds are tested in expansion order with short-circuit.
    pub fn satisfies(&self, candidate: &T) -> bool {
        if let Some(gt) = &self.gt {
            if !(*candidate > *gt) {
                return false;
            }
        }
        if let Some(ge) = &self.ge {
            if !(*candidate >= *ge) {
                return false;
            }
        }
        if let Some(lt) = &self.lt {
            if !(*candidate < *lt) {
                return false;
            }
        }
        if let Some(le) = &self.le {
            if !(*candidate <= *le) {
                return false;
            }
        }
        true
    }
}

impl<T: Clone> CompositeConstraint<T> for Interval<T> {
    /// Expands to the set bounds in the fixed order gt, ge, lt, le.
    fn expand(&self) -> Vec<Constraint<T>> {
        let mut atoms = Vec::new();
        if let Some(gt) = &self.gt {
            atoms.push(Constraint::GreaterThan(GreaterThan::new(gt.clone())));
        }
        if let Some(ge) = &self.ge {
            atoms.push(Constraint::GreaterOrEqual(GreaterOrEqual::new(ge.clone())));
        }
        if let Some(lt) = &self.lt {
            atoms.push(Constraint::LessThan(LessThan::new(lt.clone())));
        }
        if let Some(le) = &self.le {
            atoms.push(Constraint::LessOrEqual(LessOrEqual::new(le.clone())));
        }
        atoms
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_unbounded() {
            return f.write_str("unbounded interval");
        }
        let mut first = true;
        let mut segment = |f: &mut std::fmt::Formatter<'_>, op: &str, bound: &T| {
            let sep = if first { "" } else { ", " };
            first = false;
            write!(f, "{sep}{op} {bound}")
        };
        if let Some(gt) = &self.gt {
            segment(f, ">", gt)?;
        }
        if let Some(ge) = &self.ge {
            segment(f, ">=", ge)?;
        }
        if let Some(lt) = &self.lt {
            segment(f, "<", lt)?;
        }
        if let Some(le) = &self.le {
            segment(f, "<=", le)?;
        }
        Ok(())
    }
}
