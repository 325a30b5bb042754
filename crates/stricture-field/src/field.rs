//! # Field Declarations — Constraint Attachment Point
//!
//! `FieldSpec` associates an ordered list of constraints with a named,
//! typed field. It is the in-process boundary of the vocabulary: a schema
//! author builds the declaration once, and a validation consumer retrieves
//! the list later, either raw (composites intact) or expanded to atomic
//! form, and evaluates candidates however it sees fit.
//!
//! ## Design
//!
//! Declarations are built with a consuming builder and have no setters, so
//! a `FieldSpec` is immutable once the builder chain ends. Attachment order
//! is preserved exactly; consumers may rely on it for deterministic
//! diagnostics.

use serde::Serialize;

use stricture_core::Constraint;

/// A named, typed field declaration carrying zero or more constraints.
///
/// # Examples
///
/// ```
/// use stricture_core::{Constraint, Interval};
/// use stricture_field::FieldSpec;
///
/// let score = FieldSpec::new("score")
///     .with_constraint(Interval::new().with_ge(0).with_le(100))
///     .with_constraint(Constraint::multiple_of(5))
///     .with_constraint(Constraint::documentation("rounded percentage"));
///
/// assert_eq!(score.name(), "score");
/// assert_eq!(score.constraints().len(), 3);
/// // Composites intact for consumers that understand them...
/// assert!(score.constraints()[0].is_composite());
/// // ...or normalized for consumers that do not.
/// assert!(score.atomic_constraints().iter().all(|c| c.is_atomic()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec<T> {
    name: String,
    constraints: Vec<Constraint<T>>,
}

impl<T> FieldSpec<T> {
    /// Declares a field with no constraints attached yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraints: Vec::new(),
        }
    }

    /// Appends one constraint, returning the updated declaration. Accepts
    /// any kind value directly; it is lifted into [`Constraint`] on the
    /// way in.
    pub fn with_constraint(mut self, constraint: impl Into<Constraint<T>>) -> Self {
        self.constraints.push(constraint.into());
        self
    }

    /// Appends a batch of constraints in iteration order.
    pub fn with_constraints<I>(mut self, constraints: I) -> Self
    where
        I: IntoIterator<Item = Constraint<T>>,
    {
        self.constraints.extend(constraints);
        self
    }

    /// The field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attached constraints in attachment order, composites intact.
    pub fn constraints(&self) -> &[Constraint<T>] {
        &self.constraints
    }

    /// Returns `true` when no constraint is attached.
    pub fn is_unconstrained(&self) -> bool {
        self.constraints.is_empty()
    }
}

impl<T: Clone> FieldSpec<T> {
    /// The attached constraints with every composite replaced by its
    /// expansion, preserving attachment order and each composite's
    /// expansion order.
    pub fn atomic_constraints(&self) -> Vec<Constraint<T>> {
        Constraint::flatten(&self.constraints)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for FieldSpec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)?;
        if self.constraints.is_empty() {
            return Ok(());
        }
        f.write_str(" [")?;
        for (i, constraint) in self.constraints.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{constraint}")?;
        }
        f.write_str("]")
    }
}
