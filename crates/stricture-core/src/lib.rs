//! # stricture-core — Constraint Vocabulary for Typed Fields
//!
//! This crate is the bedrock of the stricture workspace. It defines the
//! immutable constraint descriptors that a field declaration carries as
//! metadata and that an external validation consumer reads at its leisure:
//! comparison bounds, intervals, divisibility, length bounds, regex
//! patterns, timezone requirements, predicates, and documentation-only
//! labels. There is no enforcement engine here; each atomic kind offers a
//! pure `satisfies` self-check, and what to do with a violation is the
//! consumer's business.
//!
//! ## Key Design Principles
//!
//! 1. **Per-kind structs with precise bounds.** `GreaterThan<T>` exists for
//!    any `T` but `satisfies` only where `T: PartialOrd`; length checks
//!    require [`Measured`], divisibility requires [`Divisible`], timezone
//!    checks require [`Zoned`]. A check against an unsupported candidate
//!    type is a compile error, never a runtime type error.
//!
//! 2. **One taxonomy enum.** [`Constraint`] wraps every kind, atomic and
//!    composite, so attached constraint lists can mix both shapes and every
//!    `match` over the taxonomy is exhaustive.
//!
//! 3. **Composites always decompose.** The [`CompositeConstraint`] trait
//!    requires `expand`, and expansion order is fixed (gt, ge, lt, le for
//!    intervals; min then max for length bounds). A composite type without
//!    an expansion rule does not compile.
//!
//! 4. **Construction is the only failure point.** Regex patterns compile in
//!    the constructor; length bounds are `usize`, making negative bounds
//!    unrepresentable. After construction every value is immutable shared
//!    data, safe to read from any number of threads.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `stricture-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement `Serialize`.

pub mod bound;
pub mod constraint;
pub mod error;
pub mod info;
pub mod kind;
pub mod length;
pub mod multiple;
pub mod pattern;
pub mod predicate;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use bound::{GreaterOrEqual, GreaterThan, Interval, LessOrEqual, LessThan};
pub use constraint::{CompositeConstraint, Constraint};
pub use error::ConstraintError;
pub use info::{Documentation, Unit};
pub use kind::{ConstraintKind, CONSTRAINT_KIND_COUNT};
pub use length::{LengthBounds, MaxLength, Measured, MinLength};
pub use multiple::{Divisible, MultipleOf};
pub use pattern::{PatternFlags, RegexMatch};
pub use predicate::Predicate;
pub use temporal::{TimezonePolicy, TimezoneRequirement, Zoned};
