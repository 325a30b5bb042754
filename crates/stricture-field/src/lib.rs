//! # stricture-field — Field Declarations for Constraint Metadata
//!
//! Associates ordered constraint lists from `stricture-core` with named,
//! typed field declarations. This crate is the attachment surface of the
//! vocabulary: schema authors declare fields here, and validation consumers
//! retrieve the attached constraints, raw or expanded, to evaluate
//! candidate values.
//!
//! ## Design
//!
//! A [`FieldSpec`] is built once with a consuming builder and never
//! mutated afterwards. Retrieval offers both shapes a consumer may want:
//! the raw attachment-ordered list with composites intact, and the
//! flattened all-atomic list for consumers that do not understand
//! composites.

pub mod field;

pub use field::FieldSpec;
