//! # Error Types — Construction Failures
//!
//! Defines the error type for constraint construction. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! Constraints are immutable values and nothing fails after construction.
//! The only fallible operations are compiling a regex pattern, decoding a
//! pattern flag bitset, and parsing a constraint kind name, so the error
//! surface is deliberately small. Checking a candidate value never returns
//! an error: `satisfies` exists only where the candidate type supports the
//! check, which moves type mismatches to compile time.

use thiserror::Error;

/// Top-level error type for constraint construction.
#[derive(Error, Debug)]
pub enum ConstraintError {
    /// A regex pattern failed to compile.
    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// The pattern as supplied by the caller.
        pattern: String,
        /// The compiler's rejection message.
        reason: String,
    },

    /// A pattern flag bitset contained bits outside the known flags.
    #[error("unknown pattern flag bits: {bits:#06x}")]
    UnknownPatternFlags {
        /// The offending bitset.
        bits: u16,
    },

    /// A constraint kind name did not match any known kind.
    #[error("unknown constraint kind: {name:?}")]
    UnknownKind {
        /// The unrecognized name.
        name: String,
    },
}
