//! # Multiple-Of — Divisibility Constraint
//!
//! `MultipleOf` asserts that a candidate is an integer multiple of a stored
//! divisor. Divisibility is remainder-is-zero: `candidate % divisor == 0`.
//!
//! ## Design
//!
//! Remainder-is-zero and exact-quotient-is-integer disagree for floating
//! point divisors (`0.6 / 0.2` is not a representable integer quotient even
//! though the remainder is zero for many such pairs), so this module commits
//! to the remainder reading and does not offer the alternative. The
//! [`Divisible`] trait makes the convention explicit per candidate type and
//! keeps `%` panics out of the check: a zero divisor divides only zero.

use serde::{Deserialize, Serialize};

// ─── Divisibility capability ────────────────────────────────────────

/// Remainder-is-zero divisibility.
///
/// Implemented for the primitive integer and floating point types. The
/// contract is total: no divisor value causes a panic.
///
/// - A zero divisor divides only zero.
/// - For floats, a NaN candidate or divisor is never divisible.
pub trait Divisible {
    /// Returns `true` when `self` is an integer multiple of `divisor`.
    fn divisible_by(&self, divisor: &Self) -> bool;
}

macro_rules! impl_divisible_signed {
    ($($t:ty),* $(,)?) => {
        $(
            impl Divisible for $t {
                fn divisible_by(&self, divisor: &Self) -> bool {
                    match self.checked_rem(*divisor) {
                        Some(rem) => rem == 0,
                        None if *divisor == 0 => *self == 0,
                        // Remainder overflow (MIN % -1) is an exact division.
                        None => true,
                    }
                }
            }
        )*
    };
}

macro_rules! impl_divisible_unsigned {
    ($($t:ty),* $(,)?) => {
        $(
            impl Divisible for $t {
                fn divisible_by(&self, divisor: &Self) -> bool {
                    if *divisor == 0 {
                        return *self == 0;
                    }
                    self % divisor == 0
                }
            }
        )*
    };
}

macro_rules! impl_divisible_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Divisible for $t {
                fn divisible_by(&self, divisor: &Self) -> bool {
                    if *divisor == 0.0 {
                        return *self == 0.0;
                    }
                    self % divisor == 0.0
                }
            }
        )*
    };
}

impl_divisible_signed!(i8, i16, i32, i64, i128, isize);
impl_divisible_unsigned!(u8, u16, u32, u64, u128, usize);
impl_divisible_float!(f32, f64);

// ─── MultipleOf constraint ──────────────────────────────────────────

/// Divisibility constraint: a candidate satisfies it when the candidate is
/// an integer multiple of the stored divisor.
///
/// # Examples
///
/// ```
/// use stricture_core::MultipleOf;
///
/// let step = MultipleOf::new(3);
/// assert!(step.satisfies(&9));
/// assert!(!step.satisfies(&4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MultipleOf<T> {
    divisor: T,
}

impl<T> MultipleOf<T> {
    /// Wraps a divisor. The divisor is stored as-is, including zero; see
    /// [`Divisible`] for how a zero divisor behaves at check time.
    pub fn new(divisor: T) -> Self {
        Self { divisor }
    }

    /// Access the stored divisor.
    pub fn divisor(&self) -> &T {
        &self.divisor
    }
}

impl<T: Divisible> MultipleOf<T> {
    /// Returns `true` when the candidate is divisible by the stored divisor.
    pub fn satisfies(&self, candidate: &T) -> bool {
        candidate.divisible_by(&self.divisor)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for MultipleOf<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "multiple of {}", self.divisor)
    }
}
