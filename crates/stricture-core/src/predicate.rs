//! # Predicate — Opaque Function Constraint
//!
//! `Predicate` stores an arbitrary function from candidate to `bool` and an
//! optional diagnostic name. The function is invoked as-is at check time;
//! the constraint makes no guarantee about its cost or side effects and
//! does not catch its panics.
//!
//! ## Design
//!
//! The function is a plain `fn` pointer, not a boxed closure: predicates
//! stay `Copy`, allocation-free, and comparable (by pointer address, which
//! is conservative equality, not behavioral equivalence). The ready-made
//! predicates cover the common string and float checks so field authors do
//! not hand-write them; complements ship as named predicates (`not_nan`)
//! because `fn` pointers cannot be wrapped anonymously without allocation.

use serde::ser::SerializeStruct;
use serde::Serialize;

/// Arbitrary predicate constraint: a candidate satisfies it when the stored
/// function returns `true`.
///
/// # Examples
///
/// ```
/// use stricture_core::Predicate;
///
/// fn even(value: &i64) -> bool {
///     value % 2 == 0
/// }
///
/// let p = Predicate::named("even", even);
/// assert!(p.satisfies(&4));
/// assert!(!p.satisfies(&3));
/// ```
pub struct Predicate<T> {
    func: fn(&T) -> bool,
    name: Option<&'static str>,
}

impl<T> Predicate<T> {
    /// Wraps a function with no diagnostic name.
    pub fn new(func: fn(&T) -> bool) -> Self {
        Self { func, name: None }
    }

    /// Wraps a function with a diagnostic name for `Display` and
    /// serialization.
    pub fn named(name: &'static str, func: fn(&T) -> bool) -> Self {
        Self {
            func,
            name: Some(name),
        }
    }

    /// The diagnostic name, if one was given.
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// Invokes the stored function on the candidate. Panics raised by the
    /// function propagate unchanged.
    pub fn satisfies(&self, candidate: &T) -> bool {
        (self.func)(candidate)
    }
}

// ─── Ready-made string predicates ───────────────────────────────────

impl<T: AsRef<str>> Predicate<T> {
    /// Every cased character is lowercase and at least one cased character
    /// is present.
    pub fn lowercase() -> Self {
        fn check<T: AsRef<str>>(value: &T) -> bool {
            let mut cased = false;
            for c in value.as_ref().chars() {
                if c.is_uppercase() {
                    return false;
                }
                if c.is_lowercase() {
                    cased = true;
                }
            }
            cased
        }
        Self::named("lowercase", check::<T>)
    }

    /// Every cased character is uppercase and at least one cased character
    /// is present.
    pub fn uppercase() -> Self {
        fn check<T: AsRef<str>>(value: &T) -> bool {
            let mut cased = false;
            for c in value.as_ref().chars() {
                if c.is_lowercase() {
                    return false;
                }
                if c.is_uppercase() {
                    cased = true;
                }
            }
            cased
        }
        Self::named("uppercase", check::<T>)
    }

    /// Non-empty and every character is an ASCII digit.
    pub fn ascii_digits() -> Self {
        fn check<T: AsRef<str>>(value: &T) -> bool {
            let s = value.as_ref();
            !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
        }
        Self::named("ascii_digits", check::<T>)
    }

    /// Every character is ASCII. The empty string qualifies.
    pub fn ascii() -> Self {
        fn check<T: AsRef<str>>(value: &T) -> bool {
            value.as_ref().is_ascii()
        }
        Self::named("ascii", check::<T>)
    }
}

// ─── Ready-made float predicates ────────────────────────────────────

impl Predicate<f64> {
    /// Neither infinite nor NaN.
    pub fn finite() -> Self {
        fn check(value: &f64) -> bool {
            value.is_finite()
        }
        Self::named("finite", check)
    }

    /// Positive or negative infinity.
    pub fn infinite() -> Self {
        fn check(value: &f64) -> bool {
            value.is_infinite()
        }
        Self::named("infinite", check)
    }

    /// NaN.
    pub fn nan() -> Self {
        fn check(value: &f64) -> bool {
            value.is_nan()
        }
        Self::named("nan", check)
    }

    /// Infinite or NaN.
    pub fn not_finite() -> Self {
        fn check(value: &f64) -> bool {
            !value.is_finite()
        }
        Self::named("not_finite", check)
    }

    /// Anything but infinity, NaN included.
    pub fn not_infinite() -> Self {
        fn check(value: &f64) -> bool {
            !value.is_infinite()
        }
        Self::named("not_infinite", check)
    }

    /// Anything but NaN, infinity included.
    pub fn not_nan() -> Self {
        fn check(value: &f64) -> bool {
            !value.is_nan()
        }
        Self::named("not_nan", check)
    }
}

// Manual impls: derives would demand the bounds on `T`, but the fields are
// a pointer and a static str regardless of `T`.

impl<T> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Predicate<T> {}

impl<T> std::fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predicate")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<T> PartialEq for Predicate<T> {
    /// Pointer identity plus name, not behavioral equivalence: equality is
    /// conservative and may distinguish predicates that behave identically.
    fn eq(&self, other: &Self) -> bool {
        self.func as usize == other.func as usize && self.name == other.name
    }
}

impl<T> Eq for Predicate<T> {}

impl<T> std::hash::Hash for Predicate<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        (self.func as usize).hash(state);
        self.name.hash(state);
    }
}

impl<T> std::fmt::Display for Predicate<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name {
            Some(name) => write!(f, "predicate {name}"),
            None => f.write_str("predicate"),
        }
    }
}

impl<T> Serialize for Predicate<T> {
    /// Serializes the diagnostic name only. The function itself has no
    /// serial form, so predicates do not deserialize.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Predicate", 1)?;
        state.serialize_field("name", &self.name)?;
        state.end()
    }
}
