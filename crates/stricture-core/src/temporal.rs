//! # Timezone Requirement — Datetime Awareness Constraint
//!
//! `TimezoneRequirement` asserts whether a datetime-like candidate must be
//! naive (no timezone), aware (any timezone), or aware of one exact zone.
//!
//! ## Design
//!
//! Candidates expose their zone through the [`Zoned`] trait rather than a
//! concrete chrono type, so the constraint works for `DateTime<Utc>`,
//! `DateTime<FixedOffset>`, and any other zoned representation alike.
//! Exact matching compares zone display names (`"UTC"`, `"+05:00"`); there
//! is no notion of zone object identity.

use serde::{Deserialize, Serialize};

use chrono::{DateTime, NaiveDateTime, TimeZone};

// ─── Zone capability ────────────────────────────────────────────────

/// Access to the timezone of a datetime-like value.
///
/// Implemented for chrono's naive and zoned datetime types. A naive value
/// reports `None`; a zoned value reports the display name of its offset
/// (`"UTC"` for [`chrono::Utc`], `"+05:00"` for a fixed offset).
pub trait Zoned {
    /// The zone display name, or `None` for a naive value.
    fn zone_name(&self) -> Option<String>;
}

impl Zoned for NaiveDateTime {
    fn zone_name(&self) -> Option<String> {
        None
    }
}

impl<Tz> Zoned for DateTime<Tz>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    fn zone_name(&self) -> Option<String> {
        Some(self.offset().to_string())
    }
}

// ─── Timezone requirement ───────────────────────────────────────────

/// The three timezone policies a field can require.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimezonePolicy {
    /// The candidate must carry no timezone.
    Naive,
    /// The candidate must carry some timezone; which one is irrelevant.
    AnyAware,
    /// The candidate must carry exactly the named zone.
    Exact(String),
}

/// Timezone constraint over datetime-like candidates.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use stricture_core::TimezoneRequirement;
///
/// let aware = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
/// assert!(TimezoneRequirement::any_aware().satisfies(&aware));
/// assert!(!TimezoneRequirement::naive().satisfies(&aware));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimezoneRequirement {
    policy: TimezonePolicy,
}

impl TimezoneRequirement {
    /// Requires a naive candidate.
    pub fn naive() -> Self {
        Self {
            policy: TimezonePolicy::Naive,
        }
    }

    /// Requires an aware candidate in any zone.
    pub fn any_aware() -> Self {
        Self {
            policy: TimezonePolicy::AnyAware,
        }
    }

    /// Requires an aware candidate in exactly the named zone.
    pub fn exact(zone: impl Into<String>) -> Self {
        Self {
            policy: TimezonePolicy::Exact(zone.into()),
        }
    }

    /// The required policy.
    pub fn policy(&self) -> &TimezonePolicy {
        &self.policy
    }

    /// Returns `true` when the candidate's zone satisfies the policy.
    pub fn satisfies<V: Zoned>(&self, candidate: &V) -> bool {
        match (&self.policy, candidate.zone_name()) {
            (TimezonePolicy::Naive, None) => true,
            (TimezonePolicy::Naive, Some(_)) => false,
            (TimezonePolicy::AnyAware, Some(_)) => true,
            (TimezonePolicy::AnyAware, None) => false,
            (TimezonePolicy::Exact(zone), Some(name)) => name == *zone,
            (TimezonePolicy::Exact(_), None) => false,
        }
    }
}

impl std::fmt::Display for TimezoneRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.policy {
            TimezonePolicy::Naive => f.write_str("timezone naive"),
            TimezonePolicy::AnyAware => f.write_str("timezone aware"),
            TimezonePolicy::Exact(zone) => write!(f, "timezone {zone}"),
        }
    }
}
