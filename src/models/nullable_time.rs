//! Timestamps that may be unset
//!
//! A `NullableTime` pairs a UTC timestamp with an explicit validity flag, so
//! "no value" is distinguishable from every concrete timestamp including the
//! zero one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The zero timestamp, used as the "never initialised" sentinel
pub fn zero_time() -> DateTime<Utc> {
    DateTime::<Utc>::default()
}

/// Check whether a timestamp is the zero sentinel
pub fn is_zero(time: &DateTime<Utc>) -> bool {
    *time == zero_time()
}

/// A timestamp with a validity flag
///
/// Equality is strict: both the flag and the raw timestamp must match, even
/// when neither value is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NullableTime {
    /// The raw timestamp, meaningful only when `valid` is true
    pub time: DateTime<Utc>,

    /// Whether `time` holds a real value
    pub valid: bool,
}

impl NullableTime {
    /// A valid value wrapping `time`
    pub fn new(time: DateTime<Utc>) -> Self {
        Self { time, valid: true }
    }

    /// An unset value
    pub fn null() -> Self {
        Self::default()
    }

    /// The timestamp if set
    pub fn get(&self) -> Option<DateTime<Utc>> {
        self.valid.then_some(self.time)
    }

    /// Returns true if this value is set and represents exactly `time`.
    /// Always false for an unset value.
    pub fn equal_time(&self, time: DateTime<Utc>) -> bool {
        self.valid && self.time == time
    }
}

impl From<Option<DateTime<Utc>>> for NullableTime {
    fn from(time: Option<DateTime<Utc>>) -> Self {
        time.map(Self::new).unwrap_or_default()
    }
}

impl fmt::Display for NullableTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(time) => write!(f, "{}", time.to_rfc3339()),
            None => write!(f, "null"),
        }
    }
}
