//! Account lifetime intervals
//!
//! A `TimeRange` has a required start and an optional end. An unset end means
//! the interval is still open.

use chrono::{DateTime, Utc};
use std::fmt;

use super::field_error::{FieldError, FieldErrorKind};
use super::nullable_time::{is_zero, NullableTime};

/// An interval with a required start and an optional end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TimeRange {
    pub(crate) start: NullableTime,
    pub(crate) end: NullableTime,
}

impl TimeRange {
    /// Create a range starting at `start` with no end
    pub fn starting_at(start: DateTime<Utc>) -> Result<Self, FieldErrorKind> {
        let mut range = Self::default();
        range.set_start(start)?;
        Ok(range)
    }

    pub fn start(&self) -> NullableTime {
        self.start
    }

    pub fn end(&self) -> NullableTime {
        self.end
    }

    /// Set the start of the range. The zero timestamp is rejected.
    pub fn set_start(&mut self, time: DateTime<Utc>) -> Result<(), FieldErrorKind> {
        if is_zero(&time) {
            return Err(FieldErrorKind::ZeroDateOpened);
        }
        self.start = NullableTime::new(time);
        Ok(())
    }

    /// Set the end of the range.
    ///
    /// Rejects the zero timestamp and anything strictly before the current
    /// start.
    pub fn set_end(&mut self, time: DateTime<Utc>) -> Result<(), FieldErrorKind> {
        if is_zero(&time) {
            return Err(FieldErrorKind::ZeroValidDateClosed);
        }
        if time < self.start.time {
            return Err(FieldErrorKind::DateClosedBeforeDateOpened);
        }
        self.end = NullableTime::new(time);
        Ok(())
    }

    /// Returns true if `time` is not before the start and, when the range is
    /// closed, not after the end. Both ends are inclusive.
    pub fn contains(&self, time: DateTime<Utc>) -> bool {
        if time < self.start.time {
            return false;
        }
        !self.end.valid || time <= self.end.time
    }

    /// Check every range rule, collecting all failures in a fixed order.
    pub fn validate(&self) -> Result<(), FieldError> {
        let mut err = FieldError::new();
        if !self.start.valid || is_zero(&self.start.time) {
            err.push(FieldErrorKind::ZeroDateOpened);
        }
        if self.end.valid && is_zero(&self.end.time) {
            err.push(FieldErrorKind::ZeroValidDateClosed);
        }
        if self.end.valid && self.end.time < self.start.time {
            err.push(FieldErrorKind::DateClosedBeforeDateOpened);
        }
        err.into_result()
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end.get() {
            Some(end) => write!(f, "[{} .. {}]", self.start, end.to_rfc3339()),
            None => write!(f, "[{} .. open)", self.start),
        }
    }
}
