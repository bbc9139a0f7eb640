//! Dated balance snapshots
//!
//! Only the date of a balance matters when checking it against an account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::money::Money;
use super::time_range::TimeRange;

/// The amount held by an account at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// When the balance was recorded
    pub date: DateTime<Utc>,

    /// Amount in minor units of the owning account's currency
    #[serde(default)]
    pub amount: Money,
}

impl Balance {
    pub fn new(date: DateTime<Utc>, amount: Money) -> Self {
        Self { date, amount }
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.amount, self.date.to_rfc3339())
    }
}

/// A balance is dated outside the time range of its account
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Balance date {} is outside of account time range {account_time_range}", .balance_date.to_rfc3339())]
pub struct BalanceDateOutOfRange {
    pub balance_date: DateTime<Utc>,
    pub account_time_range: TimeRange,
}
