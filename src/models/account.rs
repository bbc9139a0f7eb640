//! Account model
//!
//! An account has a name, a currency and the time range it is open for.
//! Balances recorded against an account must fall within that range.
//!
//! Accounts are plain owned values. Closing one needs `&mut`, so a single
//! owner is enforced by the borrow checker and there is no internal locking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::balance::{Balance, BalanceDateOutOfRange};
use super::currency::CurrencyCode;
use super::field_error::{FieldError, FieldErrorKind};
use super::nullable_time::NullableTime;
use super::record::AccountRecord;
use super::time_range::TimeRange;
use crate::error::{LedgerError, LedgerResult};

/// A step applied to an account while it is being built by [`Account::new`]
pub type AccountOption = Box<dyn FnOnce(&mut Account) -> LedgerResult<()>>;

/// Option that closes the account at `time`
pub fn close_time(time: DateTime<Utc>) -> AccountOption {
    Box::new(move |account: &mut Account| {
        account.close(time)?;
        Ok(())
    })
}

/// A financial account
///
/// Two accounts are equal when their names, time ranges and currencies all
/// match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "AccountRecord", try_from = "AccountRecord")]
pub struct Account {
    name: String,
    pub(crate) time_range: TimeRange,
    currency: CurrencyCode,
}

impl Account {
    /// Create a new account opened at `start`
    ///
    /// Options run in order after the start is set; the first one to fail
    /// aborts construction with its own error. The assembled account is then
    /// validated and every field error is reported at once.
    pub fn new(
        name: impl Into<String>,
        currency: CurrencyCode,
        start: DateTime<Utc>,
        options: impl IntoIterator<Item = AccountOption>,
    ) -> LedgerResult<Self> {
        let mut account = Self::unchecked(name.into(), currency);
        account.time_range.set_start(start)?;
        for option in options {
            option(&mut account)?;
        }
        account.validate()?;

        tracing::debug!(
            name = %account.name,
            currency = %account.currency,
            range = %account.time_range,
            "created account"
        );
        Ok(account)
    }

    pub(crate) fn unchecked(name: String, currency: CurrencyCode) -> Self {
        Self {
            name,
            time_range: TimeRange::default(),
            currency,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn currency_code(&self) -> &CurrencyCode {
        &self.currency
    }

    pub fn time_range(&self) -> &TimeRange {
        &self.time_range
    }

    /// The time the account opened
    pub fn start(&self) -> DateTime<Utc> {
        self.time_range.start.time
    }

    /// The closing time, valid only if the account has been closed
    pub fn end(&self) -> NullableTime {
        self.time_range.end
    }

    /// Returns true if no closing time has been set
    pub fn is_open(&self) -> bool {
        !self.time_range.end.valid
    }

    /// Close the account at `time`
    pub fn close(&mut self, time: DateTime<Utc>) -> Result<(), FieldErrorKind> {
        self.time_range.set_end(time)?;
        tracing::debug!(name = %self.name, closed = %time.to_rfc3339(), "closed account");
        Ok(())
    }

    /// Check every account rule, name first and then the time range.
    pub fn validate(&self) -> Result<(), FieldError> {
        let mut err = FieldError::new();
        if self.name.trim().is_empty() {
            err.push(FieldErrorKind::EmptyName);
        }
        if let Err(range_err) = self.time_range.validate() {
            err.append(range_err);
        }
        err.into_result()
    }

    /// Check that a balance can belong to this account
    ///
    /// An invalid account is reported exactly as [`Account::validate`] would
    /// report it, and the balance is not looked at. Otherwise the balance
    /// date must lie within the account's time range, or be exactly the
    /// closing time.
    pub fn validate_balance(&self, balance: &Balance) -> LedgerResult<()> {
        self.validate()?;

        let at_close = self.time_range.end.equal_time(balance.date);
        if !self.time_range.contains(balance.date) && !at_close {
            tracing::debug!(
                name = %self.name,
                date = %balance.date.to_rfc3339(),
                range = %self.time_range,
                "balance outside account time range"
            );
            return Err(LedgerError::BalanceOutOfRange(BalanceDateOutOfRange {
                balance_date: balance.date,
                account_time_range: self.time_range,
            }));
        }
        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) {}", self.name, self.currency, self.time_range)
    }
}
