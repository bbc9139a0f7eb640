//! Serialized form of an account
//!
//! `AccountRecord` is what accounts look like on the wire:
//!
//! ```json
//! {
//!   "Name": "Checking",
//!   "Start": "2024-01-01T00:00:00Z",
//!   "End": { "Time": "1970-01-01T00:00:00Z", "Valid": false },
//!   "Currency": "EUR"
//! }
//! ```
//!
//! Turning a record back into an [`Account`] goes through the same setters
//! as [`Account::new`] and finishes with a full validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::account::Account;
use super::currency::CurrencyCode;
use super::nullable_time::NullableTime;
use crate::error::LedgerError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccountRecord {
    pub name: String,
    pub start: DateTime<Utc>,
    #[serde(default)]
    pub end: NullableTime,
    pub currency: String,
}

impl From<Account> for AccountRecord {
    fn from(account: Account) -> Self {
        Self {
            start: account.start(),
            end: account.end(),
            currency: account.currency_code().to_string(),
            name: account.name().to_string(),
        }
    }
}

impl TryFrom<AccountRecord> for Account {
    type Error = LedgerError;

    fn try_from(record: AccountRecord) -> Result<Self, Self::Error> {
        let currency = CurrencyCode::new(&record.currency)?;
        let mut account = Account::unchecked(record.name, currency);
        account.time_range.set_start(record.start)?;
        if record.end.valid {
            account.time_range.set_end(record.end.time)?;
        }
        account.validate()?;

        tracing::debug!(name = %account.name(), "restored account from record");
        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::account::close_time;
    use crate::models::field_error::FieldErrorKind;
    use chrono::Duration;

    fn eur() -> CurrencyCode {
        CurrencyCode::new("EUR").unwrap()
    }

    #[test]
    fn test_round_trip_open_account() {
        let a = Account::new("TEST ACCOUNT", eur(), Utc::now(), vec![]).unwrap();
        let json = serde_json::to_string(&a).unwrap();
        let b: Account = serde_json::from_str(&json).unwrap();

        assert_eq!(a, b);
        assert!(b.is_open());
    }

    #[test]
    fn test_round_trip_closed_account() {
        let now = Utc::now();
        let mut a = Account::new("TEST ACCOUNT", eur(), now, vec![]).unwrap();
        let close = now + Duration::hours(48);
        close_time(close)(&mut a).unwrap();

        let json = serde_json::to_string(&a).unwrap();
        let c: Account = serde_json::from_str(&json).unwrap();

        assert_eq!(a, c, "json: {json}");
        assert!(c.end().equal_time(close));
    }

    #[test]
    fn test_field_names() {
        let a = Account::new("Checking", eur(), Utc::now(), vec![]).unwrap();
        let value = serde_json::to_value(&a).unwrap();

        assert_eq!(value["Name"], "Checking");
        assert_eq!(value["Currency"], "EUR");
        assert_eq!(value["End"]["Valid"], false);
        assert!(value["Start"].is_string());
    }

    #[test]
    fn test_missing_end_means_open() {
        let json = r#"{"Name":"Cash","Start":"2020-05-01T00:00:00Z","Currency":"GBP"}"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert!(account.is_open());
    }

    #[test]
    fn test_unset_end_time_is_discarded() {
        let json = r#"{
            "Name": "Cash",
            "Start": "2020-05-01T00:00:00Z",
            "End": {"Time": "2019-01-01T00:00:00Z", "Valid": false},
            "Currency": "GBP"
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.end(), NullableTime::null());
    }

    #[test]
    fn test_rejects_empty_name() {
        let record = AccountRecord {
            name: " ".into(),
            start: Utc::now(),
            end: NullableTime::null(),
            currency: "EUR".into(),
        };
        match Account::try_from(record) {
            Err(LedgerError::Field(fe)) => assert!(fe.contains(FieldErrorKind::EmptyName)),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_close_before_open() {
        let now = Utc::now();
        let record = AccountRecord {
            name: "Cash".into(),
            start: now,
            end: NullableTime::new(now - Duration::days(1)),
            currency: "EUR".into(),
        };
        assert!(matches!(
            Account::try_from(record),
            Err(LedgerError::Range(FieldErrorKind::DateClosedBeforeDateOpened))
        ));
    }

    #[test]
    fn test_rejects_unknown_currency() {
        let record = AccountRecord {
            name: "Cash".into(),
            start: Utc::now(),
            end: NullableTime::null(),
            currency: "QWERTYUIOP".into(),
        };
        assert!(matches!(
            Account::try_from(record),
            Err(LedgerError::Currency(_))
        ));
    }

    #[test]
    fn test_deserialize_error_carries_validation_message() {
        let json = r#"{"Name":"","Start":"2020-05-01T00:00:00Z","Currency":"EUR"}"#;
        let err = serde_json::from_str::<Account>(json).unwrap_err();
        assert!(err.to_string().contains("Name cannot be empty"));
    }
}
