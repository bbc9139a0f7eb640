//! Core data models for the account ledger
//!
//! Accounts, the time ranges they are open for, and the balances recorded
//! against them, together with the validation rules that tie them together.

pub mod account;
pub mod balance;
pub mod currency;
pub mod field_error;
pub mod money;
pub mod nullable_time;
pub mod record;
pub mod time_range;

pub use account::{close_time, Account, AccountOption};
pub use balance::{Balance, BalanceDateOutOfRange};
pub use currency::{CurrencyCode, CurrencyError};
pub use field_error::{FieldError, FieldErrorKind};
pub use money::Money;
pub use nullable_time::NullableTime;
pub use record::AccountRecord;
pub use time_range::TimeRange;
