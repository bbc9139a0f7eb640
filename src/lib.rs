//! Account ledger - accounts, balances and the time rules between them
//!
//! An account is open from a start time until an optional close time. This
//! library validates accounts on their own and checks that balances recorded
//! against an account are dated within its open period.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: nullable timestamps, time ranges, accounts, balances and their
//!   validation errors
//! - `error`: the crate-wide error type
//! - `config`: logging configuration for the binary
//! - `cli`: command handlers for the `ledger` binary
//!
//! # Example
//!
//! ```rust
//! use account_ledger::models::{close_time, Account, Balance, CurrencyCode, Money};
//! use chrono::{Duration, Utc};
//!
//! let opened = Utc::now();
//! let closed = opened + Duration::days(30);
//! let account = Account::new(
//!     "Savings",
//!     CurrencyCode::new("EUR")?,
//!     opened,
//!     vec![close_time(closed)],
//! )?;
//!
//! account.validate_balance(&Balance::new(closed, Money::from_cents(1000)))?;
//! # Ok::<(), account_ledger::LedgerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;

pub use error::{LedgerError, LedgerResult};
