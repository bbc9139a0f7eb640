//! Custom error types for the account ledger
//!
//! This module defines the crate-wide error enum using thiserror. Validation
//! failures keep their own types (`FieldError`, `BalanceDateOutOfRange`, ...)
//! and are carried transparently so callers can match on the variant while
//! still seeing the original message.

use thiserror::Error;

use crate::models::balance::BalanceDateOutOfRange;
use crate::models::currency::CurrencyError;
use crate::models::field_error::{FieldError, FieldErrorKind};

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// One or more fields of an entity failed validation
    #[error(transparent)]
    Field(#[from] FieldError),

    /// A time range setter rejected a timestamp
    #[error(transparent)]
    Range(#[from] FieldErrorKind),

    /// A balance is dated outside its account's time range
    #[error(transparent)]
    BalanceOutOfRange(#[from] BalanceDateOutOfRange),

    /// The currency collaborator did not recognise a code
    #[error(transparent)]
    Currency(#[from] CurrencyError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed user input (timestamps, amounts)
    #[error("Invalid input: {0}")]
    Input(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),
}

impl LedgerError {
    /// Check if this is an entity validation error
    pub fn is_field_error(&self) -> bool {
        matches!(self, Self::Field(_))
    }

    /// Check if this is a balance boundary violation
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::BalanceOutOfRange(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for LedgerError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Input("bad date".into());
        assert_eq!(err.to_string(), "Invalid input: bad date");
    }

    #[test]
    fn test_range_error_is_transparent() {
        let err: LedgerError = FieldErrorKind::ZeroDateOpened.into();
        assert_eq!(err.to_string(), FieldErrorKind::ZeroDateOpened.to_string());
        assert!(!err.is_field_error());
    }

    #[test]
    fn test_field_error_variant() {
        let err: LedgerError = FieldError::from(FieldErrorKind::EmptyName).into();
        assert!(err.is_field_error());
        assert!(!err.is_out_of_range());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ledger_err: LedgerError = io_err.into();
        assert!(matches!(ledger_err, LedgerError::Io(_)));
    }
}
