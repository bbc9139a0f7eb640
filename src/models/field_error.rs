//! Field validation errors
//!
//! `FieldErrorKind` is the fixed set of rules an account or time range can
//! break. `FieldError` collects the descriptions of every broken rule, in the
//! order the checks ran.

use std::fmt;

use thiserror::Error;

/// A single validation rule that can fail
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldErrorKind {
    /// Name is empty once surrounding whitespace is removed
    #[error("Name cannot be empty")]
    EmptyName,

    /// Opened date is unset or the zero timestamp
    #[error("Opened date is zero")]
    ZeroDateOpened,

    /// Closed date is marked as set but holds the zero timestamp
    #[error("Closed date is set but zero")]
    ZeroValidDateClosed,

    /// Closed date comes before the opened date
    #[error("Closed date is before opened date")]
    DateClosedBeforeDateOpened,
}

/// Ordered collection of validation failure descriptions for one entity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldError(Vec<String>);

impl FieldError {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failed rule
    pub fn push(&mut self, kind: FieldErrorKind) {
        self.0.push(kind.to_string());
    }

    /// Append every description from another collection, keeping its order
    pub fn append(&mut self, other: FieldError) {
        self.0.extend(other.0);
    }

    /// Check whether a rule is among the recorded failures
    pub fn contains(&self, kind: FieldErrorKind) -> bool {
        let description = kind.to_string();
        self.0.iter().any(|d| *d == description)
    }

    pub fn descriptions(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Turn the accumulation into a validation outcome.
    ///
    /// Nothing recorded means the entity is valid; an empty `FieldError` is
    /// never handed back as an error.
    pub fn into_result(self) -> Result<(), FieldError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<FieldErrorKind> for FieldError {
    fn from(kind: FieldErrorKind) -> Self {
        let mut err = Self::new();
        err.push(kind);
        err
    }
}

impl FromIterator<FieldErrorKind> for FieldError {
    fn from_iter<I: IntoIterator<Item = FieldErrorKind>>(iter: I) -> Self {
        let mut err = Self::new();
        for kind in iter {
            err.push(kind);
        }
        err
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid fields: {}", self.0.join("; "))
    }
}

impl std::error::Error for FieldError {}
