//! # Domain Errors
//!
//! Errors raised by domain-level checks on [`AoTable`](crate::domain::entities::AoTable)
//! records.

use thiserror::Error;

/// Error type for domain rule violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A text field is longer than its column allows.
    #[error("{field} exceeds the maximum length of {max} characters (got {actual})")]
    FieldTooLong {
        /// Field name as it appears on the wire.
        field: &'static str,
        /// Maximum permitted length in characters.
        max: usize,
        /// Actual length in characters.
        actual: usize,
    },
}

impl DomainError {
    /// Creates a field-too-long error.
    #[must_use]
    pub fn field_too_long(field: &'static str, max: usize, actual: usize) -> Self {
        Self::FieldTooLong { field, max, actual }
    }
}

/// Result type for domain checks.
pub type DomainResult<T> = Result<T, DomainError>;
