//! # Repository Traits
//!
//! Port definitions for persistence abstraction.
//!
//! The REST layer depends only on [`TableRepository`]; concrete stores live
//! in [`in_memory`](super::in_memory) and [`postgres`](super::postgres).
//!
//! # Examples
//!
//! ```ignore
//! use ao_tables::infrastructure::persistence::TableRepository;
//!
//! async fn names(repo: &impl TableRepository) -> Vec<String> {
//!     let all = repo.get_all().await.unwrap_or_default();
//!     all.into_iter().filter_map(|t| t.name).collect()
//! }
//! ```

use crate::domain::DomainError;
use crate::domain::entities::AoTable;
use crate::domain::value_objects::TableId;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for repository operations.
///
/// Every variant is a fault: an expected outcome such as a missing record is
/// reported through the return value (`Option`, `bool`), never through this
/// type.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Query error.
    #[error("Query error: {0}")]
    Query(String),

    /// A value violates a column constraint.
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RepositoryError {
    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a query error.
    #[must_use]
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Creates a constraint violation error.
    #[must_use]
    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::Constraint(msg.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns true if this is a constraint violation.
    #[must_use]
    pub fn is_constraint(&self) -> bool {
        matches!(self, Self::Constraint(_))
    }
}

impl From<DomainError> for RepositoryError {
    fn from(err: DomainError) -> Self {
        Self::Constraint(err.to_string())
    }
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                Self::Connection(err.to_string())
            }
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                Self::Serialization(err.to_string())
            }
            other => Self::Query(other.to_string()),
        }
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository for [`AoTable`] records.
///
/// Each call stands alone: there is no transaction spanning calls, no
/// caching and no retry. Updates are full-value replacements and the last
/// writer wins.
#[async_trait]
pub trait TableRepository: Send + Sync + fmt::Debug {
    /// Returns true if a record with this id exists.
    async fn exists(&self, id: &TableId) -> RepositoryResult<bool>;

    /// Gets a record by ID.
    ///
    /// Returns `None` if the record does not exist.
    async fn get(&self, id: &TableId) -> RepositoryResult<Option<AoTable>>;

    /// Gets all records, ordered by name then id.
    ///
    /// An empty store yields an empty vector.
    async fn get_all(&self) -> RepositoryResult<Vec<AoTable>>;

    /// Inserts a record under a freshly generated id.
    ///
    /// Any id carried by `table` is discarded. Returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Constraint` if a text field exceeds its
    /// column width.
    async fn insert(&self, table: AoTable) -> RepositoryResult<AoTable>;

    /// Overwrites every non-key field of the record stored under `id`.
    ///
    /// Returns `Ok(false)` if no such record exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Constraint` if a text field exceeds its
    /// column width.
    async fn update(&self, id: &TableId, table: &AoTable) -> RepositoryResult<bool>;

    /// Deletes a record by ID.
    ///
    /// Returns `Ok(true)` if the record was deleted, `Ok(false)` if it didn't exist.
    async fn delete(&self, id: &TableId) -> RepositoryResult<bool>;

    /// Counts all records.
    async fn count(&self) -> RepositoryResult<u64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    mod repository_error {
        use super::*;

        #[test]
        fn connection_error() {
            let err = RepositoryError::connection("Connection refused");
            assert!(err.to_string().contains("Connection"));
            assert!(err.to_string().contains("refused"));
        }

        #[test]
        fn query_error() {
            let err = RepositoryError::query("Invalid SQL");
            assert!(err.to_string().contains("Query"));
            assert!(err.to_string().contains("Invalid SQL"));
        }

        #[test]
        fn domain_error_becomes_constraint() {
            let err: RepositoryError = DomainError::field_too_long("Type", 128, 129).into();
            assert!(err.is_constraint());
            assert!(err.to_string().contains("Type"));
        }

        #[test]
        fn pool_timeout_is_connection_error() {
            let err: RepositoryError = sqlx::Error::PoolTimedOut.into();
            assert!(matches!(err, RepositoryError::Connection(_)));
        }

        #[test]
        fn row_not_found_is_query_error() {
            let err: RepositoryError = sqlx::Error::RowNotFound.into();
            assert!(matches!(err, RepositoryError::Query(_)));
        }

        #[test]
        fn only_constraint_variant_is_constraint() {
            assert!(RepositoryError::constraint("Name too long").is_constraint());
            assert!(!RepositoryError::query("Invalid SQL").is_constraint());
            assert!(!RepositoryError::serialization("bad row").is_constraint());
        }

        #[test]
        fn internal_error() {
            let err = RepositoryError::internal("Unexpected state");
            assert!(err.to_string().contains("Internal"));
        }
    }
}
