//! # Persistence Layer
//!
//! The [`TableRepository`] port and its adapters.
//!
//! ## Implementations
//!
//! - `in_memory`: `HashMap`-backed store for tests and database-less runs
//! - `postgres`: PostgreSQL store using sqlx

pub mod in_memory;
pub mod postgres;
pub mod traits;

pub use traits::{RepositoryError, RepositoryResult, TableRepository};

use crate::config::DatabaseConfig;
use in_memory::InMemoryTableRepository;
use postgres::PostgresTableRepository;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;

/// Opens the table store described by `config`.
///
/// Connects a PostgreSQL pool when a URL is set, otherwise falls back to an
/// empty in-memory store.
///
/// # Errors
///
/// Returns [`RepositoryError::Connection`] if the pool cannot be created.
pub async fn open_repository(
    config: &DatabaseConfig,
) -> RepositoryResult<Arc<dyn TableRepository>> {
    let Some(url) = config.url.as_deref() else {
        tracing::warn!("no database url configured, records will be kept in memory");
        return Ok(Arc::new(InMemoryTableRepository::new()));
    };

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(url)
        .await
        .map_err(|e| RepositoryError::connection(e.to_string()))?;

    tracing::info!(max_connections = config.max_connections, "connected to postgres");
    Ok(Arc::new(PostgresTableRepository::new(pool)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn without_url_opens_empty_in_memory_store() {
        let repo = open_repository(&DatabaseConfig::default()).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 0);
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unreachable_database_is_connection_error() {
        let config = DatabaseConfig {
            url: Some("postgres://nobody@127.0.0.1:1/none".to_string()),
            acquire_timeout_secs: 1,
            ..DatabaseConfig::default()
        };
        let err = open_repository(&config).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Connection(_)));
    }
}
