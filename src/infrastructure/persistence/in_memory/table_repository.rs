//! # In-Memory Table Repository
//!
//! In-memory implementation of [`TableRepository`].
//!
//! This implementation uses a thread-safe `HashMap` for storage. It backs
//! the unit tests and serves as the store when no database is configured.

use crate::domain::entities::AoTable;
use crate::domain::value_objects::TableId;
use crate::infrastructure::persistence::traits::{RepositoryResult, TableRepository};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`TableRepository`].
///
/// Clones share the same storage.
#[derive(Debug, Clone)]
pub struct InMemoryTableRepository {
    storage: Arc<RwLock<HashMap<TableId, AoTable>>>,
}

impl InMemoryTableRepository {
    /// Creates a new empty in-memory table repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clears all records from the repository.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        storage.clear();
    }
}

impl Default for InMemoryTableRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TableRepository for InMemoryTableRepository {
    async fn exists(&self, id: &TableId) -> RepositoryResult<bool> {
        let storage = self.storage.read().await;
        Ok(storage.contains_key(id))
    }

    async fn get(&self, id: &TableId) -> RepositoryResult<Option<AoTable>> {
        let storage = self.storage.read().await;
        Ok(storage.get(id).cloned())
    }

    async fn get_all(&self) -> RepositoryResult<Vec<AoTable>> {
        let storage = self.storage.read().await;
        let mut all: Vec<AoTable> = storage.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(all)
    }

    async fn insert(&self, table: AoTable) -> RepositoryResult<AoTable> {
        table.check_column_limits()?;

        let stored = table.with_id(TableId::generate());
        let mut storage = self.storage.write().await;
        storage.insert(stored.id, stored.clone());
        tracing::debug!(id = %stored.id, "inserted table");
        Ok(stored)
    }

    async fn update(&self, id: &TableId, table: &AoTable) -> RepositoryResult<bool> {
        table.check_column_limits()?;

        let mut storage = self.storage.write().await;
        match storage.get_mut(id) {
            Some(existing) => {
                existing.overwrite_from(table);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &TableId) -> RepositoryResult<bool> {
        let mut storage = self.storage.write().await;
        Ok(storage.remove(id).is_some())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let storage = self.storage.read().await;
        Ok(storage.len() as u64)
    }
}
