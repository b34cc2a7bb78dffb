//! In-memory document store.
//!
//! A keyed-map implementation of the backend capability, used as the
//! document-store backend in tests and local development. The real document
//! store is an external collaborator reached through the same trait.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::RepositoryError;
use crate::interfaces::Repository;
use textstore_shared::Entity;

/// A thread-safe in-memory repository keyed by entity id.
#[derive(Debug, Default)]
pub struct MemoryStore<E> {
    records: RwLock<HashMap<String, E>>,
}

impl<E: Entity> MemoryStore<E> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Number of records currently stored.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl<E: Entity + 'static> Repository<E> for MemoryStore<E> {
    async fn save(&self, entity: E) -> Result<E, RepositoryError> {
        let id = entity
            .id()
            .ok_or_else(|| RepositoryError::invalid_query("cannot save an entity without an id"))?
            .to_string();
        self.records.write().await.insert(id.clone(), entity.clone());
        debug!(entity = E::NAME, id = %id, "Stored record in memory");
        Ok(entity)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<E>, RepositoryError> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), RepositoryError> {
        self.records.write().await.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textstore_shared::RawTextDocument;

    #[tokio::test]
    async fn save_then_find_returns_the_record() {
        let store = MemoryStore::new();
        let doc = RawTextDocument::new("id-1", "hello");

        store.save(doc.clone()).await.unwrap();
        let found = store.find_by_id("id-1").await.unwrap();

        assert_eq!(found, Some(doc));
    }

    #[tokio::test]
    async fn save_without_id_is_rejected() {
        let store = MemoryStore::new();
        let doc = RawTextDocument {
            text_content: Some("no id".to_string()),
            ..Default::default()
        };

        let result = store.save(doc).await;

        assert!(matches!(result, Err(RepositoryError::InvalidQuery(_))));
    }

    #[tokio::test]
    async fn delete_of_unknown_id_is_a_no_op() {
        let store: MemoryStore<RawTextDocument> = MemoryStore::new();

        store.delete_by_id("never-created").await.unwrap();

        assert!(store.find_by_id("never-created").await.unwrap().is_none());
    }
}
