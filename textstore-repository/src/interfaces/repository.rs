//! Backend capability trait definition.
//!
//! This module defines the minimal save/find/delete contract shared by all
//! storage implementations. The data service is written against this trait
//! and is oblivious to whether the backend is the document store or the
//! search index.

use async_trait::async_trait;

use crate::errors::RepositoryError;
use textstore_shared::Entity;

/// The minimal storage contract shared by all backend implementations.
///
/// A data service is bound to exactly one repository per entity type at
/// construction time. Implementations must be safe for concurrent use.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Store the entity under its id, replacing any previous value.
    ///
    /// Returns the stored entity. Implementations may return the input
    /// unchanged without verifying the write.
    async fn save(&self, entity: E) -> Result<E, RepositoryError>;

    /// Look up an entity by id.
    ///
    /// Absence is a normal outcome signaled with `Ok(None)`, never an error.
    async fn find_by_id(&self, id: &str) -> Result<Option<E>, RepositoryError>;

    /// Delete an entity by id.
    ///
    /// Deleting an id that was never stored is a no-op success.
    async fn delete_by_id(&self, id: &str) -> Result<(), RepositoryError>;
}

// Allow a shared backend to serve both a data service and direct callers.
#[async_trait]
impl<E: Entity + 'static, T: Repository<E> + ?Sized> Repository<E> for std::sync::Arc<T> {
    async fn save(&self, entity: E) -> Result<E, RepositoryError> {
        (**self).save(entity).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<E>, RepositoryError> {
        (**self).find_by_id(id).await
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), RepositoryError> {
        (**self).delete_by_id(id).await
    }
}
