//! Error types for the persistence service.

use thiserror::Error;

use textstore_repository::RepositoryError;

/// Errors surfaced by the persistence service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The lookup/update/delete target does not exist.
    #[error("No entity found for id {0}")]
    NotFound(String),

    /// The entity has no id after conversion. Ids are assigned by the
    /// converter or caller, never invented by the service, so this is a
    /// programming or configuration error.
    #[error("No id found for entity of type {0}")]
    MissingId(&'static str),

    /// A backend failure, passed through unchanged.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
