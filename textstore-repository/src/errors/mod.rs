//! Error types for backend repositories.

mod repository_error;

pub use repository_error::RepositoryError;
