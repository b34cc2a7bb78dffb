//! # Textstore
//!
//! Entry point and configuration for the textstore persistence core: wires
//! the search index client and the persistence services from environment
//! configuration.

pub mod config;

pub use config::Dependencies;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use textstore_repository::RepositoryError;
use textstore_service::ServiceError;

/// Errors that can occur during initialization or operation of the store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Repository error.
    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),

    /// Service error.
    #[error("Service error: {0}")]
    ServiceError(#[from] ServiceError),
}

impl StoreError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}

/// Initialize the tracing subscriber from the `RUST_LOG` environment
/// variable. Call once at process startup.
pub fn init_telemetry() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}
