//! # Textstore Repository
//!
//! This crate provides the backend capability trait shared by every storage
//! implementation, the error taxonomy for backend failures, an in-memory
//! document store, and the HTTP client for the search index service.

pub mod elastic;
pub mod errors;
pub mod interfaces;
pub mod memory;

pub use elastic::{DateRangeFilter, ElasticClient, ElasticConfig, IndexDescriptor, QueryTemplates};
pub use errors::RepositoryError;
pub use interfaces::Repository;
pub use memory::MemoryStore;
