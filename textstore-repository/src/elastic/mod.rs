//! Search index implementation of the backend capability.
//!
//! This module provides an HTTP client for the search index service. The
//! service consumes opaque query templates with positional placeholders and
//! answers with a standard hits envelope.

mod client;
mod config;
mod index;
mod queries;
mod response;
mod templates;

pub use client::ElasticClient;
pub use config::ElasticConfig;
pub use index::IndexDescriptor;
pub use queries::DateRangeFilter;
pub use templates::QueryTemplates;
