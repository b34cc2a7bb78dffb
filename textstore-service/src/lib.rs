//! # Textstore Service
//!
//! The generic persistence service: coordinates a DTO/entity converter and a
//! storage backend while enforcing identity and timestamp invariants. The
//! service is oblivious to which backend it is bound to.

pub mod converter;
pub mod errors;
pub mod service;

pub use converter::{DtoEntityConverter, RawTextConverter};
pub use errors::ServiceError;
pub use service::DataService;
