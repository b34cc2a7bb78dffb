//! Interface definitions for backend repositories.

mod repository;

pub use repository::Repository;
