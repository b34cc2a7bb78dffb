//! Repository error types.
//!
//! This module defines the error taxonomy for backend storage operations.
//! Every failure carries the operation it occurred in so callers can
//! correlate logs with the surfaced error.

use thiserror::Error;

/// Errors that can occur during backend storage operations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// The caller supplied malformed search input (e.g. an empty search
    /// string). Raised before any network call is made.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// The backend could not be reached at the transport level.
    #[error("Connection error during {operation}: {message}")]
    Connection {
        operation: &'static str,
        message: String,
    },

    /// The backend answered with a non-success status.
    #[error("Backend error during {operation} (status {status}): {message}")]
    Backend {
        operation: &'static str,
        status: u16,
        message: String,
    },

    /// The backend's response could not be decoded.
    #[error("Parse error during {operation}: {message}")]
    Parse {
        operation: &'static str,
        message: String,
    },
}

impl RepositoryError {
    /// Create an invalid query error.
    pub fn invalid_query(msg: impl Into<String>) -> Self {
        Self::InvalidQuery(msg.into())
    }

    /// Create a connection error.
    pub fn connection(operation: &'static str, msg: impl Into<String>) -> Self {
        Self::Connection {
            operation,
            message: msg.into(),
        }
    }

    /// Create a backend error.
    pub fn backend(operation: &'static str, status: u16, msg: impl Into<String>) -> Self {
        Self::Backend {
            operation,
            status,
            message: msg.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(operation: &'static str, msg: impl Into<String>) -> Self {
        Self::Parse {
            operation,
            message: msg.into(),
        }
    }
}
