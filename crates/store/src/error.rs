//! Error types for the storage layer.
//!
//! Underlying Elasticsearch error detail is captured here and logged
//! server-side; the HTTP layer maps these to generic client-facing messages.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Backend-specific errors
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Errors originating from the Elasticsearch backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// A connection to the backend could not be established.
    #[error("connection to elasticsearch failed: {message}")]
    ConnectionFailed { message: String },

    /// The backend is reachable but reported itself unhealthy.
    #[error("elasticsearch unavailable: {message}")]
    Unavailable { message: String },

    /// A request to the backend failed.
    #[error("elasticsearch request failed: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<elasticsearch::Error>,
    },

    /// The backend returned a response we could not interpret.
    #[error("unexpected elasticsearch response: {message}")]
    InvalidResponse { message: String },
}

/// Result type alias for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;
