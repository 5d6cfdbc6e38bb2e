//! Error types for the esgate HTTP API.
//!
//! Client-facing error bodies are deliberately generic: underlying
//! Elasticsearch detail is logged server-side by the handlers and never
//! leaked to the caller.
//!
//! # Error Mapping
//!
//! | Error | HTTP Status | Body |
//! |-------|-------------|------|
//! | BadRequest | 400 | `{"error": <message>}` |
//! | InternalError | 500 | `{"error": <message>}` |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

/// The primary error type for gateway operations.
#[derive(Debug)]
pub enum RestError {
    /// Bad request - malformed input (HTTP 400).
    BadRequest {
        /// Client-facing error message.
        message: String,
    },

    /// Internal server error - backend failure (HTTP 500).
    InternalError {
        /// Client-facing error message.
        message: String,
    },
}

impl RestError {
    /// The 400 response for request bodies that do not parse as a JSON object.
    pub fn invalid_json() -> Self {
        RestError::BadRequest {
            message: "Invalid JSON".to_string(),
        }
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::BadRequest { message } => {
                write!(f, "Bad request: {}", message)
            }
            RestError::InternalError { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            RestError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            RestError::InternalError { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}

/// Result type alias for gateway operations.
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_display() {
        let err = RestError::invalid_json();
        assert_eq!(err.to_string(), "Bad request: Invalid JSON");
    }

    #[test]
    fn test_internal_error_display() {
        let err = RestError::InternalError {
            message: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "Internal error: Internal Server Error");
    }

    #[tokio::test]
    async fn test_bad_request_response() {
        let response = RestError::invalid_json().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Invalid JSON" }));
    }

    #[tokio::test]
    async fn test_internal_error_response() {
        let err = RestError::InternalError {
            message: "Error inserting data into Elasticsearch".to_string(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "error": "Error inserting data into Elasticsearch" })
        );
    }
}
