//! Health check endpoint handlers.
//!
//! Provides simple health and probe endpoints for monitoring and load
//! balancers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use esgate_store::DocumentStore;
use tracing::debug;

use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// # HTTP Request
///
/// `GET [base]/health`
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> Response
where
    S: DocumentStore,
{
    debug!("Processing health check request");

    let body = serde_json::json!({
        "status": "healthy",
        "backend": state.store().backend_name(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    (StatusCode::OK, Json(body)).into_response()
}

/// Handler for a liveness probe.
///
/// # HTTP Request
///
/// `GET [base]/_liveness`
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}

/// Handler for a readiness probe.
///
/// Pings the backend cluster; returns 503 if it is unreachable or red.
///
/// # HTTP Request
///
/// `GET [base]/_readiness`
pub async fn readiness_handler<S>(State(state): State<AppState<S>>) -> Response
where
    S: DocumentStore,
{
    debug!("Processing readiness check request");

    match state.store().ping().await {
        Ok(()) => {
            let body = serde_json::json!({
                "status": "ready",
                "backend": state.store().backend_name(),
                "checks": { "storage": "ok" }
            });
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            let body = serde_json::json!({
                "status": "not ready",
                "backend": state.store().backend_name(),
                "checks": { "storage": "unavailable" }
            });
            (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response()
        }
    }
}
