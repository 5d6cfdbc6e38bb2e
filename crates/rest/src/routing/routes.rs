//! Gateway route configuration.
//!
//! Defines all routes for the esgate HTTP API.

use axum::{
    Router,
    routing::{get, post},
};
use esgate_store::DocumentStore;

use crate::handlers;
use crate::state::AppState;

/// Creates all gateway routes.
///
/// # Routes
///
/// - `POST /insertData` - Index a JSON document
/// - `GET /checkData` - Count documents across all indices
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
/// - `GET /_readiness` - Readiness probe (pings the backend)
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: DocumentStore + 'static,
{
    Router::new()
        .route("/insertData", post(handlers::insert_handler::<S>))
        .route("/checkData", get(handlers::count_handler::<S>))
        .route("/health", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::liveness_handler))
        .route("/_readiness", get(handlers::readiness_handler::<S>))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    // Route tests live in the integration tests under tests/
}
