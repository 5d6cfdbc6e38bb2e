//! Document count handler.
//!
//! `GET [base]/checkData`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use esgate_store::DocumentStore;
use tracing::{debug, error};

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Handler for the count endpoint.
///
/// Issues a match-all count across all indices and passes the backend's
/// tally through uninterpreted.
///
/// # HTTP Request
///
/// `GET [base]/checkData`
///
/// # Response
///
/// - `200 OK` - `{"count": <total>}`
/// - `500 Internal Server Error` - `{"error": "Internal Server Error"}`
pub async fn count_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: DocumentStore,
{
    debug!("Processing count request");

    let count = match state.store().count_all().await {
        Ok(count) => count,
        Err(e) => {
            error!(error = %e, "Error counting documents in Elasticsearch");
            return Err(RestError::InternalError {
                message: "Internal Server Error".to_string(),
            });
        }
    };

    let body = serde_json::json!({ "count": count });
    Ok((StatusCode::OK, Json(body)).into_response())
}
