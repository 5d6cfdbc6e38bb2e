//! Document insert handler.
//!
//! `POST [base]/insertData`

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use esgate_store::DocumentStore;
use serde_json::Value;
use tracing::{debug, error};

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Handler for the insert endpoint.
///
/// Indexes the request body verbatim into the configured index. The
/// backend assigns document identity; no identifier is returned.
///
/// # HTTP Request
///
/// `POST [base]/insertData`
///
/// # Response
///
/// - `200 OK` - `{"message": "Data inserted successfully"}`
/// - `400 Bad Request` - `{"error": "Invalid JSON"}` (body is not a JSON object)
/// - `500 Internal Server Error` - `{"error": "Error inserting data into Elasticsearch"}`
pub async fn insert_handler<S>(State(state): State<AppState<S>>, body: Bytes) -> RestResult<Response>
where
    S: DocumentStore,
{
    // Parse the raw body rather than relying on the Content-Type header:
    // any well-formed JSON object is accepted regardless of how it was sent.
    let document: Value = serde_json::from_slice(&body).map_err(|_| RestError::invalid_json())?;
    if !document.is_object() {
        return Err(RestError::invalid_json());
    }

    debug!(bytes = body.len(), "Processing insert request");

    if let Err(e) = state.store().insert(document).await {
        error!(error = %e, "Error inserting data into Elasticsearch");
        return Err(RestError::InternalError {
            message: "Error inserting data into Elasticsearch".to_string(),
        });
    }

    let body = serde_json::json!({ "message": "Data inserted successfully" });
    Ok((StatusCode::OK, Json(body)).into_response())
}
