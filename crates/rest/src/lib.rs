//! # esgate-rest - HTTP API for the esgate ingest gateway
//!
//! This crate provides the HTTP layer of the gateway: a small axum
//! application that exposes document ingest and count endpoints over an
//! Elasticsearch cluster.
//!
//! ## API Endpoints
//!
//! | Method | Path | Success | Failure |
//! |--------|------|---------|---------|
//! | POST | `/insertData` | 200 `{"message":"Data inserted successfully"}` | 400 `{"error":"Invalid JSON"}`, 500 `{"error":"Error inserting data into Elasticsearch"}` |
//! | GET | `/checkData` | 200 `{"count": <total>}` | 500 `{"error":"Internal Server Error"}` |
//! | GET | `/health` | 200 | - |
//! | GET | `/_liveness` | 200 | - |
//! | GET | `/_readiness` | 200 | 503 |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use esgate_rest::{ServerConfig, create_app_with_config};
//! use esgate_store::{ConnectPolicy, connect_with_retry};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env();
//!     let store = connect_with_retry(config.store_config(), ConnectPolicy::default()).await?;
//!
//!     let app = create_app_with_config(store, config.clone());
//!
//!     let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Client-facing error bodies are generic `{"error": ...}` objects;
//! underlying backend detail is logged server-side only.
//!
//! ## Architecture
//!
//! - [`error`] - Error types and response mapping
//! - [`config`] - Server configuration
//! - [`state`] - Application state (store handle, configuration)
//! - [`handlers`] - HTTP request handlers
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use esgate_store::DocumentStore;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the axum application with default configuration.
///
/// This is a convenience function that creates the app with default
/// settings. For more control, use [`create_app_with_config`].
pub fn create_app<S>(store: S) -> Router
where
    S: DocumentStore + 'static,
{
    create_app_with_config(store, ServerConfig::default())
}

/// Creates the axum application with custom configuration.
///
/// Sets up the complete gateway API with all handlers, middleware, and
/// configuration. The store handle is created once here and shared by all
/// handlers for the lifetime of the process.
pub fn create_app_with_config<S>(store: S, config: ServerConfig) -> Router
where
    S: DocumentStore + 'static,
{
    info!(
        "Creating gateway API with backend: {}",
        store.backend_name()
    );

    // Create application state
    let state = AppState::new(Arc::new(store), config.clone());

    // Build the router with all gateway routes
    let router = routing::create_routes(state);

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    // Add CORS if enabled
    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    // Apply remaining middleware
    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "esgate_rest={},esgate_store={},tower_http=debug",
            level, level
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
