//! Application state for the esgate HTTP API.
//!
//! The state holds the single process-wide store handle and the server
//! configuration. The handle is created once at startup and never
//! reassigned; handlers only ever read it through a shared reference.

use std::sync::Arc;

use esgate_store::DocumentStore;

use crate::config::ServerConfig;

/// Shared application state for the HTTP API.
///
/// # Type Parameters
///
/// * `S` - The store type (must implement [`DocumentStore`])
pub struct AppState<S> {
    /// The document store.
    store: Arc<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: DocumentStore> AppState<S> {
    /// Creates a new AppState with the given store and configuration.
    pub fn new(store: Arc<S>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the document store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
