//! # esgate-store - Elasticsearch storage layer
//!
//! This crate provides the storage layer for the esgate ingest gateway. It
//! wraps the official [`elasticsearch`] client behind the [`DocumentStore`]
//! trait so the HTTP layer can be tested against mock implementations.
//!
//! ## Components
//!
//! - [`config`] - Store configuration (endpoint, index, auth, timeouts)
//! - [`error`] - Error types for storage operations
//! - [`retry`] - Startup connect policy and request-level backoff
//! - [`store`] - The [`DocumentStore`] trait and [`ElasticsearchStore`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use esgate_store::{ConnectPolicy, StoreConfig, connect_with_retry};
//!
//! let config = StoreConfig::default();
//! let store = connect_with_retry(config, ConnectPolicy::default()).await?;
//! store.insert(serde_json::json!({"title": "hello"})).await?;
//! let total = store.count_all().await?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod retry;
pub mod store;

pub use config::{ElasticsearchAuth, StoreConfig};
pub use error::{BackendError, StoreError, StoreResult};
pub use retry::{Backoff, ConnectPolicy, connect_with_retry};
pub use store::{DocumentStore, ElasticsearchStore};
