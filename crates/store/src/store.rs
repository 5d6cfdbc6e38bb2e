//! The [`DocumentStore`] trait and its Elasticsearch implementation.
//!
//! The trait is the seam between the HTTP layer and the backend: handlers
//! are generic over it, and tests substitute mock implementations.

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use elasticsearch::auth::Credentials;
use elasticsearch::cert::CertificateValidation;
use elasticsearch::http::transport::{SingleNodeConnectionPool, TransportBuilder};
use elasticsearch::{CountParts, Elasticsearch, IndexParts};
use serde_json::{Value, json};
use tracing::debug;

use crate::config::{ElasticsearchAuth, StoreConfig};
use crate::error::{BackendError, StoreError, StoreResult};
use crate::retry::Backoff;

fn internal_error(message: String, source: Option<elasticsearch::Error>) -> StoreError {
    StoreError::Backend(BackendError::Internal { message, source })
}

/// Storage abstraction over the search backend.
///
/// Implementations hold whatever client state they need; all methods take
/// `&self` and must be safe to call concurrently.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns the backend name for logging and health reporting.
    fn backend_name(&self) -> &'static str;

    /// Indexes a JSON document verbatim into the configured index.
    ///
    /// The backend assigns document identity; no identifier is returned.
    async fn insert(&self, document: Value) -> StoreResult<()>;

    /// Counts documents across all indices with a match-all query.
    async fn count_all(&self) -> StoreResult<u64>;

    /// Forces a refresh of the configured index so recent writes become
    /// visible to counts. Primarily for tests; Elasticsearch refreshes
    /// automatically in production.
    async fn refresh(&self) -> StoreResult<()>;

    /// Checks that the backend is reachable and not in a red state.
    async fn ping(&self) -> StoreResult<()>;
}

/// Elasticsearch-backed [`DocumentStore`].
pub struct ElasticsearchStore {
    /// The Elasticsearch client.
    client: Elasticsearch,
    /// Configuration.
    config: StoreConfig,
}

impl Debug for ElasticsearchStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElasticsearchStore")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ElasticsearchStore {
    /// Creates a new store with the given configuration.
    ///
    /// Construction builds the HTTP transport but does not contact the
    /// cluster; use [`ping`](DocumentStore::ping) to verify reachability.
    pub fn new(config: StoreConfig) -> StoreResult<Self> {
        let client = Self::build_client(&config)?;
        Ok(Self { client, config })
    }

    /// Builds the Elasticsearch client from configuration.
    fn build_client(config: &StoreConfig) -> StoreResult<Elasticsearch> {
        let parsed_url: elasticsearch::http::Url = config.url.parse().map_err(|e| {
            StoreError::Backend(BackendError::ConnectionFailed {
                message: format!("Invalid URL '{}': {}", config.url, e),
            })
        })?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);

        let mut builder = TransportBuilder::new(conn_pool)
            .timeout(Duration::from_millis(config.request_timeout_ms));

        if config.disable_certificate_validation {
            builder = builder.cert_validation(CertificateValidation::None);
        }

        if let Some(ref auth) = config.auth {
            builder = match auth {
                ElasticsearchAuth::Basic { username, password } => {
                    builder.auth(Credentials::Basic(username.clone(), password.clone()))
                }
                ElasticsearchAuth::Bearer { token } => {
                    builder.auth(Credentials::Bearer(token.clone()))
                }
            };
        }

        let transport = builder.build().map_err(|e| {
            StoreError::Backend(BackendError::ConnectionFailed {
                message: format!("Failed to build transport: {}", e),
            })
        })?;

        Ok(Elasticsearch::new(transport))
    }

    /// Returns the store configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Whether an error is worth retrying: transport-level failures carry
    /// no HTTP status. Responses the cluster actually produced are not
    /// retried.
    fn is_transient(error: &elasticsearch::Error) -> bool {
        error.status_code().is_none()
    }
}

#[async_trait]
impl DocumentStore for ElasticsearchStore {
    fn backend_name(&self) -> &'static str {
        "elasticsearch"
    }

    async fn insert(&self, document: Value) -> StoreResult<()> {
        let mut backoff = Backoff::default();

        let response = loop {
            let result = self
                .client
                .index(IndexParts::Index(&self.config.index))
                .body(&document)
                .send()
                .await;

            match result {
                Ok(response) => break response,
                Err(e) if Self::is_transient(&e) => match backoff.next() {
                    Some(delay) => {
                        debug!(
                            index = %self.config.index,
                            delay_ms = delay.as_millis() as u64,
                            error = %e,
                            "Retrying index request"
                        );
                        tokio::time::sleep(delay).await;
                    }
                    None => {
                        return Err(internal_error(
                            format!("index request failed after retries: {}", e),
                            Some(e),
                        ));
                    }
                },
                Err(e) => {
                    return Err(internal_error(format!("index request failed: {}", e), Some(e)));
                }
            }
        };

        let status = response.status_code();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(internal_error(
                format!("index request returned status {}: {}", status, body),
                None,
            ));
        }

        debug!(index = %self.config.index, "Document indexed");
        Ok(())
    }

    async fn count_all(&self) -> StoreResult<u64> {
        let mut backoff = Backoff::default();

        let response = loop {
            let result = self
                .client
                .count(CountParts::None)
                .body(json!({ "query": { "match_all": {} } }))
                .send()
                .await;

            match result {
                Ok(response) => break response,
                Err(e) if Self::is_transient(&e) => match backoff.next() {
                    Some(delay) => {
                        debug!(
                            delay_ms = delay.as_millis() as u64,
                            error = %e,
                            "Retrying count request"
                        );
                        tokio::time::sleep(delay).await;
                    }
                    None => {
                        return Err(internal_error(
                            format!("count request failed after retries: {}", e),
                            Some(e),
                        ));
                    }
                },
                Err(e) => {
                    return Err(internal_error(format!("count request failed: {}", e), Some(e)));
                }
            }
        };

        let status = response.status_code();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(internal_error(
                format!("count request returned status {}: {}", status, body),
                None,
            ));
        }

        let body: Value = response.json().await.map_err(|e| {
            StoreError::Backend(BackendError::InvalidResponse {
                message: format!("Failed to parse count response: {}", e),
            })
        })?;

        body.get("count").and_then(|c| c.as_u64()).ok_or_else(|| {
            StoreError::Backend(BackendError::InvalidResponse {
                message: format!("Count response missing 'count' field: {}", body),
            })
        })
    }

    async fn refresh(&self) -> StoreResult<()> {
        self.client
            .indices()
            .refresh(elasticsearch::indices::IndicesRefreshParts::Index(&[
                &self.config.index,
            ]))
            .send()
            .await
            .map_err(|e| {
                internal_error(
                    format!("Failed to refresh index {}: {}", self.config.index, e),
                    Some(e),
                )
            })?;
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        let response = self
            .client
            .cluster()
            .health(elasticsearch::cluster::ClusterHealthParts::None)
            .send()
            .await
            .map_err(|e| {
                StoreError::Backend(BackendError::Unavailable {
                    message: format!("Health check failed: {}", e),
                })
            })?;

        let status = response.status_code();
        if !status.is_success() {
            return Err(StoreError::Backend(BackendError::Unavailable {
                message: format!("Cluster health returned status {}", status),
            }));
        }

        let body = response.json::<Value>().await.map_err(|e| {
            StoreError::Backend(BackendError::InvalidResponse {
                message: format!("Failed to parse health response: {}", e),
            })
        })?;

        let cluster_status = body
            .get("status")
            .and_then(|s| s.as_str())
            .unwrap_or("unknown");

        if cluster_status == "red" {
            return Err(StoreError::Backend(BackendError::Unavailable {
                message: format!("Cluster status is red: {:?}", body),
            }));
        }

        Ok(())
    }
}
