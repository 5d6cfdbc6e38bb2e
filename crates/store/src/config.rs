//! Configuration for the Elasticsearch store.

use serde::{Deserialize, Serialize};

/// Authentication configuration for Elasticsearch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ElasticsearchAuth {
    /// Basic username/password authentication.
    Basic {
        /// The username for basic auth.
        username: String,
        /// The password for basic auth.
        password: String,
    },
    /// Bearer token authentication.
    Bearer {
        /// The bearer token.
        token: String,
    },
}

/// Configuration for the Elasticsearch store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Elasticsearch node URL (e.g., `"http://localhost:9200"`).
    ///
    /// Defaults to the address the gateway historically fell back to when
    /// `ELASTICSEARCH_URL` was unset.
    #[serde(default = "default_url")]
    pub url: String,

    /// Destination index for document writes.
    #[serde(default = "default_index")]
    pub index: String,

    /// Request timeout in milliseconds (default: 30000).
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Optional authentication.
    #[serde(default)]
    pub auth: Option<ElasticsearchAuth>,

    /// Whether to disable certificate validation (default: false).
    /// Only use for development/testing.
    #[serde(default)]
    pub disable_certificate_validation: bool,
}

fn default_url() -> String {
    "http://13.215.48.128:9200".to_string()
}

fn default_index() -> String {
    "your-index-name".to_string()
}

fn default_request_timeout_ms() -> u64 {
    30000
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            index: default_index(),
            request_timeout_ms: default_request_timeout_ms(),
            auth: None,
            disable_certificate_validation: false,
        }
    }
}
