//! Server configuration for the esgate HTTP API.
//!
//! This module provides configuration types for the gateway server,
//! supporting both programmatic configuration and environment variable
//! overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `ESGATE_PORT` | 3000 | Server port |
//! | `ESGATE_HOST` | 0.0.0.0 | Host to bind |
//! | `ESGATE_LOG_LEVEL` | info | Log level |
//! | `ESGATE_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `ESGATE_ENABLE_CORS` | true | Enable CORS |
//! | `ESGATE_CORS_ORIGINS` | * | Allowed origins |
//! | `ELASTICSEARCH_URL` | http://13.215.48.128:9200 | Backend endpoint |
//! | `ELASTICSEARCH_INDEX` | your-index-name | Destination index for writes |
//! | `ELASTICSEARCH_USERNAME` | (none) | Basic auth username |
//! | `ELASTICSEARCH_PASSWORD` | (none) | Basic auth password |
//!
//! # Example
//!
//! ```rust
//! use esgate_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 8080,
//!     host: "127.0.0.1".to_string(),
//!     ..Default::default()
//! };
//! ```

use clap::Parser;
use esgate_store::{ElasticsearchAuth, StoreConfig};

/// Server configuration for the esgate HTTP API.
///
/// This struct can be constructed from environment variables using
/// [`ServerConfig::from_env`], from command line arguments using
/// [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "esgate")]
#[command(about = "HTTP gateway for Elasticsearch document ingest")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "ESGATE_PORT", default_value = "3000")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "ESGATE_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "ESGATE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "ESGATE_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "ESGATE_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "ESGATE_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Elasticsearch endpoint URL.
    ///
    /// The default preserves the address the gateway historically fell
    /// back to when the variable was unset.
    #[arg(
        long,
        env = "ELASTICSEARCH_URL",
        default_value = "http://13.215.48.128:9200"
    )]
    pub elasticsearch_url: String,

    /// Destination index for document writes.
    #[arg(long, env = "ELASTICSEARCH_INDEX", default_value = "your-index-name")]
    pub elasticsearch_index: String,

    /// Elasticsearch basic auth username.
    #[arg(long, env = "ELASTICSEARCH_USERNAME")]
    pub elasticsearch_username: Option<String>,

    /// Elasticsearch basic auth password.
    #[arg(long, env = "ELASTICSEARCH_PASSWORD")]
    pub elasticsearch_password: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            elasticsearch_url: "http://13.215.48.128:9200".to_string(),
            elasticsearch_index: "your-index-name".to_string(),
            elasticsearch_username: None,
            elasticsearch_password: None,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables
    /// without requiring command line arguments.
    pub fn from_env() -> Self {
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Builds the store configuration from the server configuration.
    pub fn store_config(&self) -> StoreConfig {
        let auth = match (&self.elasticsearch_username, &self.elasticsearch_password) {
            (Some(username), Some(password)) => Some(ElasticsearchAuth::Basic {
                username: username.clone(),
                password: password.clone(),
            }),
            _ => None,
        };

        StoreConfig {
            url: self.elasticsearch_url.clone(),
            index: self.elasticsearch_index.clone(),
            auth,
            ..Default::default()
        }
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.elasticsearch_url.is_empty() {
            errors.push("Elasticsearch URL cannot be empty".to_string());
        }

        if self.elasticsearch_index.is_empty() {
            errors.push("Elasticsearch index cannot be empty".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Creates a configuration suitable for testing.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            cors_origins: "*".to_string(),
            elasticsearch_url: "http://localhost:9200".to_string(),
            elasticsearch_index: "esgate-test".to_string(),
            elasticsearch_username: None,
            elasticsearch_password: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.elasticsearch_url, "http://13.215.48.128:9200");
        assert_eq!(config.elasticsearch_index, "your-index-name");
        assert!(config.enable_cors);
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            port: 3000,
            host: "0.0.0.0".to_string(),
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_store_config_without_auth() {
        let config = ServerConfig {
            elasticsearch_url: "http://localhost:9200".to_string(),
            elasticsearch_index: "docs".to_string(),
            ..Default::default()
        };
        let store_config = config.store_config();
        assert_eq!(store_config.url, "http://localhost:9200");
        assert_eq!(store_config.index, "docs");
        assert!(store_config.auth.is_none());
    }

    #[test]
    fn test_store_config_with_auth() {
        let config = ServerConfig {
            elasticsearch_username: Some("elastic".to_string()),
            elasticsearch_password: Some("changeme".to_string()),
            ..Default::default()
        };
        let store_config = config.store_config();
        assert!(matches!(
            store_config.auth,
            Some(ElasticsearchAuth::Basic { .. })
        ));
    }

    #[test]
    fn test_validate_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_invalid_port() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().iter().any(|e| e.contains("Port")));
    }

    #[test]
    fn test_validate_empty_index() {
        let config = ServerConfig {
            elasticsearch_index: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_for_testing() {
        let config = ServerConfig::for_testing();
        assert_eq!(config.port, 0);
        assert!(!config.enable_cors);
        assert_eq!(config.elasticsearch_index, "esgate-test");
    }
}
