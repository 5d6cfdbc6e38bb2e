//! esgate - HTTP ingest gateway for Elasticsearch.
//!
//! Exposes two endpoints over a configured cluster: `POST /insertData` to
//! index a JSON document and `GET /checkData` to count documents across
//! all indices.

use clap::Parser;
use esgate_rest::{ServerConfig, create_app_with_config, init_logging};
use esgate_store::{ConnectPolicy, ElasticsearchStore, connect_with_retry};
use tracing::{error, info};

/// Establishes the Elasticsearch store, retrying per the connect policy.
///
/// Startup is all-or-nothing: if every attempt fails the process exits
/// without ever serving traffic.
async fn create_store(config: &ServerConfig) -> anyhow::Result<ElasticsearchStore> {
    let store_config = config.store_config();
    info!(
        url = %store_config.url,
        index = %store_config.index,
        "Connecting to Elasticsearch"
    );

    let store = connect_with_retry(store_config, ConnectPolicy::default()).await?;
    Ok(store)
}

/// Starts the axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        "Starting esgate"
    );

    let store = match create_store(&config).await {
        Ok(store) => store,
        Err(e) => {
            error!(error = %e, "Error creating Elasticsearch client");
            std::process::exit(1);
        }
    };

    let app = create_app_with_config(store, config.clone());
    serve(app, &config).await
}
