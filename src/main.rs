//! ideaspark-gateway server entry point.
//!
//! Starts the Axum HTTP server with the REST API and frame routes.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use ideaspark_gateway::api;
use ideaspark_gateway::app_state::AppState;
use ideaspark_gateway::completion::{CompletionProvider, OfflineProvider, OpenRouterClient};
use ideaspark_gateway::config::SparkConfig;
use ideaspark_gateway::render::PublicUrls;
use ideaspark_gateway::storage::{JsonFileStore, KeyValueStore, MemoryStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = SparkConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, base_url = %config.public_base_url, "starting ideaspark-gateway");

    // Storage backend
    let kv: Arc<dyn KeyValueStore> = match &config.store_path {
        Some(path) => {
            let store = JsonFileStore::open(path)
                .with_context(|| format!("opening store {}", path.display()))?;
            tracing::info!(path = %path.display(), "using JSON file store");
            Arc::new(store)
        }
        None => {
            tracing::warn!("STORE_PATH not set, saved ideas live in memory only");
            Arc::new(MemoryStore::new())
        }
    };

    // Completion provider
    let provider: Arc<dyn CompletionProvider> = if config.completion_api_key.is_empty() {
        tracing::warn!("OPENROUTER_API_KEY not set, serving sample ideas and fallback text");
        Arc::new(OfflineProvider)
    } else {
        let client = OpenRouterClient::new(config.completion())?;
        tracing::info!(model = client.model(), "completion provider ready");
        Arc::new(client)
    };

    // Build application state
    let app_state = AppState::new(
        kv,
        provider,
        PublicUrls::new(config.public_base_url.clone()),
        config.frame_ttl(),
        config.session(),
    );

    // Build router
    let app = api::build_app(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
