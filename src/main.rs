use anyhow::Result;
use dotenv::dotenv;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use civic_social_api::api;
use civic_social_api::config::Config;
use civic_social_api::store::MemoryStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if present
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,civic_social_api=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::get();
    info!(
        "Initialized configuration (server {}:{})",
        config.server.host, config.server.port
    );

    // Initialize the store, seeded with the known polls
    let store = Arc::new(MemoryStore::new());
    info!("Store initialized");

    // Run the API server until shutdown
    api::start_api_server(store).await?;

    info!("Civic social API shutdown complete");
    Ok(())
}
