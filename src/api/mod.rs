mod extract;
mod handlers;

pub use extract::USER_ID_HEADER;

use crate::config::Config;
use crate::store::Store;
use anyhow::Result;
use axum::{
    routing::{get, post, put},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared handler context: the store handle, built once at startup and
/// injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

/// Build the application router. Exposed separately from the server so
/// tests can drive it without binding a socket.
pub fn router(store: Arc<dyn Store>) -> Router {
    let state = AppState { store };

    Router::new()
        // General routes
        .route("/health", get(handlers::health::health_check))
        // Profile routes
        .route("/api/profile", get(handlers::profiles::get_profile))
        .route("/api/profile", put(handlers::profiles::update_profile))
        .route("/api/profile/search", get(handlers::profiles::search_profiles))
        // Post routes
        .route("/api/posts", post(handlers::posts::create_post))
        .route("/api/posts", get(handlers::posts::get_feed))
        .route("/api/posts/user", get(handlers::posts::get_user_posts))
        // Poll routes
        .route("/api/polls", get(handlers::polls::get_polls))
        .route("/api/polls/votes", get(handlers::polls::get_user_poll_votes))
        .route("/api/polls/:poll_id/vote", post(handlers::polls::vote_poll))
        .route("/api/polls/:poll_id/results", get(handlers::polls::get_poll_results))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Start the API server.
pub async fn start_api_server(store: Arc<dyn Store>) -> Result<()> {
    let config = Config::get();

    let mut app = router(store);

    if config.api.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    let addr = format!("{}:{}", config.server.host, config.server.port)
        .parse::<SocketAddr>()?;

    info!("Starting API server on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received, stopping API server");
}
