// file: src/server/mod.rs
// description: http router and server bootstrap
// reference: https://docs.rs/axum

pub mod dto;
pub mod handlers;

pub use handlers::AppState;

use crate::config::ServerConfig;
use crate::error::Result;
use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tracing::{info, warn};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::status))
        .route("/summarize", post(handlers::summarize))
        .with_state(state)
}

pub async fn serve(config: &ServerConfig, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(config.bind_address()).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
