// HTTP API server for the portfolio.
// Routes, shared state, and the listener loop.

pub mod handlers;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::Result;

pub use handlers::ErrorBody;
pub use state::AppState;

/// Create the API router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/git", get(handlers::git_stats))
        .route("/api/projects", get(handlers::list_projects))
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(
        addr = %listener.local_addr()?,
        user = %state.user,
        ttl_secs = state.cache.ttl().as_secs(),
        "portfolio API listening"
    );

    axum::serve(listener, router(Arc::new(state))).await?;
    Ok(())
}
