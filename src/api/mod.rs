//! REST API for production-plan computation.
//!
//! Provides two endpoints:
//! - `POST /productionplan`: computes a plan for the posted payload
//! - `GET /health`: liveness probe

mod error;
mod handlers;
mod types;

use std::io;
use std::net::SocketAddr;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;
use tracing::info;

pub use error::ApiError;
pub use types::{ErrorResponse, HealthResponse, PlanEntryResponse};

/// Builds the axum router with all API routes.
///
/// Handlers hold no shared state: every request is computed from its own
/// payload.
pub fn router() -> Router {
    Router::new()
        .route("/productionplan", post(handlers::post_production_plan))
        .route("/health", get(handlers::get_health))
        .layer(TraceLayer::new_for_http())
}

/// Binds to the given address and serves the API until Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(addr: SocketAddr) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "production plan API listening");
    axum::serve(listener, router())
        .with_graceful_shutdown(crate::telemetry::shutdown_signal())
        .await?;
    info!("shutdown complete");
    Ok(())
}
