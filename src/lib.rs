//! Demo service whose routes each write one log record at a different severity.

pub mod config;
pub mod error;
pub mod fault;
pub mod handlers;
pub mod logging;
pub mod severity;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub fn build_router() -> Router {
    Router::new()
        // ── Leveled logging ─────────────────────────────────────────────────
        .route("/info", get(handlers::levels::info))
        .route("/error", get(handlers::levels::error))
        .route("/critical", get(handlers::levels::critical))
        .route("/exception", get(handlers::levels::exception))

        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(TraceLayer::new_for_http())
}
