//! Route definitions
//!
//! Like routes are mounted under /api/v1; health probes sit at the root.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, likes};
use crate::state::AppState;

/// Create the main API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api/v1", api_v1_routes())
        .merge(health_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(like_routes())
}

/// Like routes
fn like_routes() -> Router<AppState> {
    Router::new()
        .route("/feeds/:id/like", post(likes::like).delete(likes::unlike))
        .route(
            "/feeds/:id/like/users",
            get(likes::list_reactors).post(likes::list_reactors),
        )
}
