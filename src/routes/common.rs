//! Common routes: health, status, readiness.

use crate::handlers::health::{health, ready, status};
use crate::state::AppState;
use axum::{routing::get, Router};

/// GET /health, /status and /ready.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/status", get(status))
        .route("/ready", get(ready))
        .with_state(state)
}
