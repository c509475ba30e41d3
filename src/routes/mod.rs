mod common;
mod items;

pub use common::common_routes;
pub use items::item_routes;

use crate::error::AppError;
use crate::state::AppState;
use axum::{routing::any, Router};

/// All API routes: `/api/items/...` plus the common routes under `/api`.
/// Any other path under `/api` gets a JSON 404.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .nest("/api/items", item_routes(state.clone()))
        .nest("/api", common_routes(state))
        .route("/api", any(route_not_found))
        .route("/api/*rest", any(route_not_found))
}

async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".into())
}
