//! Item CRUD routes, nested under `/api/items`.

use crate::handlers::items::{create, delete, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn item_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(read).put(update).delete(delete))
        .with_state(state)
}
