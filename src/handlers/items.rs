//! Item CRUD handlers.

use crate::error::AppError;
use crate::extractors::{ApiJson, ApiPath};
use crate::model::{CreateItemRequest, ErrorMessage, Item, MessageBody, UpdateItemRequest};
use crate::response;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

#[utoipa::path(
    get,
    path = "/api/items",
    tag = "Items",
    responses(
        (status = 200, description = "All items", body = [Item]),
        (status = 500, description = "Internal error", body = ErrorMessage)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let items = state.items.list().await?;
    Ok(response::ok(items))
}

#[utoipa::path(
    get,
    path = "/api/items/{id}",
    tag = "Items",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, description = "Item not found", body = ErrorMessage)
    )
)]
pub async fn read(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let item = state.items.get(id).await?;
    Ok(response::ok(item))
}

#[utoipa::path(
    post,
    path = "/api/items",
    tag = "Items",
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, description = "Invalid data", body = ErrorMessage)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateItemRequest>,
) -> Result<impl IntoResponse, AppError> {
    let item = state.items.create(body).await?;
    Ok(response::created(item))
}

#[utoipa::path(
    put,
    path = "/api/items/{id}",
    tag = "Items",
    params(("id" = i64, Path, description = "Item id")),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Item updated", body = Item),
        (status = 400, description = "Invalid data", body = ErrorMessage),
        (status = 404, description = "Item not found", body = ErrorMessage)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(body): ApiJson<UpdateItemRequest>,
) -> Result<impl IntoResponse, AppError> {
    let item = state.items.update(id, body).await?;
    Ok(response::ok(item))
}

#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    tag = "Items",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item deleted", body = MessageBody),
        (status = 404, description = "Item not found", body = ErrorMessage)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.items.delete(id).await?;
    Ok(response::message("Item deleted successfully"))
}
