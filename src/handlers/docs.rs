//! Generated OpenAPI document, served with the Swagger page.

use crate::handlers::{health, items};
use crate::model::{CreateItemRequest, ErrorMessage, Item, MessageBody, UpdateItemRequest};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Items API", description = "Item management with full CRUD"),
    paths(
        items::list,
        items::read,
        items::create,
        items::update,
        items::delete,
        health::health,
        health::status,
        health::ready,
    ),
    components(schemas(
        Item,
        CreateItemRequest,
        UpdateItemRequest,
        MessageBody,
        ErrorMessage,
        health::HealthBody,
        health::StatusBody,
        health::ReadyBody,
    )),
    tags(
        (name = "Health", description = "Health endpoints"),
        (name = "Status", description = "Status endpoints"),
        (name = "Items", description = "Item CRUD")
    )
)]
pub struct ApiDoc;
