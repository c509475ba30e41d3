//! Liveness, readiness and status handlers.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthBody {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    /// `connected` or `disconnected`.
    pub database: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct StatusBody {
    pub message: String,
    /// Seconds since the server started.
    pub uptime: f64,
    pub version: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ReadyBody {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses((status = 200, description = "API and database health", body = HealthBody))
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthBody> {
    let database = if state.items.repository().ping().await {
        "connected"
    } else {
        "disconnected"
    };
    Json(HealthBody {
        status: "ok".into(),
        timestamp: Utc::now(),
        database: database.into(),
    })
}

#[utoipa::path(
    get,
    path = "/api/status",
    tag = "Status",
    responses((status = 200, description = "API status", body = StatusBody))
)]
pub async fn status(State(state): State<AppState>) -> Json<StatusBody> {
    Json(StatusBody {
        message: "API operational".into(),
        uptime: state.started_at.elapsed().as_secs_f64(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

#[utoipa::path(
    get,
    path = "/api/ready",
    tag = "Health",
    responses(
        (status = 200, description = "Ready to serve", body = ReadyBody),
        (status = 503, description = "Database unavailable", body = ReadyBody)
    )
)]
pub async fn ready(State(state): State<AppState>) -> Result<Json<ReadyBody>, (StatusCode, Json<ReadyBody>)> {
    if !state.items.repository().ping().await {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyBody {
                status: "degraded".into(),
                database: Some("unavailable".into()),
            }),
        ));
    }
    Ok(Json(ReadyBody {
        status: "ok".into(),
        database: Some("ok".into()),
    }))
}
