//! Router assembly and the serve loop with graceful shutdown.

use crate::config::{Settings, StorageBackend};
use crate::handlers::docs::ApiDoc;
use crate::routes::api_routes;
use crate::state::AppState;
use crate::store::{ensure_database_exists, ensure_schema, ItemRepository, MemoryItemRepository, PgItemRepository};
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// API routes and the Swagger page at `/docs`, with CORS and request tracing.
/// When `static_dir` is given it is served for every path outside `/api` and `/docs`.
pub fn build_app(state: AppState, static_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = api_routes(state)
        .merge(SwaggerUi::new("/docs").url("/api/openapi.json", ApiDoc::openapi()));
    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }
    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    )
}

/// Open the configured store. For PostgreSQL this creates the database and the `items` table when missing.
pub async fn open_repository(settings: &Settings) -> Result<Arc<dyn ItemRepository>, Box<dyn std::error::Error>> {
    match settings.storage {
        StorageBackend::Memory => {
            tracing::warn!("using in-memory storage; items are lost on exit");
            Ok(Arc::new(MemoryItemRepository::new()))
        }
        StorageBackend::Postgres => {
            let db = &settings.database;
            let opts = db.connect_options();
            ensure_database_exists(&opts).await?;
            let pool = PgPoolOptions::new()
                .max_connections(db.max_connections)
                .connect_with(opts)
                .await?;
            ensure_schema(&pool).await?;
            tracing::info!(host = %db.host, port = db.port, database = %db.name, "database connected");
            Ok(Arc::new(PgItemRepository::new(pool)))
        }
    }
}

pub async fn run(settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
    let repo = open_repository(&settings).await?;
    let state = AppState::new(repo.clone());

    let static_dir = settings.static_dir.is_dir().then_some(settings.static_dir.as_path());
    if static_dir.is_none() {
        tracing::warn!(dir = %settings.static_dir.display(), "static directory not found; front-end disabled");
    }
    let app = build_app(state, static_dir);

    let listener = TcpListener::bind(settings.bind_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    tracing::info!("API docs at /docs");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    repo.close().await;
    tracing::info!("server shutdown complete");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutting down gracefully");
}
