//! Items API server: reads settings from the environment (and `.env`), then serves until SIGINT/SIGTERM.

use items_api::config::DEFAULT_LOG_FILTER;
use items_api::{run, Settings};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let settings = Settings::from_env()?;
    run(settings).await
}
