//! Items API: REST backend for items (name, description, price) on PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod server;
pub mod service;
pub mod state;
pub mod store;

pub use config::{Settings, StorageBackend};
pub use error::{AppError, ConfigError};
pub use model::{Item, ItemChanges, NewItem};
pub use routes::{api_routes, common_routes, item_routes};
pub use server::{build_app, run};
pub use service::ItemService;
pub use state::AppState;
pub use store::{ItemRepository, MemoryItemRepository, PgItemRepository};
