//! Item persistence behind a single trait. PostgreSQL for deployments, memory for tests and local runs.

mod memory;
mod postgres;

pub use memory::MemoryItemRepository;
pub use postgres::{ensure_database_exists, ensure_schema, PgItemRepository};

use crate::error::AppError;
use crate::model::{Item, ItemChanges, NewItem};
use async_trait::async_trait;

#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// All items, ordered by id.
    async fn find_all(&self) -> Result<Vec<Item>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, AppError>;

    async fn create(&self, item: NewItem) -> Result<Item, AppError>;

    /// Overwrite the supplied fields. `None` when no item has this id.
    async fn update(&self, id: i64, changes: ItemChanges) -> Result<Option<Item>, AppError>;

    /// `false` when no item has this id.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Whether the backing store is reachable.
    async fn ping(&self) -> bool;

    async fn close(&self);
}
