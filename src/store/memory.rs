//! In-process repository. Ids start at 1 and are never reused.

use super::ItemRepository;
use crate::error::AppError;
use crate::model::{Item, ItemChanges, NewItem};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    next_id: i64,
    items: BTreeMap<i64, Item>,
}

#[derive(Default)]
pub struct MemoryItemRepository {
    inner: RwLock<Inner>,
}

impl MemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for MemoryItemRepository {
    async fn find_all(&self) -> Result<Vec<Item>, AppError> {
        Ok(self.inner.read().await.items.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, AppError> {
        Ok(self.inner.read().await.items.get(&id).cloned())
    }

    async fn create(&self, item: NewItem) -> Result<Item, AppError> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let now = Utc::now();
        let item = Item {
            id: inner.next_id,
            name: item.name,
            description: item.description,
            price: item.price,
            created_at: now,
            updated_at: now,
        };
        inner.items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn update(&self, id: i64, changes: ItemChanges) -> Result<Option<Item>, AppError> {
        let mut inner = self.inner.write().await;
        let Some(item) = inner.items.get_mut(&id) else {
            return Ok(None);
        };
        changes.apply_to(item);
        item.updated_at = Utc::now();
        Ok(Some(item.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.inner.write().await.items.remove(&id).is_some())
    }

    async fn ping(&self) -> bool {
        true
    }

    async fn close(&self) {}
}
