//! Item use cases on top of an `ItemRepository`.

use crate::error::AppError;
use crate::model::{CreateItemRequest, Item, UpdateItemRequest};
use crate::service::RequestValidator;
use crate::store::ItemRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct ItemService {
    repo: Arc<dyn ItemRepository>,
}

impl ItemService {
    pub fn new(repo: Arc<dyn ItemRepository>) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &Arc<dyn ItemRepository> {
        &self.repo
    }

    pub async fn list(&self) -> Result<Vec<Item>, AppError> {
        self.repo.find_all().await
    }

    pub async fn get(&self, id: i64) -> Result<Item, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(AppError::item_not_found)
    }

    pub async fn create(&self, body: CreateItemRequest) -> Result<Item, AppError> {
        let new_item = RequestValidator::validate_create(body)?;
        let item = self.repo.create(new_item).await?;
        tracing::info!(id = item.id, "item created");
        Ok(item)
    }

    /// Apply the supplied fields. An empty body still refreshes `updated_at`.
    pub async fn update(&self, id: i64, body: UpdateItemRequest) -> Result<Item, AppError> {
        let changes = RequestValidator::validate_update(body)?;
        let item = self
            .repo
            .update(id, changes)
            .await?
            .ok_or_else(AppError::item_not_found)?;
        tracing::info!(id, "item updated");
        Ok(item)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repo.delete(id).await? {
            return Err(AppError::item_not_found());
        }
        tracing::info!(id, "item deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryItemRepository;

    fn service() -> ItemService {
        ItemService::new(Arc::new(MemoryItemRepository::new()))
    }

    fn pen() -> CreateItemRequest {
        CreateItemRequest {
            name: Some("Pen".into()),
            description: Some("blue".into()),
            price: Some(1.5),
        }
    }

    #[tokio::test]
    async fn missing_items_are_not_found() {
        let svc = service();
        assert!(matches!(svc.get(1).await, Err(AppError::NotFound(_))));
        assert!(matches!(
            svc.update(1, UpdateItemRequest::default()).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(svc.delete(1).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn validation_runs_before_lookup() {
        let svc = service();
        let body = UpdateItemRequest {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(matches!(svc.update(99, body).await, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn price_only_update_keeps_other_fields() {
        let svc = service();
        let created = svc.create(pen()).await.unwrap();
        let updated = svc
            .update(
                created.id,
                UpdateItemRequest {
                    price: Some(2.25),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.price, 2.25);
        assert_eq!(updated.name, "Pen");
        assert_eq!(updated.description.as_deref(), Some("blue"));
    }

    #[tokio::test]
    async fn empty_update_refreshes_updated_at() {
        let svc = service();
        let created = svc.create(pen()).await.unwrap();
        let updated = svc.update(created.id, UpdateItemRequest::default()).await.unwrap();
        assert_eq!(updated.name, "Pen");
        assert_eq!(updated.price, 1.5);
        assert_eq!(updated.description.as_deref(), Some("blue"));
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let svc = service();
        let created = svc.create(pen()).await.unwrap();
        svc.delete(created.id).await.unwrap();
        assert!(matches!(svc.get(created.id).await, Err(AppError::NotFound(_))));
    }
}
