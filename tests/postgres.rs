//! Runs against a live PostgreSQL. Set `DATABASE_URL` and run with `--ignored`.

use items_api::model::{ItemChanges, NewItem};
use items_api::store::ensure_schema;
use items_api::{ItemRepository, PgItemRepository};
use sqlx::postgres::PgPoolOptions;

async fn repo() -> PgItemRepository {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for postgres tests");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("connect");
    ensure_schema(&pool).await.expect("schema");
    PgItemRepository::new(pool)
}

fn new_item(name: &str) -> NewItem {
    NewItem {
        name: name.to_string(),
        description: Some("from postgres test".into()),
        price: 4.75,
    }
}

#[tokio::test]
#[ignore]
async fn create_read_update_delete_round() {
    let repo = repo().await;
    let created = repo.create(new_item("pg pen")).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.price, 4.75);

    let fetched = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.name, "pg pen");

    let changes = ItemChanges {
        price: Some(5.0),
        ..Default::default()
    };
    let updated = repo.update(created.id, changes).await.unwrap().unwrap();
    assert_eq!(updated.price, 5.0);
    assert_eq!(updated.name, "pg pen");
    assert_eq!(updated.description.as_deref(), Some("from postgres test"));
    assert!(updated.updated_at >= created.updated_at);

    let cleared = repo
        .update(
            created.id,
            ItemChanges {
                description: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert!(cleared.description.is_none());

    assert!(repo.delete(created.id).await.unwrap());
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    assert!(!repo.delete(created.id).await.unwrap());
}

#[tokio::test]
#[ignore]
async fn missing_ids_are_reported() {
    let repo = repo().await;
    assert!(repo.find_by_id(i64::MAX).await.unwrap().is_none());
    assert!(repo.update(i64::MAX, ItemChanges::default()).await.unwrap().is_none());
    assert!(repo.ping().await);
}
