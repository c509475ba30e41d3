//! Shared application state for all routes.

use crate::service::ItemService;
use crate::store::ItemRepository;
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct AppState {
    pub items: ItemService,
    /// Process start, reported as uptime by `/api/status`.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(repo: Arc<dyn ItemRepository>) -> Self {
        AppState {
            items: ItemService::new(repo),
            started_at: Instant::now(),
        }
    }
}
