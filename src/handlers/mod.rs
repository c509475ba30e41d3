//! HTTP handlers for items, health and API docs.

pub mod docs;
pub mod health;
pub mod items;
