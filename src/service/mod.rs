//! ItemService: validation and not-found handling over the repository.

mod items;
mod validation;
pub use items::ItemService;
pub use validation::{RequestValidator, REQUIRED_FIELDS_MESSAGE};
