//! In-memory persistence for restaurants, menu items and orders.
//!
//! Repositories are cheap to clone; clones share the same tables.

pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::order_repository::OrderRepository;
pub use repositories::restaurant_repository::{MenuItemUpdate, RestaurantRepository};

#[cfg(test)]
mod tests;
