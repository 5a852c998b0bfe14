pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::menu_item::MenuItem;
pub use models::order::Order;
pub use models::order_item::OrderItem;
pub use models::order_placed_event::OrderPlacedEvent;
pub use models::order_status::OrderStatus;
pub use models::restaurant::Restaurant;
pub use models::restaurant_status::RestaurantStatus;
pub use models::role::Role;
pub use models::security_context::SecurityContext;

#[cfg(test)]
mod tests;
