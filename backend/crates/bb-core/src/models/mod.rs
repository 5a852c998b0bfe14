pub mod menu_item;
pub mod order;
pub mod order_item;
pub mod order_placed_event;
pub mod order_status;
pub mod restaurant;
pub mod restaurant_status;
pub mod role;
pub mod security_context;
