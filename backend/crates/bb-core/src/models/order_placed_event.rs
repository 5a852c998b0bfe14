use crate::{Order, OrderStatus};

use serde::{Deserialize, Serialize};

/// Fact published after an order has been committed.
///
/// Consumers may see the same event more than once and in any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPlacedEvent {
    pub order_id: i64,
    pub restaurant_id: i64,
    pub customer_id: i64,
    pub status: OrderStatus,
}

impl From<&Order> for OrderPlacedEvent {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.id,
            restaurant_id: order.restaurant_id,
            customer_id: order.customer_id,
            status: order.status,
        }
    }
}
