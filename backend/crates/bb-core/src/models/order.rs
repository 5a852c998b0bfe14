use crate::{OrderItem, OrderStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Assigned by the repository on insert (0 until then)
    pub id: i64,
    pub customer_id: i64,
    pub restaurant_id: i64,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// New, unsaved order in the initial `PENDING` state
    pub fn pending(customer_id: i64, restaurant_id: i64, items: Vec<OrderItem>) -> Self {
        Self {
            id: 0,
            customer_id,
            restaurant_id,
            status: OrderStatus::Pending,
            items,
            created_at: Utc::now(),
        }
    }

    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.price * f64::from(item.quantity))
            .sum()
    }
}
