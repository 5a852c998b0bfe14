use bb_core::{Order, OrderItem, OrderStatus};

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub item_name: String,
    pub quantity: u32,
    pub price: f64,
}

impl From<OrderItem> for OrderItemDto {
    fn from(item: OrderItem) -> Self {
        Self {
            item_name: item.item_name,
            quantity: item.quantity,
            price: item.price,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: i64,
    pub customer_id: i64,
    pub restaurant_id: i64,
    pub status: OrderStatus,
    pub items: Vec<OrderItemDto>,
    pub total: f64,
    pub created_at: DateTime<Utc>,
}

impl From<Order> for OrderDto {
    fn from(order: Order) -> Self {
        let total = order.total();
        Self {
            id: order.id,
            customer_id: order.customer_id,
            restaurant_id: order.restaurant_id,
            status: order.status,
            items: order.items.into_iter().map(OrderItemDto::from).collect(),
            total,
            created_at: order.created_at,
        }
    }
}
