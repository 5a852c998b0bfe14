use crate::Result as DbErrorResult;

use bb_core::Order;

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    orders: BTreeMap<i64, Order>,
    next_order_id: i64,
}

#[derive(Clone, Default)]
pub struct OrderRepository {
    tables: Arc<RwLock<Tables>>,
}

impl OrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit an order, assigning its id.
    ///
    /// Once this returns the order is durable for the life of the process.
    pub async fn create(&self, mut order: Order) -> DbErrorResult<Order> {
        let mut tables = self.tables.write().await;
        tables.next_order_id += 1;
        order.id = tables.next_order_id;
        tables.orders.insert(order.id, order.clone());

        log::debug!(
            "Committed order {} for customer {} at restaurant {}",
            order.id,
            order.customer_id,
            order.restaurant_id
        );
        Ok(order)
    }

    pub async fn find_by_customer(&self, customer_id: i64) -> DbErrorResult<Vec<Order>> {
        Ok(self
            .tables
            .read()
            .await
            .orders
            .values()
            .filter(|order| order.customer_id == customer_id)
            .cloned()
            .collect())
    }

    pub async fn find_by_restaurant(&self, restaurant_id: i64) -> DbErrorResult<Vec<Order>> {
        Ok(self
            .tables
            .read()
            .await
            .orders
            .values()
            .filter(|order| order.restaurant_id == restaurant_id)
            .cloned()
            .collect())
    }

    pub async fn count(&self) -> usize {
        self.tables.read().await.orders.len()
    }
}
