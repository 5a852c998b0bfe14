use bb_core::OrderPlacedEvent;

const ORDER_PLACED_SUBJECT: &str = "New Order Placed!";

/// Rendered notification ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub subject: String,
    pub body: String,
}

impl Notification {
    pub fn order_placed(event: &OrderPlacedEvent) -> Self {
        Self {
            subject: ORDER_PLACED_SUBJECT.to_string(),
            body: format!(
                "New order received. Order ID: {}, Customer ID: {}, Restaurant ID: {}, Status: {}. Thank you for using ByteBites!",
                event.order_id, event.customer_id, event.restaurant_id, event.status
            ),
        }
    }
}
