use crate::{Order, OrderItem, OrderPlacedEvent, OrderStatus};

fn items() -> Vec<OrderItem> {
    vec![
        OrderItem {
            item_name: "Jollof".to_string(),
            quantity: 2,
            price: 12.5,
        },
        OrderItem {
            item_name: "Kelewele".to_string(),
            quantity: 1,
            price: 4.0,
        },
    ]
}

#[test]
fn test_pending_order_starts_unsaved() {
    let order = Order::pending(7, 3, items());

    assert_eq!(order.id, 0);
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total(), 29.0);
}

#[test]
fn test_event_uses_camel_case_wire_format() {
    let mut order = Order::pending(7, 3, items());
    order.id = 11;

    let event = OrderPlacedEvent::from(&order);
    let json = serde_json::to_value(event).unwrap();

    assert_eq!(json["orderId"], 11);
    assert_eq!(json["restaurantId"], 3);
    assert_eq!(json["customerId"], 7);
    assert_eq!(json["status"], "PENDING");
}
