use crate::{OrderStatus, RestaurantStatus};

use std::str::FromStr;

#[test]
fn test_order_status_defaults_to_pending() {
    assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    assert_eq!(OrderStatus::Pending.as_str(), "PENDING");
}

#[test]
fn test_order_status_from_str() {
    assert_eq!(
        OrderStatus::from_str("CANCELLED").unwrap(),
        OrderStatus::Cancelled
    );
    assert!(OrderStatus::from_str("pending").is_err());
}

#[test]
fn test_restaurant_status_from_str() {
    assert_eq!(
        RestaurantStatus::from_str("ACTIVE").unwrap(),
        RestaurantStatus::Active
    );
    assert!(RestaurantStatus::from_str("CLOSED").is_err());
    assert_eq!(RestaurantStatus::default(), RestaurantStatus::Pending);
}
