use crate::{
    ApiError, CreateRestaurantRequest, MenuItemRequest, OrderItemRequest, PlaceOrderRequest,
    UpdateStatusRequest,
};

use bb_core::{OrderStatus, RestaurantStatus};

use std::collections::BTreeMap;

use googletest::prelude::*;

fn field_errors<T: std::fmt::Debug>(
    result: std::result::Result<T, ApiError>,
) -> BTreeMap<String, String> {
    match result {
        Err(ApiError::Validation { errors, .. }) => errors,
        other => panic!("expected validation error, got {other:?}"),
    }
}

fn valid_item() -> OrderItemRequest {
    OrderItemRequest {
        item_name: Some("Jollof Rice".into()),
        quantity: Some(2),
        price: Some(12.5),
    }
}

#[test]
fn given_valid_restaurant_request_when_built_then_pending_and_owned_by_caller() {
    let request = CreateRestaurantRequest {
        name: Some("Mama's Kitchen".into()),
        description: Some("Home cooking".into()),
        location: Some("Accra".into()),
        email: Some("hello@mamas.example".into()),
        phone_number: Some("   ".into()),
        ..Default::default()
    };

    let restaurant = request.into_restaurant(7).unwrap();

    assert_that!(restaurant.owner_id, eq(7));
    assert_that!(restaurant.status, eq(RestaurantStatus::Pending));
    assert_eq!(restaurant.email.as_deref(), Some("hello@mamas.example"));
    assert!(restaurant.phone_number.is_none());
}

#[test]
fn given_empty_restaurant_request_when_built_then_every_required_field_reported() {
    let errors = field_errors(CreateRestaurantRequest::default().into_restaurant(7));

    assert_eq!(errors["name"], "must not be blank");
    assert_eq!(errors["description"], "must not be blank");
    assert_eq!(errors["location"], "must not be blank");
    assert!(!errors.contains_key("email"));
}

#[test]
fn given_one_letter_name_when_built_then_size_error() {
    let request = CreateRestaurantRequest {
        name: Some("A".into()),
        description: Some("d".into()),
        location: Some("l".into()),
        ..Default::default()
    };

    let errors = field_errors(request.into_restaurant(7));

    assert_eq!(errors["name"], "size must be between 2 and 100");
}

#[test]
fn given_menu_item_with_zero_price_when_validated_then_price_must_be_positive() {
    let request = MenuItemRequest {
        name: Some("Kelewele".into()),
        description: Some("Spiced plantain".into()),
        price: Some(0.0),
    };

    let errors = field_errors(request.into_update());

    assert_eq!(errors.len(), 1);
    assert_eq!(errors["price"], "Price must be positive");
}

#[test]
fn given_blank_menu_item_when_validated_then_named_messages() {
    let errors = field_errors(MenuItemRequest::default().into_update());

    assert_eq!(errors["name"], "Menu item name is required");
    assert_eq!(errors["description"], "Menu item description is required");
    assert_eq!(errors["price"], "Price is required");
}

#[test]
fn given_lowercase_status_when_parsed_then_accepted() {
    let request = UpdateStatusRequest {
        status: Some(" active ".into()),
    };

    assert_that!(request.into_status(), ok(eq(&RestaurantStatus::Active)));
}

#[test]
fn given_unknown_or_missing_status_when_parsed_then_validation_error() {
    let unknown = field_errors(
        UpdateStatusRequest {
            status: Some("CLOSED".into()),
        }
        .into_status(),
    );
    let missing = field_errors(UpdateStatusRequest::default().into_status());

    assert_eq!(unknown["status"], "must be one of PENDING, ACTIVE, INACTIVE");
    assert_eq!(missing["status"], "must not be null");
}

#[test]
fn given_valid_order_request_when_built_then_pending_for_customer() {
    let request = PlaceOrderRequest {
        restaurant_id: Some(3),
        items: Some(vec![valid_item()]),
    };

    let order = request.into_order(42).unwrap();

    assert_that!(order.customer_id, eq(42));
    assert_that!(order.restaurant_id, eq(3));
    assert_that!(order.status, eq(OrderStatus::Pending));
    assert_that!(order.items.len(), eq(1));
    assert_that!(order.items[0].quantity, eq(2));
}

#[test]
fn given_order_without_restaurant_or_items_when_built_then_both_reported() {
    let errors = field_errors(PlaceOrderRequest::default().into_order(42));

    assert_eq!(errors["restaurantId"], "must not be null");
    assert_eq!(errors["items"], "must not be null");
}

#[test]
fn given_empty_item_list_when_built_then_items_must_not_be_empty() {
    let request = PlaceOrderRequest {
        restaurant_id: Some(3),
        items: Some(Vec::new()),
    };

    let errors = field_errors(request.into_order(42));

    assert_eq!(errors["items"], "must not be empty");
}

#[test]
fn given_bad_item_fields_when_built_then_errors_are_indexed() {
    let request = PlaceOrderRequest {
        restaurant_id: Some(3),
        items: Some(vec![
            valid_item(),
            OrderItemRequest {
                item_name: Some("".into()),
                quantity: Some(0),
                price: Some(-1.0),
            },
        ]),
    };

    let errors = field_errors(request.into_order(42));

    assert_eq!(errors.len(), 3);
    assert_eq!(errors["items[1].itemName"], "must not be blank");
    assert_eq!(errors["items[1].quantity"], "must be greater than or equal to 1");
    assert_eq!(errors["items[1].price"], "must be greater than or equal to 0");
}

#[test]
fn given_free_item_when_built_then_zero_price_accepted() {
    let request = PlaceOrderRequest {
        restaurant_id: Some(3),
        items: Some(vec![OrderItemRequest {
            price: Some(0.0),
            ..valid_item()
        }]),
    };

    assert!(request.into_order(42).is_ok());
}
