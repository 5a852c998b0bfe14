use crate::{
    ApiResult, FieldErrors,
    api::validation::{MUST_NOT_BE_BLANK, MUST_NOT_BE_NULL},
};

use bb_core::{Order, OrderItem};

use serde::Deserialize;

/// Request body for POST /api/orders
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub restaurant_id: Option<i64>,
    pub items: Option<Vec<OrderItemRequest>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub item_name: Option<String>,
    /// Signed so that negative input is reported as a field error
    pub quantity: Option<i64>,
    pub price: Option<f64>,
}

impl PlaceOrderRequest {
    /// Validate and build a `PENDING` order for `customer_id`
    pub fn into_order(self, customer_id: i64) -> ApiResult<Order> {
        let mut errors = FieldErrors::new();
        errors.not_null("restaurantId", &self.restaurant_id, MUST_NOT_BE_NULL);

        let mut items = Vec::new();
        match self.items {
            None => errors.add("items", MUST_NOT_BE_NULL),
            Some(requested) if requested.is_empty() => errors.add("items", "must not be empty"),
            Some(requested) => {
                for (index, item) in requested.into_iter().enumerate() {
                    if let Some(item) = item.validate(index, &mut errors) {
                        items.push(item);
                    }
                }
            }
        }
        errors.finish()?;

        Ok(Order::pending(
            customer_id,
            self.restaurant_id.unwrap_or_default(),
            items,
        ))
    }
}

impl OrderItemRequest {
    /// Record this item's problems; `None` when it cannot be built
    fn validate(self, index: usize, errors: &mut FieldErrors) -> Option<OrderItem> {
        let field = |name: &str| format!("items[{index}].{name}");

        errors.not_blank(&field("itemName"), self.item_name.as_deref(), MUST_NOT_BE_BLANK);

        let quantity = match self.quantity {
            None => {
                errors.add(field("quantity"), MUST_NOT_BE_NULL);
                None
            }
            Some(q) if q < 1 => {
                errors.add(field("quantity"), "must be greater than or equal to 1");
                None
            }
            Some(q) => match u32::try_from(q) {
                Ok(q) => Some(q),
                Err(_) => {
                    errors.add(
                        field("quantity"),
                        format!("must be less than or equal to {}", u32::MAX),
                    );
                    None
                }
            },
        };

        match self.price {
            None => errors.add(field("price"), MUST_NOT_BE_NULL),
            Some(price) if !(price.is_finite() && price >= 0.0) => {
                errors.add(field("price"), "must be greater than or equal to 0")
            }
            Some(_) => {}
        }

        Some(OrderItem {
            item_name: self.item_name.unwrap_or_default(),
            quantity: quantity?,
            price: self.price.unwrap_or_default(),
        })
    }
}
