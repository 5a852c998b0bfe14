//! Internal restaurant and order service.
//!
//! Sits behind the edge gateway. Identity arrives as trusted `X-User-*`
//! headers, is rebuilt per request by the security-context layer, and every
//! protected handler asks the authorization guard before touching state.

pub mod api;
pub mod app_state;
pub mod health;
pub mod routes;
pub mod security_context;
pub mod server_metrics;

pub use api::{
    api_response::ApiResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::caller::Caller,
    orders::{
        order_dto::{OrderDto, OrderItemDto},
        orders::{list_own_orders, list_restaurant_orders, place_order},
        place_order_request::{OrderItemRequest, PlaceOrderRequest},
    },
    restaurants::{
        create_restaurant_request::CreateRestaurantRequest,
        menu_item_dto::MenuItemDto,
        menu_item_request::MenuItemRequest,
        restaurant_dto::RestaurantDto,
        restaurants::{
            add_menu_item, change_restaurant_status, create_restaurant, get_menu, get_restaurant,
            list_restaurants, update_menu_item,
        },
        update_status_request::UpdateStatusRequest,
    },
    validation::FieldErrors,
};
pub use app_state::{AppState, trust_zone_from};
pub use server_metrics::ServerMetrics;

pub use crate::routes::build_router;

#[cfg(test)]
mod tests;
