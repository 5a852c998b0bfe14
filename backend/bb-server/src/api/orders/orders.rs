//! Order REST API handlers

use crate::{
    ApiResponse, ApiResult, AppState, Caller, OrderDto, PlaceOrderRequest,
    api::restaurants::restaurants::restaurant_not_found,
};

use bb_auth::Operation;

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};

/// POST /api/orders
///
/// Commit a `PENDING` order for the calling customer, then hand
/// `OrderPlacedEvent` to the broker in the background. The response does not
/// wait for the broker, and a lost event does not undo the order.
pub async fn place_order(
    State(state): State<AppState>,
    caller: Caller,
    payload: Result<Json<PlaceOrderRequest>, JsonRejection>,
) -> ApiResult<ApiResponse<OrderDto>> {
    state.authorize(&caller, Operation::PlaceOrder, None)?;
    let user = caller.user()?;
    let Json(request) = payload?;

    let order = request.into_order(user.user_id())?;

    if state
        .restaurants
        .find_by_id(order.restaurant_id)
        .await?
        .is_none()
    {
        return Err(restaurant_not_found(order.restaurant_id));
    }

    let order = state.orders.create(order).await?;
    state.metrics.order_committed();
    log::info!(
        "Customer {} placed order {} at restaurant {}",
        order.customer_id,
        order.id,
        order.restaurant_id
    );

    state.events.spawn_order_placed(order.clone());

    Ok(ApiResponse::created(
        "Order placed successfully",
        OrderDto::from(order),
    ))
}

/// GET /api/orders
///
/// The calling customer's own orders
pub async fn list_own_orders(
    State(state): State<AppState>,
    caller: Caller,
) -> ApiResult<ApiResponse<Vec<OrderDto>>> {
    state.authorize(&caller, Operation::ListOwnOrders, None)?;
    let user = caller.user()?;

    let orders = state.orders.find_by_customer(user.user_id()).await?;

    Ok(ApiResponse::ok(
        "Customer orders retrieved",
        orders.into_iter().map(OrderDto::from).collect(),
    ))
}

/// GET /api/orders/restaurant/{id}
///
/// Owner of the restaurant (or ADMIN) only
pub async fn list_restaurant_orders(
    State(state): State<AppState>,
    caller: Caller,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<ApiResponse<Vec<OrderDto>>> {
    let Path(restaurant_id) = path?;
    let restaurant = state.restaurants.find_by_id(restaurant_id).await?;
    state.authorize(
        &caller,
        Operation::ListRestaurantOrders,
        restaurant.as_ref().map(|r| r.owner_id),
    )?;
    let restaurant = restaurant.ok_or_else(|| restaurant_not_found(restaurant_id))?;

    let orders = state.orders.find_by_restaurant(restaurant.id).await?;

    Ok(ApiResponse::ok(
        "Orders for restaurant retrieved",
        orders.into_iter().map(OrderDto::from).collect(),
    ))
}
