use crate::{
    AppState, add_menu_item, change_restaurant_status, create_restaurant, get_menu,
    get_restaurant, health, list_own_orders, list_restaurant_orders, list_restaurants,
    place_order, security_context, update_menu_item,
};

use axum::{
    Router, middleware,
    routing::{get, patch, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Restaurants
        .route(
            "/api/restaurants",
            get(list_restaurants).post(create_restaurant),
        )
        .route("/api/restaurants/{id}", get(get_restaurant))
        .route("/api/restaurants/{id}/menu", get(get_menu).post(add_menu_item))
        .route(
            "/api/restaurants/{id}/menu/{item_id}",
            put(update_menu_item),
        )
        .route(
            "/api/restaurants/{id}/status",
            patch(change_restaurant_status),
        )
        // Orders
        .route("/api/orders", get(list_own_orders).post(place_order))
        .route(
            "/api/orders/restaurant/{id}",
            get(list_restaurant_orders),
        )
        // Identity from trusted headers, per request
        .layer(middleware::from_fn_with_state(
            state.clone(),
            security_context::bind_security_context,
        ))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
