use crate::{GatewayState, edge_auth, health, proxy};

use axum::{Router, middleware, routing::get};
use tower_http::cors::{Any, CorsLayer};

/// Build the edge router: health endpoint plus a catch-all proxy behind the auth gate
pub fn build_router(state: GatewayState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .fallback(proxy::forward)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            edge_auth::edge_auth,
        ))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
