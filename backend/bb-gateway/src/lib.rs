//! Edge gateway: the only component that turns a bearer token into trusted
//! identity headers for internal services.

pub mod app_state;
pub mod edge_auth;
pub mod error;
pub mod gateway_metrics;
pub mod health;
pub mod proxy;
pub mod route_table;
pub mod routes;

pub use app_state::GatewayState;
pub use error::{GatewayError, Result};
pub use gateway_metrics::GatewayMetrics;
pub use route_table::{Route, RouteTable};
pub use routes::build_router;
