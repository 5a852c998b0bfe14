use crate::{ApiError, ApiResult, Caller, ServerMetrics};

use bb_auth::{Decision, HeaderTrust, Operation, TrustZone, authorize};
use bb_config::{ConfigErrorResult, TrustConfig, TrustZoneKind};
use bb_db::{OrderRepository, RestaurantRepository};
use bb_events::OrderEvents;

use std::sync::Arc;

/// Shared state for the restaurant and order handlers
#[derive(Clone)]
pub struct AppState {
    pub restaurants: RestaurantRepository,
    pub orders: OrderRepository,
    pub events: OrderEvents,
    pub trust: Arc<HeaderTrust>,
    pub metrics: ServerMetrics,
}

impl AppState {
    pub fn new(
        restaurants: RestaurantRepository,
        orders: OrderRepository,
        events: OrderEvents,
        trust: HeaderTrust,
    ) -> Self {
        Self {
            restaurants,
            orders,
            events,
            trust: Arc::new(trust),
            metrics: ServerMetrics::new(),
        }
    }

    /// Run the authorization guard for `operation`, mapping a denial to 403
    #[track_caller]
    pub fn authorize(
        &self,
        caller: &Caller,
        operation: Operation,
        resource_owner: Option<i64>,
    ) -> ApiResult<()> {
        match authorize(caller.context(), operation, resource_owner) {
            Decision::Allow => Ok(()),
            Decision::Deny(reason) => {
                self.metrics
                    .access_denied(operation.name(), reason.code());
                Err(ApiError::forbidden(operation.name(), reason))
            }
        }
    }
}

/// Resolve the configured trust zone
pub fn trust_zone_from(config: &TrustConfig) -> ConfigErrorResult<TrustZone> {
    Ok(match config.zone {
        TrustZoneKind::Any => TrustZone::Any,
        TrustZoneKind::PrivateNetwork => TrustZone::PrivateNetwork,
        TrustZoneKind::Allowlist => TrustZone::Allowlist(config.peers()?),
    })
}
