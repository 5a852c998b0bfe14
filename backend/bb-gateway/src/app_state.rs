use crate::{GatewayMetrics, RouteTable};

use bb_auth::TokenVerifier;

use std::sync::Arc;

/// Shared, read-only gateway state
#[derive(Clone)]
pub struct GatewayState {
    pub routes: Arc<RouteTable>,
    pub verifier: Arc<dyn TokenVerifier>,
    pub client: reqwest::Client,
    pub metrics: GatewayMetrics,
}

impl GatewayState {
    pub fn new(
        routes: RouteTable,
        verifier: Arc<dyn TokenVerifier>,
        client: reqwest::Client,
    ) -> Self {
        Self {
            routes: Arc::new(routes),
            verifier,
            client,
            metrics: GatewayMetrics::new(),
        }
    }
}
