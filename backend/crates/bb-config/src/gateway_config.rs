use crate::server_config::validate_port;
use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_API_UPSTREAM, DEFAULT_AUTH_UPSTREAM,
    DEFAULT_GATEWAY_PORT, DEFAULT_HOST, DEFAULT_NOTIFICATION_UPSTREAM,
    DEFAULT_UPSTREAM_TIMEOUT_SECS, MAX_UPSTREAM_TIMEOUT_SECS, RouteConfig,
};

use std::collections::HashSet;

use serde::Deserialize;

/// Edge gateway listener and route table
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
    /// Upstream request timeout in seconds
    pub upstream_timeout_secs: u64,
    pub routes: Vec<RouteConfig>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_GATEWAY_PORT,
            upstream_timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
            routes: vec![
                RouteConfig::new("/auth", DEFAULT_AUTH_UPSTREAM, false),
                RouteConfig::new("/api/restaurants", DEFAULT_API_UPSTREAM, true),
                RouteConfig::new("/api/orders", DEFAULT_API_UPSTREAM, true),
                RouteConfig::new("/api/notifications", DEFAULT_NOTIFICATION_UPSTREAM, true),
            ],
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        validate_port("gateway.port", self.port).map_err(ConfigError::gateway)?;

        if self.upstream_timeout_secs == 0 || self.upstream_timeout_secs > MAX_UPSTREAM_TIMEOUT_SECS
        {
            return Err(ConfigError::gateway(format!(
                "gateway.upstream_timeout_secs must be 1-{}, got {}",
                MAX_UPSTREAM_TIMEOUT_SECS, self.upstream_timeout_secs
            )));
        }

        if self.routes.is_empty() {
            return Err(ConfigError::gateway("gateway.routes must not be empty"));
        }

        let mut seen = HashSet::new();
        for route in &self.routes {
            if !route.prefix.starts_with('/') {
                return Err(ConfigError::gateway(format!(
                    "route prefix must start with '/', got '{}'",
                    route.prefix
                )));
            }

            if !seen.insert(route.prefix.trim_end_matches('/')) {
                return Err(ConfigError::gateway(format!(
                    "duplicate route prefix '{}'",
                    route.prefix
                )));
            }

            let upstream = route.upstream.as_str();
            let rest = upstream
                .strip_prefix("http://")
                .or_else(|| upstream.strip_prefix("https://"));

            if !rest.is_some_and(|host| !host.is_empty() && !host.starts_with('/')) {
                return Err(ConfigError::gateway(format!(
                    "upstream for '{}' must be an absolute http(s) URL, got '{}'",
                    route.prefix, route.upstream
                )));
            }
        }

        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
