use crate::{ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_SERVER_PORT, MIN_PORT};

use serde::Deserialize;

/// Internal restaurant/order service listener
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_SERVER_PORT,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        validate_port("server.port", self.port).map_err(ConfigError::server)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Port 0 means "auto-assign"; any other port must be >= MIN_PORT
pub(crate) fn validate_port(field: &str, port: u16) -> Result<(), String> {
    if port != 0 && port < MIN_PORT {
        return Err(format!(
            "{field} must be 0 (auto) or >= {MIN_PORT}, got {port}"
        ));
    }
    Ok(())
}
