mod auth_config;
mod broker_config;
mod config;
mod error;
mod gateway_config;
mod log_level;
pub mod logger;
mod logging_config;
mod route_config;
mod server_config;
mod trust_config;

pub use auth_config::AuthConfig;
pub use broker_config::BrokerConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use gateway_config::GatewayConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use route_config::RouteConfig;
pub use server_config::ServerConfig;
pub use trust_config::{TrustConfig, TrustZoneKind};

#[cfg(test)]
mod tests;

// Server
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_SERVER_PORT: u16 = 8081;
const DEFAULT_GATEWAY_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;

// Gateway
const DEFAULT_AUTH_UPSTREAM: &str = "http://127.0.0.1:8083";
const DEFAULT_API_UPSTREAM: &str = "http://127.0.0.1:8081";
const DEFAULT_NOTIFICATION_UPSTREAM: &str = "http://127.0.0.1:8084";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;
const MAX_UPSTREAM_TIMEOUT_SECS: u64 = 300;

// Auth
const DEFAULT_TOKEN_LIFETIME: &str = "3h";
const MIN_JWT_SECRET_LENGTH: usize = 32;

// Broker
pub const DEFAULT_ORDER_TOPIC: &str = "order-placed-topic";
const DEFAULT_CHANNEL_CAPACITY: usize = 256;
const MIN_CHANNEL_CAPACITY: usize = 1;
const MAX_CHANNEL_CAPACITY: usize = 65_536;

// Logging
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
const DEFAULT_LOG_DIRECTORY: &str = "log";

// Paths
const CONFIG_DIR_ENV: &str = "BB_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".bb";
const CONFIG_FILE_NAME: &str = "config.toml";
