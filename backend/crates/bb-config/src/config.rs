use crate::{
    AuthConfig, BrokerConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR_NAME, GatewayConfig, LoggingConfig, ServerConfig, TrustConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub gateway: GatewayConfig,
    pub auth: AuthConfig,
    pub trust: TrustConfig,
    pub broker: BrokerConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. BB_CONFIG_DIR env var, else ./.bb/
    /// 2. Auto-create the config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply BB_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: BB_CONFIG_DIR env var > ./.bb/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.gateway.validate()?;
        self.auth.validate()?;
        self.trust.validate()?;
        self.broker.validate()?;

        if let Some(file) = &self.logging.file
            && (Path::new(file).is_absolute() || file.contains(".."))
        {
            return Err(ConfigError::logging(
                "logging.file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Absolute log file path, if file logging is configured
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(file) = &self.logging.file else {
            return Ok(None);
        };

        let log_dir = Self::config_dir()?.join(&self.logging.dir);
        std::fs::create_dir_all(&log_dir).map_err(|e| ConfigError::Io {
            path: log_dir.clone(),
            source: e,
        })?;

        Ok(Some(log_dir.join(file)))
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}", self.server.bind_addr());
        info!(
            "  gateway: {} ({} routes, upstream timeout {}s)",
            self.gateway.bind_addr(),
            self.gateway.routes.len(),
            self.gateway.upstream_timeout_secs
        );

        for route in &self.gateway.routes {
            info!(
                "    {} -> {} ({})",
                route.prefix,
                route.upstream,
                if route.authenticated {
                    "authenticated"
                } else {
                    "public"
                }
            );
        }

        info!(
            "  auth: jwt_secret {}, token_lifetime={}",
            if self.auth.jwt_secret.is_some() {
                "set"
            } else {
                "unset"
            },
            self.auth.token_lifetime
        );

        info!(
            "  trust: zone={} ({} trusted peers)",
            self.trust.zone.as_str(),
            self.trust.trusted_peers.len()
        );

        info!(
            "  broker: order_topic={}, capacity={}",
            self.broker.order_topic, self.broker.channel_capacity
        );

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("BB_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("BB_SERVER_PORT", &mut self.server.port);

        // Gateway
        Self::apply_env_string("BB_GATEWAY_HOST", &mut self.gateway.host);
        Self::apply_env_parse("BB_GATEWAY_PORT", &mut self.gateway.port);
        Self::apply_env_parse(
            "BB_GATEWAY_UPSTREAM_TIMEOUT_SECS",
            &mut self.gateway.upstream_timeout_secs,
        );

        // Auth
        Self::apply_env_option_string("BB_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_string("BB_AUTH_TOKEN_LIFETIME", &mut self.auth.token_lifetime);

        // Trust
        Self::apply_env_parse("BB_TRUST_ZONE", &mut self.trust.zone);
        Self::apply_env_list("BB_TRUST_PEERS", &mut self.trust.trusted_peers);

        // Broker
        Self::apply_env_string("BB_BROKER_ORDER_TOPIC", &mut self.broker.order_topic);
        Self::apply_env_parse(
            "BB_BROKER_CHANNEL_CAPACITY",
            &mut self.broker.channel_capacity,
        );

        // Logging
        Self::apply_env_parse("BB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("BB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("BB_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Helper: Apply environment variable override for comma-separated lists
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
    }
}
