use crate::{ConfigError, ConfigErrorResult, DEFAULT_TOKEN_LIFETIME, MIN_JWT_SECRET_LENGTH};

use std::time::Duration;

use serde::Deserialize;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 shared secret, used as raw bytes
    pub jwt_secret: Option<String>,
    /// Token lifetime as a humantime string ("3h", "90m")
    pub token_lifetime: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_lifetime: String::from(DEFAULT_TOKEN_LIFETIME),
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("token_lifetime", &self.token_lifetime)
            .finish()
    }
}

impl AuthConfig {
    /// Validate what is present; the secret itself is only mandatory at the edge
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(secret) = &self.jwt_secret
            && secret.len() < MIN_JWT_SECRET_LENGTH
        {
            return Err(ConfigError::auth(format!(
                "jwt_secret must be at least {MIN_JWT_SECRET_LENGTH} characters"
            )));
        }

        self.token_lifetime()?;
        Ok(())
    }

    pub fn token_lifetime(&self) -> ConfigErrorResult<Duration> {
        let lifetime = humantime::parse_duration(&self.token_lifetime).map_err(|e| {
            ConfigError::auth(format!(
                "token_lifetime '{}' is not a valid duration: {e}",
                self.token_lifetime
            ))
        })?;

        if lifetime.is_zero() {
            return Err(ConfigError::auth("token_lifetime must be non-zero"));
        }

        Ok(lifetime)
    }

    /// Secret bytes for services that verify tokens
    pub fn require_jwt_secret(&self) -> ConfigErrorResult<&[u8]> {
        match &self.jwt_secret {
            Some(secret) if secret.len() >= MIN_JWT_SECRET_LENGTH => Ok(secret.as_bytes()),
            Some(_) => Err(ConfigError::auth(format!(
                "jwt_secret must be at least {MIN_JWT_SECRET_LENGTH} characters"
            ))),
            None => Err(ConfigError::auth(
                "jwt_secret is required (set [auth] jwt_secret or BB_AUTH_JWT_SECRET)",
            )),
        }
    }
}
