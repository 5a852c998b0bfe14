use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// JWT claims issued by the auth service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: decimal user id
    pub sub: String,
    /// Role name as issued; may use a legacy spelling
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub email: String,
    /// Issued at (Unix seconds)
    pub iat: i64,
    /// Expiration (Unix seconds)
    pub exp: i64,
}

impl Claims {
    /// Build claims for `user_id` valid for `lifetime` starting at `now` (Unix seconds)
    pub fn new(user_id: i64, role: &str, email: &str, now: i64, lifetime: Duration) -> Self {
        let lifetime_secs = i64::try_from(lifetime.as_secs()).unwrap_or(i64::MAX);

        Self {
            sub: user_id.to_string(),
            role: role.to_string(),
            email: email.to_string(),
            iat: now,
            exp: now.saturating_add(lifetime_secs),
        }
    }

    /// Subject parsed as a positive user id
    #[track_caller]
    pub fn user_id(&self) -> AuthErrorResult<i64> {
        match self.sub.parse::<i64>() {
            Ok(id) if id > 0 => Ok(id),
            _ => Err(AuthError::MalformedToken {
                message: "subject is not a positive integer user id".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    /// Validate claims after signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        self.user_id()?;

        if self.exp < self.iat {
            return Err(AuthError::MalformedToken {
                message: "exp precedes iat".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
