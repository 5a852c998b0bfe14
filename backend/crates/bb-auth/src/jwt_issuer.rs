use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

/// HS256 token signer sharing the validator's secret.
///
/// Used by the auth service boundary and by tests; issuance policy itself
/// (refresh, rotation) lives outside this crate.
pub struct JwtIssuer {
    encoding_key: EncodingKey,
    lifetime: Duration,
}

impl JwtIssuer {
    pub fn with_hs256(secret: &[u8], lifetime: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            lifetime,
        }
    }

    /// Sign a fresh token for the given identity
    #[track_caller]
    pub fn issue(&self, user_id: i64, role: &str, email: &str) -> AuthErrorResult<String> {
        let claims = Claims::new(
            user_id,
            role,
            email,
            chrono::Utc::now().timestamp(),
            self.lifetime,
        );
        self.sign(&claims)
    }

    /// Sign pre-built claims as-is
    #[track_caller]
    pub fn sign(&self, claims: &Claims) -> AuthErrorResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            AuthError::Signing {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}
