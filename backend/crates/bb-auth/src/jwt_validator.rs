use crate::{AuthError, Claims, Result as AuthErrorResult, TokenVerifier};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// HS256 bearer-token validator backed by a pre-shared secret
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    /// Create validator with HS256 (symmetric secret, used as raw bytes)
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against an explicit clock in `verify_at`
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Verify `token` as of `now` (Unix seconds).
    ///
    /// The token is valid only while `now < exp`.
    #[track_caller]
    pub fn verify_at(&self, token: &str, now: i64) -> AuthErrorResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature => AuthError::InvalidSignature {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    ErrorKind::ExpiredSignature => AuthError::Expired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::MalformedToken {
                        message: e.to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        let claims = token_data.claims;

        if now >= claims.exp {
            return Err(AuthError::Expired {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        claims.validate()?;

        Ok(claims)
    }

    /// Get the algorithm being used (for logging)
    pub fn algorithm(&self) -> &'static str {
        "HS256"
    }
}

impl TokenVerifier for JwtValidator {
    fn verify(&self, token: &str) -> AuthErrorResult<Claims> {
        self.verify_at(token, chrono::Utc::now().timestamp())
    }
}
