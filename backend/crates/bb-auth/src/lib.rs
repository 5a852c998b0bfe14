pub mod bearer;
pub mod claims;
pub mod error;
pub mod guard;
pub mod header_trust;
pub mod jwt_issuer;
pub mod jwt_validator;
pub mod token_verifier;
pub mod trust_zone;
pub mod trusted_headers;

pub use bearer::extract_bearer;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use guard::{Decision, DenyReason, Operation, authorize};
pub use header_trust::HeaderTrust;
pub use jwt_issuer::JwtIssuer;
pub use jwt_validator::JwtValidator;
pub use token_verifier::TokenVerifier;
pub use trust_zone::TrustZone;
pub use trusted_headers::{
    DEFAULT_ROLE, X_USER_EMAIL, X_USER_ID, X_USER_ROLE, mint_trusted_headers,
    strip_trusted_headers,
};
