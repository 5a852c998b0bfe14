use error_location::ErrorLocation;
use thiserror::Error;

/// Authentication failures raised at the edge.
///
/// Every variant maps to a 401; none is retried automatically.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing or invalid Authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Malformed token: {message} {location}")]
    MalformedToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid token signature {location}")]
    InvalidSignature { location: ErrorLocation },

    #[error("Token expired {location}")]
    Expired { location: ErrorLocation },

    #[error("Token signing failed: {message} {location}")]
    Signing {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Machine-readable failure kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingHeader { .. } => "MISSING_AUTH_HEADER",
            Self::MalformedToken { .. } => "MALFORMED_TOKEN",
            Self::InvalidSignature { .. } => "INVALID_SIGNATURE",
            Self::Expired { .. } => "TOKEN_EXPIRED",
            Self::Signing { .. } => "SIGNING_FAILED",
        }
    }

    /// Client-safe description (no source locations)
    pub fn reason(&self) -> String {
        match self {
            Self::MissingHeader { .. } => "Missing or invalid Authorization header".to_string(),
            Self::MalformedToken { message, .. } => format!("malformed token ({message})"),
            Self::InvalidSignature { .. } => "invalid signature".to_string(),
            Self::Expired { .. } => "token expired".to_string(),
            Self::Signing { .. } => "token could not be signed".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
