use crate::{Claims, Result as AuthErrorResult};

/// Turns a raw bearer credential into verified identity claims.
///
/// Implementations must be free of side effects and must never log the
/// credential itself.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> AuthErrorResult<Claims>;
}
