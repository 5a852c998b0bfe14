//! Axum extractor for the caller's identity

use crate::{ApiError, ApiResult};

use bb_auth::DenyReason;
use bb_core::SecurityContext;

use std::convert::Infallible;
use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// The request's security context, if the security-context layer built one.
///
/// Never rejects: an anonymous caller is `Caller(None)`, and it is up to the
/// authorization guard to decide what that caller may do.
#[derive(Debug, Clone)]
pub struct Caller(pub Option<SecurityContext>);

impl Caller {
    pub fn context(&self) -> Option<&SecurityContext> {
        self.0.as_ref()
    }

    /// The authenticated identity, or 403 for an anonymous caller
    #[track_caller]
    pub fn user(&self) -> ApiResult<&SecurityContext> {
        self.0
            .as_ref()
            .ok_or_else(|| ApiError::forbidden("identify_caller", DenyReason::Unauthenticated))
    }
}

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move { Ok(Caller(parts.extensions.get::<SecurityContext>().cloned())) }
    }
}
