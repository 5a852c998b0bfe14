use crate::{GatewayError, GatewayState};

use bb_auth::{AuthError, extract_bearer, mint_trusted_headers, strip_trusted_headers};

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

/// Edge authentication gate.
///
/// Runs once per inbound request, before the body is read:
/// 1. Strip every client-supplied `X-User-*` header, on all routes
/// 2. Public or unmatched routes pass through without verification
/// 3. Require `Authorization: Bearer <token>` and verify it
/// 4. Mint the trusted headers from the verified claims
pub async fn edge_auth(
    State(state): State<GatewayState>,
    mut request: Request,
    next: Next,
) -> Response {
    let stripped = strip_trusted_headers(request.headers_mut());
    if stripped > 0 {
        state.metrics.spoofed_headers_stripped(stripped);
        log::warn!(
            "Stripped {} client-supplied identity header(s) from {} {}",
            stripped,
            request.method(),
            request.uri().path()
        );
    }

    let Some(route) = state.routes.resolve(request.uri().path()).cloned() else {
        return next.run(request).await;
    };

    if !route.authenticated {
        state.metrics.public_forwarded();
        request.extensions_mut().insert(route);
        return next.run(request).await;
    }

    let claims = match extract_bearer(request.headers())
        .and_then(|token| state.verifier.verify(token))
    {
        Ok(claims) => claims,
        Err(e) => return reject(&state, e),
    };

    if let Err(e) = mint_trusted_headers(request.headers_mut(), &claims) {
        return reject(&state, e);
    }

    state.metrics.authenticated();
    log::debug!(
        "Authenticated subject {} for {} {}",
        claims.sub,
        request.method(),
        request.uri().path()
    );

    request.extensions_mut().insert(route);
    next.run(request).await
}

fn reject(state: &GatewayState, error: AuthError) -> Response {
    state.metrics.rejected(error.kind());

    let message = match error {
        AuthError::MissingHeader { .. } => error.reason(),
        _ => format!("JWT verification failed: {}", error.reason()),
    };

    GatewayError::unauthorized(message).into_response()
}
