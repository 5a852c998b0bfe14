use crate::AppState;

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::Response;

/// Rebuild the caller's identity from trusted headers.
///
/// The resulting `SecurityContext` lives in the request's extensions and is
/// dropped with the request. Missing, malformed or untrusted headers leave
/// the request anonymous; they never fail it here.
pub async fn bind_security_context(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip());

    match state.trust.reconstruct(request.headers(), peer) {
        Some(ctx) => {
            request.extensions_mut().insert(ctx);
        }
        None => state.metrics.anonymous_request(),
    }

    next.run(request).await
}
