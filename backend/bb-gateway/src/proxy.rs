use crate::{GatewayError, GatewayState, Result as GatewayErrorResult, Route};

use std::panic::Location;

use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, header};
use axum::response::Response;
use error_location::ErrorLocation;

/// Largest request body forwarded upstream
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Headers that describe a single connection and must not be forwarded
const HOP_BY_HOP: [HeaderName; 8] = [
    header::CONNECTION,
    header::HOST,
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

/// Forward the request to the upstream chosen by `edge_auth`
pub async fn forward(
    State(state): State<GatewayState>,
    request: Request,
) -> GatewayErrorResult<Response> {
    let (parts, body) = request.into_parts();

    let Some(route) = parts.extensions.get::<Route>().cloned() else {
        return Err(GatewayError::NoRoute {
            path: parts.uri.path().to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    };

    let path_and_query = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let url = route.upstream_url(path_and_query);

    let body = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| GatewayError::BadRequest {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    log::debug!("Forwarding {} {} -> {}", parts.method, parts.uri, url);

    let upstream_response = state
        .client
        .request(parts.method.clone(), &url)
        .headers(forwardable(&parts.headers))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            state.metrics.upstream_failed();
            GatewayError::upstream(format!("{} {} failed: {}", parts.method, url, e))
        })?;

    let status = upstream_response.status();
    let headers = forwardable(upstream_response.headers());
    let bytes = upstream_response.bytes().await.map_err(|e| {
        state.metrics.upstream_failed();
        GatewayError::upstream(format!("reading response from {url} failed: {e}"))
    })?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;

    Ok(response)
}

fn forwardable(headers: &HeaderMap) -> HeaderMap {
    let mut out = headers.clone();
    for name in &HOP_BY_HOP {
        out.remove(name);
    }
    // Length is recomputed for the buffered body
    out.remove(header::CONTENT_LENGTH);
    out
}
