//! Gateway error responses
//!
//! The edge answers in plain text; JSON envelopes belong to the services
//! behind it.

use std::panic::Location;

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Authentication failed at the edge (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// No route for the request path (404)
    #[error("No route for {path} {location}")]
    NoRoute {
        path: String,
        location: ErrorLocation,
    },

    /// Request body could not be read (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Upstream unreachable or failed mid-response (502)
    #[error("Upstream error: {message} {location}")]
    Upstream {
        message: String,
        location: ErrorLocation,
    },
}

impl GatewayError {
    #[track_caller]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            GatewayError::Unauthorized { message, .. } => {
                log::debug!("Rejected at edge: {message}");
                (StatusCode::UNAUTHORIZED, message)
            }
            GatewayError::NoRoute { path, .. } => {
                log::debug!("No route matched {path}");
                (StatusCode::NOT_FOUND, "No matching route found".to_string())
            }
            GatewayError::BadRequest { message, .. } => {
                log::warn!("Bad request at edge: {message}");
                (StatusCode::BAD_REQUEST, "Bad request".to_string())
            }
            e @ GatewayError::Upstream { .. } => {
                log::error!("{e}");
                (StatusCode::BAD_GATEWAY, "Bad gateway".to_string())
            }
        };

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body,
        )
            .into_response()
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
