//! REST API error types
//!
//! Every failure is rendered in the same envelope as a success, with
//! `data` set to `null` (or to the per-field messages for validation).

use crate::ApiResponse;

use bb_auth::DenyReason;
use bb_db::DbError;

use std::collections::BTreeMap;
use std::panic::Location;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde_json::Value;
use thiserror::Error;

/// Returned to clients for every 500; details stay in the log
const INTERNAL_MESSAGE: &str = "An unexpected error occurred";

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Authorization guard said no (403)
    #[error("Forbidden: {operation} denied ({}) {location}", .reason.code())]
    Forbidden {
        operation: &'static str,
        reason: DenyReason,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// One or more request fields are invalid (400)
    #[error("Validation failed: {errors:?} {location}")]
    Validation {
        /// Field name to its messages joined with `"; "`
        errors: BTreeMap<String, String>,
        location: ErrorLocation,
    },

    /// Request body or path could not be parsed (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn forbidden(operation: &'static str, reason: DenyReason) -> Self {
        Self::Forbidden {
            operation,
            reason,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, data) = match &self {
            ApiError::Forbidden { reason, .. } => {
                log::info!("{}", self);
                (StatusCode::FORBIDDEN, reason.message().to_string(), Value::Null)
            }
            ApiError::NotFound { message, .. } => {
                log::debug!("{}", self);
                (StatusCode::NOT_FOUND, message.clone(), Value::Null)
            }
            ApiError::Validation { errors, .. } => {
                log::debug!("{}", self);
                let data = errors
                    .iter()
                    .map(|(field, message)| (field.clone(), Value::String(message.clone())))
                    .collect();
                (
                    StatusCode::BAD_REQUEST,
                    "Validation failed".to_string(),
                    Value::Object(data),
                )
            }
            ApiError::BadRequest { message, .. } => {
                log::warn!("{}", self);
                (StatusCode::BAD_REQUEST, message.clone(), Value::Null)
            }
            ApiError::Internal { .. } => {
                log::error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_MESSAGE.to_string(),
                    Value::Null,
                )
            }
        };

        ApiResponse::new(status, message, data).into_response()
    }
}

/// Convert repository errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match &e {
            DbError::NotFound { entity, id, .. } => ApiError::NotFound {
                message: format!("{} {} not found", entity, id),
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::Integrity { .. } => ApiError::Internal {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Unreadable or mistyped JSON bodies
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: format!("Malformed request body: {}", rejection.body_text()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Path segments that do not parse as the expected ids
impl From<PathRejection> for ApiError {
    #[track_caller]
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest {
            message: format!("Invalid path parameter: {}", rejection.body_text()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
