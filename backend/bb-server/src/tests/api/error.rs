use crate::ApiError;

use bb_auth::DenyReason;
use bb_db::DbError;

use std::collections::BTreeMap;
use std::panic::Location;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use error_location::ErrorLocation;
use http_body_util::BodyExt;

async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn given_forbidden_when_rendered_then_403_envelope_with_null_data() {
    let response = ApiError::forbidden("place_order", DenyReason::RoleMismatch).into_response();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["status"], 403);
    assert_eq!(json["message"], "Access denied: insufficient role");
    assert!(json["data"].is_null());
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn given_not_found_when_rendered_then_404_envelope_with_message() {
    let response = ApiError::not_found("Restaurant 9 not found").into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["status"], 404);
    assert_eq!(json["message"], "Restaurant 9 not found");
    assert!(json["data"].is_null());
}

#[tokio::test]
async fn given_validation_error_when_rendered_then_400_with_field_map() {
    let mut errors = BTreeMap::new();
    errors.insert(
        "name".to_string(),
        "must not be blank; size must be between 2 and 100".to_string(),
    );
    let error = ApiError::Validation {
        errors,
        location: ErrorLocation::from(Location::caller()),
    };

    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Validation failed");
    assert_eq!(
        json["data"]["name"],
        "must not be blank; size must be between 2 and 100"
    );
}

#[tokio::test]
async fn given_internal_error_when_rendered_then_details_not_leaked() {
    let error = ApiError::Internal {
        message: "lock poisoned in table restaurants".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["message"], "An unexpected error occurred");
    assert!(!json.to_string().contains("poisoned"));
}

#[test]
fn given_db_not_found_when_converted_then_not_found_names_entity() {
    let error = ApiError::from(DbError::NotFound {
        entity: "Menu item",
        id: 5,
        location: ErrorLocation::from(Location::caller()),
    });

    match error {
        ApiError::NotFound { message, .. } => assert_eq!(message, "Menu item 5 not found"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn given_db_integrity_error_when_converted_then_internal() {
    let error = ApiError::from(DbError::Integrity {
        message: "restaurant 1 does not exist".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    assert!(matches!(error, ApiError::Internal { .. }));
}
