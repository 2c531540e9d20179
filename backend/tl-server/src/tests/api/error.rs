use crate::ApiError;

use tl_auth::AuthError;
use tl_core::{CoreError, Dimension};
use tl_db::DbError;

use std::panic::Location;
use std::str::FromStr;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use axum::http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Talent 3 not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Talent 3 not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::validation("name", "name must not be empty");

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "name");
}

#[tokio::test]
async fn test_unauthorized_returns_401() {
    let (status, json) = body_json(ApiError::unauthorized("login required")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_db_conflict_maps_to_409() {
    let error: ApiError = DbError::conflict("username 'alice' is already taken").into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "CONFLICT");
    assert_eq!(
        json["error"]["message"],
        "username 'alice' is already taken"
    );
}

#[tokio::test]
async fn test_db_not_found_maps_to_404() {
    let error: ApiError = DbError::not_found("Talent", 42).into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["message"], "Talent 42 not found");
}

#[tokio::test]
async fn test_db_validation_keeps_field_and_hides_location() {
    let error: ApiError = DbError::from(CoreError::validation("points", "points out of range")).into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "points");
    assert_eq!(json["error"]["message"], "points out of range");
}

#[tokio::test]
async fn test_storage_error_is_not_exposed() {
    let error: ApiError = DbError::from(sqlx::Error::PoolTimedOut).into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "Database operation failed");
}

#[tokio::test]
async fn test_invalid_dimension_maps_to_dimension_field() {
    let core = Dimension::from_str("charm").unwrap_err();
    let error: ApiError = core.into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "dimension");
}

#[tokio::test]
async fn test_password_hash_error_is_internal() {
    let error: ApiError = AuthError::PasswordHash {
        message: "bad params".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["message"], "Password processing failed");
}
