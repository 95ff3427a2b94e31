//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no HTTP server
//! is involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use biztime_api::error::AppError;
use biztime_core::error::CoreError;
use biztime_db::StoreError;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_returns_404_with_message() {
    let err = AppError::Core(CoreError::not_found_code("company", "fb"));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "There is no company with code 'fb'");
}

#[tokio::test]
async fn invoice_not_found_names_the_id() {
    let err = AppError::Core(CoreError::not_found_id("invoice", 7));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "There is no invoice with id '7'");
}

#[tokio::test]
async fn core_fault_returns_500_and_sanitizes_message() {
    let err = AppError::Core(CoreError::Fault("secret detail".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn store_errors_surface_as_sanitized_500() {
    for err in [
        StoreError::UniqueViolation("companies_pkey".into()),
        StoreError::ForeignKeyViolation("invoices_comp_code_fkey".into()),
        StoreError::CheckViolation("invoices_amt_check".into()),
        StoreError::Poisoned,
    ] {
        let core: CoreError = err.into();
        let (status, json) = error_to_response(AppError::from(core)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["code"], "INTERNAL_ERROR");
        assert_eq!(json["error"], "An internal error occurred");
    }
}
