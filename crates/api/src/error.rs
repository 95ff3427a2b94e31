use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use biztime_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] as the single boundary translator: a
/// `NotFound` becomes 404 and every other failure becomes a sanitized 500.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level outcome from the service layer.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request body could not be read into the expected shape.
    #[error("Unreadable request body: {0}")]
    Body(#[from] JsonRejection),

    /// A path parameter could not be parsed.
    #[error("Unreadable path parameter: {0}")]
    Path(#[from] PathRejection),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(CoreError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", self.to_string())
            }
            other => {
                tracing::error!(error = %other, "Unhandled request failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
