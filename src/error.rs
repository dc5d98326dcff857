use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub type ApiResult<T> = Result<T, ApiError>;

/// API error types
///
/// Each variant maps to exactly one status code and wire body. `Internal`
/// retains its detail for server-side diagnostics only; the client always
/// sees a generic message.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("product not found")]
    NotFound,

    #[error("invalid or missing API key")]
    Unauthorized,

    #[error("internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            ApiError::Validation(violations) => Json(json!({ "errors": violations })),
            ApiError::NotFound => Json(json!({ "message": "Product not found" })),
            ApiError::Unauthorized => Json(json!({ "error": "Invalid or missing API key" })),
            ApiError::Internal(detail) => {
                // Detail stays on the server side; the client gets the
                // generic message only.
                tracing::error!(detail = %detail, "internal server error");
                Json(json!({ "error": "Something went wrong!" }))
            }
        };

        (status, body).into_response()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Internal(format!("JSON error: {err}"))
    }
}
