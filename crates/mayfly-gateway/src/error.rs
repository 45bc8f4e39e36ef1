use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mayfly_core::StoreError;
use serde::Serialize;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Gateway-level errors, mapped onto HTTP statuses.
#[derive(Debug)]
pub enum ApiError {
    /// Request validation failed before the store was invoked.
    Validation(String),
    /// A mapping store operation failed.
    Store(StoreError),
}

impl From<StoreError> for ApiError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Store(err) => match err {
                StoreError::InvalidInput(message) => (StatusCode::BAD_REQUEST, message),
                // Malformed, unknown, and expired codes all look the same
                // to clients.
                StoreError::InvalidCodeFormat(_) | StoreError::NotFoundOrExpired => (
                    StatusCode::NOT_FOUND,
                    "URL not found or expired".to_string(),
                ),
                StoreError::CodeSpaceExhausted { .. } => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate unique short code. Please try again.".to_string(),
                ),
                StoreError::Backend(err) => {
                    tracing::error!(error = %err, "backend failure");
                    (
                        StatusCode::SERVICE_UNAVAILABLE,
                        "Service unavailable. Please try again later.".to_string(),
                    )
                }
            },
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
