use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalog_core::error::{CoreError, ErrorCode};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds request-decoding failures.
/// Implements [`IntoResponse`] to produce the `{errorCode, errorMessage}` body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `catalog_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request could not be decoded (bad JSON body, non-integer id).
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Core(core) => core.code(),
            AppError::BadRequest(_) => ErrorCode::MalformedRequest,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        let message = match &self {
            AppError::Core(core @ CoreError::Internal(detail)) => {
                tracing::error!(error = %detail, "Internal error");
                core.public_message()
            }
            AppError::Core(core) => core.public_message(),
            AppError::BadRequest(msg) => msg.clone(),
        };

        let status =
            StatusCode::from_u16(code.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = json!({
            "errorCode": code.as_str(),
            "errorMessage": message,
        });

        (status, axum::Json(body)).into_response()
    }
}
