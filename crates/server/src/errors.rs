use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::{ErrorCode, ServiceError};
use thiserror::Error;
use tracing::{error, warn};

/// JSON error body `{"error": message}` with an HTTP status.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({"error": self.message}))).into_response()
    }
}

/// The cause is logged here and dropped; clients only see the message.
impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e.code {
            ErrorCode::Internal => error!(cause = %e.error, reason = e.message, "product operation failed"),
            ErrorCode::NotFound | ErrorCode::BadRequest => warn!(cause = %e.error, reason = e.message, "product request rejected"),
        }
        Self::new(e.status(), e.message)
    }
}

/// Malformed bodies get a fixed message; the serde detail only reaches the log.
impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(rejection = %rejection.body_text(), "product payload rejected");
        Self::new(StatusCode::BAD_REQUEST, "Invalid product payload")
    }
}

impl From<PathRejection> for JsonApiError {
    fn from(rejection: PathRejection) -> Self {
        warn!(rejection = %rejection.body_text(), "product id rejected");
        Self::new(StatusCode::BAD_REQUEST, "Invalid product id")
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use service::errors::{Cause, RepositoryError};

    #[tokio::test]
    async fn internal_errors_do_not_leak_the_cause() {
        let err = ServiceError::internal(
            "Unable to get products",
            Cause::Repository(RepositoryError::Unavailable("password authentication failed".into())),
        );
        let res = JsonApiError::from(err).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({"error": "Unable to get products"}));
    }

    #[test]
    fn not_found_keeps_status() {
        let err = ServiceError::not_found("Product not found", Cause::Missing(9));
        let api = JsonApiError::from(err);
        assert_eq!(api.status, StatusCode::NOT_FOUND);
        assert_eq!(api.message, "Product not found");
    }
}
