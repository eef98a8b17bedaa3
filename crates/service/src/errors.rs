use axum::http::StatusCode;
use sea_orm::DbErr;
use thiserror::Error;

/// Status classification carried by every `ServiceError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NotFound,
    BadRequest,
    Internal,
}

impl ErrorCode {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::BadRequest => StatusCode::BAD_REQUEST,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Failures raised by a storage backend.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Db(#[from] DbErr),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Underlying reason behind a `ServiceError`. Logged, never sent to clients.
#[derive(Debug, Error)]
pub enum Cause {
    #[error("no product with id {0}")]
    Missing(i32),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
    #[error("malformed price literal: {0}")]
    PriceFormat(#[source] rust_decimal::Error),
    #[error("price does not fit the decimal column: {0}")]
    PriceConstruction(#[source] rust_decimal::Error),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("operation cancelled by caller")]
    Cancelled,
}

/// Classified failure of a product operation.
///
/// `Display` yields only the caller-facing message; the cause is reachable
/// through `std::error::Error::source`.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ServiceError {
    pub message: &'static str,
    #[source]
    pub error: Cause,
    pub code: ErrorCode,
}

impl ServiceError {
    pub fn not_found(message: &'static str, error: Cause) -> Self {
        Self { message, error, code: ErrorCode::NotFound }
    }

    pub fn bad_request(message: &'static str, error: Cause) -> Self {
        Self { message, error, code: ErrorCode::BadRequest }
    }

    pub fn internal(message: &'static str, error: Cause) -> Self {
        Self { message, error, code: ErrorCode::Internal }
    }

    pub fn status(&self) -> StatusCode { self.code.status() }
}
