//! Error-code plumbing shared by route handlers.
//!
//! Service errors implement [`ErrorCode`]; routes turn them into an
//! [`ErrorBody`] with a status code chosen per route.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::WithRejection;
use teller::ErrorBody;

/// Stable machine-readable code plus retry hint for an error.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

/// Build an `ErrorBody` response from any [`ErrorCode`] error.
pub fn error_response<E: ErrorCode>(status: StatusCode, err: &E) -> Response {
    let body = ErrorBody::new(err.error_code(), err.to_string(), err.retryable());
    (status, Json(body)).into_response()
}

/// Route-level failures that are not owned by a service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Not signed in")]
    Unauthorized,
    /// The request body was missing, not JSON, or the wrong shape.
    #[error("{0}")]
    BadRequest(String),
    #[error("No payment selection stored for this session")]
    NoSelection,
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NoSelection => StatusCode::NOT_FOUND,
        }
    }
}

impl ErrorCode for ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized => "E_UNAUTHORIZED",
            Self::BadRequest(_) => "E_BAD_REQUEST",
            Self::NoSelection => "E_NO_SELECTION",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error_response(self.status(), &self)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// JSON body extractor whose rejection is an [`ErrorBody`].
pub type ApiJson<T> = WithRejection<Json<T>, ApiError>;

impl ErrorCode for teller::SelectionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoPaymentType => "E_NO_PAYMENT_TYPE",
            Self::MissingAccountNumber => "E_MISSING_ACCOUNT_NUMBER",
            Self::InvalidAccountNumber => "E_INVALID_ACCOUNT_NUMBER",
        }
    }
}
