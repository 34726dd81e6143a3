//! HTTP error type.
//!
//! Every failure leaves the API as a status code plus a `{"detail": "..."}` JSON body. Server
//! errors are logged when they are rendered.

use api_shared::ErrorRes;
use axum::{
    extract::rejection::{BytesRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use intake_core::Outcome;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, detail)
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, detail)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// Translates a read outcome: success passes the payload through, not found becomes 404 with
    /// `not_found`, and any other status becomes 500 with `failure_prefix` followed by the raw
    /// status.
    pub fn from_read<T>(
        outcome: Outcome<T>,
        not_found: &str,
        failure_prefix: &str,
    ) -> Result<T, Self> {
        match outcome {
            Outcome::Success(payload) => Ok(payload),
            Outcome::NotFound => Err(Self::not_found(not_found)),
            Outcome::Failure(status) => Err(Self::internal(format!("{failure_prefix}{status}"))),
        }
    }

    /// Translates a write outcome: anything but success is a 500 echoing the raw status.
    pub fn from_write<T>(outcome: Outcome<T>, failure_prefix: &str) -> Result<T, Self> {
        match outcome {
            Outcome::Success(payload) => Ok(payload),
            other => Err(Self::internal(format!(
                "{failure_prefix}{}",
                other.status()
            ))),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.detail)
    }
}

impl std::error::Error for ApiError {}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!("{} {}", self.status.as_u16(), self.detail);
        }
        (self.status, Json(ErrorRes { detail: self.detail })).into_response()
    }
}
