//! # REST API Errors
//!
//! Every rejected request is answered with `400 Bad Request` and a plain-text
//! reason. Validation failures, missing records and store faults are not
//! told apart by status code; only the body differs.

use crate::infrastructure::persistence::RepositoryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Reason returned when a lookup by id finds nothing.
pub const DATA_NOT_FOUND: &str = "Data Not Found";

/// Reason returned when an update or delete targets an unknown id.
pub const ID_NOT_FOUND: &str = "Id not found";

/// Result type for REST handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// A rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request carried no record (empty or `null` body).
    #[error("")]
    MissingBody,

    /// The body id disagrees with the id in the route.
    #[error("")]
    IdMismatch,

    /// The route or body could not be parsed.
    #[error("{0}")]
    InvalidRequest(String),

    /// The referenced record does not exist.
    #[error("{0}")]
    NotFound(&'static str),

    /// The store reported that nothing was updated.
    #[error("Update failed")]
    UpdateFailed,

    /// The store raised a fault; its message is passed through.
    #[error("{0}")]
    Fault(String),
}

impl ApiError {
    /// Creates an invalid request error.
    #[must_use]
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Returns true if the response carries no body.
    #[must_use]
    pub fn is_bodyless(&self) -> bool {
        matches!(self, Self::MissingBody | Self::IdMismatch)
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        Self::Fault(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.is_bodyless() {
            return StatusCode::BAD_REQUEST.into_response();
        }
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}
