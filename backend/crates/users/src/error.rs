//! Users Error Types
//!
//! This module provides user-directory error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Users-specific result type alias
pub type UsersResult<T> = Result<T, UsersError>;

/// Users-specific error variants
///
/// The response body of each variant is a fixed plain-text message; details
/// carried by a variant are logged and never sent to the client.
#[derive(Debug, Error)]
pub enum UsersError {
    /// Requested identifier is not in the directory
    #[error("User not found")]
    UserNotFound,

    /// No route matches the method and path
    #[error("Resource Not Found")]
    RouteNotFound,

    /// Body could not be read or a required field is missing or empty (400)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Body is not a JSON user object
    #[error("Invalid JSON body: {0}")]
    Decode(serde_json::Error),

    /// Body exceeds the configured size limit
    #[error("Request body too large")]
    PayloadTooLarge,

    /// Response body could not be serialized
    #[error("Failed to encode response: {0}")]
    Encode(serde_json::Error),
}

impl UsersError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            UsersError::UserNotFound | UsersError::RouteNotFound => ErrorKind::NotFound,
            UsersError::InvalidRequest(_) => ErrorKind::BadRequest,
            UsersError::Decode(e) if e.is_io() => ErrorKind::InternalServerError,
            UsersError::Decode(_) => ErrorKind::BadRequest,
            UsersError::PayloadTooLarge => ErrorKind::PayloadTooLarge,
            UsersError::Encode(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        let kind = self.kind();
        if kind.is_server_error() {
            tracing::error!(error = %self, "Users request failed");
        } else if kind == ErrorKind::NotFound {
            tracing::debug!(error = %self, "Users lookup missed");
        } else {
            tracing::warn!(error = %self, "Rejected users request");
        }
    }
}

impl From<UsersError> for AppError {
    fn from(err: UsersError) -> Self {
        match err {
            UsersError::UserNotFound => AppError::not_found("User not found"),
            UsersError::RouteNotFound => AppError::not_found("Resource Not Found"),
            UsersError::InvalidRequest(detail) => {
                AppError::bad_request("Invalid request body").with_source(InvalidField(detail))
            }
            UsersError::Decode(e) => AppError::from(e),
            UsersError::PayloadTooLarge => AppError::payload_too_large("Payload Too Large"),
            UsersError::Encode(e) => AppError::internal("Internal Server Error").with_source(e),
        }
    }
}

impl IntoResponse for UsersError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

/// Carries the validation detail of an invalid request as an error source
#[derive(Debug, Error)]
#[error("{0}")]
struct InvalidField(String);
