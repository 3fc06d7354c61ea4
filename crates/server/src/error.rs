//! Unified error handling.
//!
//! Provides a unified `AppError` type that captures server-side errors to
//! Sentry before responding to the client. Business-rule failures (bad
//! credentials, unknown product) are handled locally in the handlers by
//! re-rendering the view with a message and never reach this type.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::auth::AuthError;
use crate::services::orders::OrderError;

/// Application-level error type for the back office.
#[derive(Debug, Error)]
pub enum AppError {
    /// Store operation failed.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Authentication operation failed unexpectedly.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Order placement failed.
    #[error("order error: {0}")]
    Order(#[from] OrderError),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server-side failures to Sentry; client errors are noise
        if matches!(self, Self::Repository(_) | Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Repository(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::WeakPassword(_) => StatusCode::BAD_REQUEST,
                AuthError::Repository(_) | AuthError::PasswordHash => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Order(err) => match err {
                OrderError::InvalidQuantity(_) | OrderError::InvalidPrice(_) => {
                    StatusCode::BAD_REQUEST
                }
                OrderError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Repository(_) | Self::Internal(_) => "Internal server error".to_owned(),
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => "Invalid email or password".to_owned(),
                AuthError::WeakPassword(msg) => msg.clone(),
                AuthError::Repository(_) | AuthError::PasswordHash => {
                    "Internal server error".to_owned()
                }
            },
            Self::Order(err) => match err {
                OrderError::Repository(_) => "Internal server error".to_owned(),
                other => other.to_string(),
            },
            Self::NotFound(what) => format!("Not found: {what}"),
            Self::BadRequest(msg) => msg.clone(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        fn status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            status(AppError::NotFound("admin 9".to_owned())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status(AppError::Auth(AuthError::InvalidCredentials)),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status(AppError::Auth(AuthError::WeakPassword(
                "password must be at least 8 characters".to_owned()
            ))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status(AppError::BadRequest("invalid role".to_owned())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status(AppError::Internal("boom".to_owned())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let response =
            AppError::Internal("connection string leaked?".to_owned()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
