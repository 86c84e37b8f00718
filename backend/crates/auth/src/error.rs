//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Caller-visible message for every credential failure
const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

/// Caller-visible message for every session failure
const INVALID_SESSION_MESSAGE: &str = "Session is invalid or expired";

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Malformed input (name, email, password, token)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Unknown user, wrong password or insufficient role at login
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No stored session matches the presented token
    #[error("Session not found")]
    SessionInvalid,

    /// Session matched but its expiry instant has passed
    #[error("Session expired")]
    SessionExpired,

    /// Authenticated but not allowed
    #[error("Forbidden")]
    Forbidden,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials | AuthError::SessionInvalid | AuthError::SessionExpired => {
                StatusCode::UNAUTHORIZED
            }
            AuthError::Forbidden => StatusCode::FORBIDDEN,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::InvalidCredentials | AuthError::SessionInvalid | AuthError::SessionExpired => {
                ErrorKind::Unauthorized
            }
            AuthError::Forbidden => ErrorKind::Forbidden,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Message safe to show the caller
    ///
    /// Session failures share one message so a caller cannot tell a missing
    /// session from an expired one.
    pub fn public_message(&self) -> String {
        match self {
            AuthError::Validation(msg) => msg.clone(),
            AuthError::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE.to_string(),
            AuthError::SessionInvalid | AuthError::SessionExpired => {
                INVALID_SESSION_MESSAGE.to_string()
            }
            AuthError::Forbidden => "You do not have permission to access this resource".to_string(),
            AuthError::Database(_) | AuthError::Internal(_) => {
                self.kind().as_str().to_string()
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.public_message());
        match self {
            AuthError::InvalidCredentials => err.with_action("Please check your name and password"),
            AuthError::SessionInvalid | AuthError::SessionExpired => {
                err.with_action("Please log in again")
            }
            _ => err,
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::SessionInvalid => {
                tracing::warn!("Unknown session token presented");
            }
            AuthError::SessionExpired => {
                tracing::info!("Expired session presented");
            }
            AuthError::Forbidden => {
                tracing::warn!("Non-admin session attempted an admin operation");
            }
            AuthError::Validation(_) => {
                tracing::debug!(error = %self, "Auth validation error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        if err.is_client_error() {
            AuthError::Validation(err.message().to_string())
        } else {
            AuthError::Internal(err.to_string())
        }
    }
}
