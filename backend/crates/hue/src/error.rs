//! Hue Error Types
//!
//! Survey-specific error variants. Session failures are delegated to
//! [`AuthError`] so they render exactly like the auth endpoints.

use auth::AuthError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Hue-specific result type alias
pub type HueResult<T> = Result<T, HueError>;

/// Hue-specific error variants
#[derive(Debug, Error)]
pub enum HueError {
    /// Empty choice set, blank word/color, or color outside the palette
    #[error("Invalid choice: {0}")]
    InvalidChoice(String),

    /// Record range with `begin < 0` or `end < begin`
    #[error("Invalid record range [{begin}, {end}]")]
    InvalidRange { begin: i64, end: i64 },

    /// Metadata with blank or colliding keys
    #[error("Invalid user data: {0}")]
    InvalidUserData(String),

    /// Other malformed input (name, session data, request shape)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Session verification or authorization failure
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HueError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            HueError::InvalidChoice(_)
            | HueError::InvalidRange { .. }
            | HueError::InvalidUserData(_)
            | HueError::Validation(_) => StatusCode::BAD_REQUEST,
            HueError::Auth(e) => e.status_code(),
            HueError::Database(_) | HueError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            HueError::InvalidChoice(_)
            | HueError::InvalidRange { .. }
            | HueError::InvalidUserData(_)
            | HueError::Validation(_) => ErrorKind::BadRequest,
            HueError::Auth(e) => e.kind(),
            HueError::Database(_) | HueError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            HueError::Auth(e) => e.to_app_error(),
            HueError::Database(_) | HueError::Internal(_) => {
                AppError::new(self.kind(), self.kind().as_str())
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            HueError::Database(e) => {
                tracing::error!(error = %e, "Hue database error");
            }
            HueError::Internal(msg) => {
                tracing::error!(message = %msg, "Hue internal error");
            }
            HueError::Auth(e) => e.log(),
            _ => {
                tracing::debug!(error = %self, "Hue validation error");
            }
        }
    }
}

impl IntoResponse for HueError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for HueError {
    fn from(err: AppError) -> Self {
        if err.is_client_error() {
            HueError::Validation(err.message().to_string())
        } else {
            HueError::Internal(err.to_string())
        }
    }
}
