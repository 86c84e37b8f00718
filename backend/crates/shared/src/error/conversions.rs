//! Boundary conversions
//!
//! `sqlx::Error` → [`AppError`] (feature `sqlx`) and the RFC 7807 rendering
//! of [`AppError`] (feature `axum`).

use super::app_error::AppError;
use super::kind::ErrorKind;

/// Postgres SQLSTATE → kind and a message safe to show
///
/// <https://www.postgresql.org/docs/current/errcodes-appendix.html>
pub fn classify_sqlstate(code: &str) -> (ErrorKind, &'static str) {
    match code {
        "23503" => (ErrorKind::Conflict, "Referenced record does not exist"),
        "23505" => (ErrorKind::Conflict, "Duplicate key value"),
        "23502" | "23514" => (ErrorKind::BadRequest, "Constraint violation"),
        "57014" => (ErrorKind::RequestTimeout, "Query canceled"),
        "57P01" | "57P02" | "57P03" => (ErrorKind::ServiceUnavailable, "Database unavailable"),
        _ => (ErrorKind::InternalServerError, "Database error"),
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let (kind, message) = match &err {
            sqlx::Error::RowNotFound => (ErrorKind::NotFound, "Record not found"),
            sqlx::Error::PoolTimedOut => (
                ErrorKind::ServiceUnavailable,
                "Database connection pool exhausted",
            ),
            sqlx::Error::Io(_) => (ErrorKind::ServiceUnavailable, "Database connection error"),
            sqlx::Error::Database(db_err) => db_err
                .code()
                .map(|code| classify_sqlstate(&code))
                .unwrap_or((ErrorKind::InternalServerError, "Database error")),
            _ => (ErrorKind::InternalServerError, "Database error"),
        };
        AppError::new(kind, message).with_source(err)
    }
}

/// RFC 7807 problem body
#[cfg(feature = "axum")]
#[derive(serde::Serialize)]
struct Problem<'a> {
    #[serde(rename = "type")]
    type_uri: String,
    title: &'static str,
    status: u16,
    detail: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<&'a str>,
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::{StatusCode, header};

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let problem = Problem {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: self.kind().as_str(),
            status: status.as_u16(),
            detail: self.public_detail(),
            action: self.action(),
        };

        (
            status,
            [(header::CONTENT_TYPE, "application/problem+json")],
            axum::Json(problem),
        )
            .into_response()
    }
}
