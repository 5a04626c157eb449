//! HTTP error mapping for the versioned API.
//!
//! Handlers return [`AppResult`]; domain failures arrive as
//! [`CoreError`] and database failures as `sqlx::Error`, both via `?`.
//! `IntoResponse` turns every variant into the shared `{error, code}` JSON
//! envelope. The legacy send-email endpoint keeps its own `{success, ..}`
//! envelope and never goes through this type.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use stagedoor_core::error::CoreError;

/// Application-level error type for HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `stagedoor_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An infrastructure failure (password hashing, token signing) whose
    /// details belong in the server log, not the response.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Stable machine-readable error codes carried in the `code` field.
mod codes {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const VALIDATION: &str = "VALIDATION_ERROR";
    pub const CONFLICT: &str = "CONFLICT";
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const FORBIDDEN: &str = "FORBIDDEN";
    pub const INTERNAL: &str = "INTERNAL_ERROR";
}

/// Message used whenever details must not reach the client.
const GENERIC_INTERNAL_MESSAGE: &str = "An internal error occurred";

impl AppError {
    /// Resolve this error to the HTTP status, error code, and client-safe
    /// message. Anything mapped to 500 is logged here and sanitized.
    fn response_parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Core(core) => core_parts(core),
            AppError::Database(err) => database_parts(err),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    codes::INTERNAL,
                    GENERIC_INTERNAL_MESSAGE.to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.response_parts();
        let body = json!({
            "error": message,
            "code": code,
        });
        (status, axum::Json(body)).into_response()
    }
}

fn core_parts(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            codes::NOT_FOUND,
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, codes::VALIDATION, msg.clone()),
        CoreError::Conflict(msg) => (StatusCode::CONFLICT, codes::CONFLICT, msg.clone()),
        CoreError::Unauthorized(msg) => {
            (StatusCode::UNAUTHORIZED, codes::UNAUTHORIZED, msg.clone())
        }
        CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, codes::FORBIDDEN, msg.clone()),
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                codes::INTERNAL,
                GENERIC_INTERNAL_MESSAGE.to_string(),
            )
        }
    }
}

/// Classify a sqlx error.
///
/// `RowNotFound` is an ordinary 404: repositories use `fetch_one` where the
/// row's absence already means "no such resource". Unique violations are
/// recognised by the `uq_` constraint naming convention from the migrations
/// and become 409s. Everything else is a 500 with the detail kept
/// server-side.
fn database_parts(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    if matches!(err, sqlx::Error::RowNotFound) {
        return (
            StatusCode::NOT_FOUND,
            codes::NOT_FOUND,
            "Resource not found".to_string(),
        );
    }

    if let sqlx::Error::Database(db_err) = err {
        // 23505 = PostgreSQL unique_violation
        if db_err.code().as_deref() == Some("23505") {
            if let Some(constraint) = db_err.constraint().filter(|c| c.starts_with("uq_")) {
                return (
                    StatusCode::CONFLICT,
                    codes::CONFLICT,
                    format!("Duplicate value for unique constraint {constraint}"),
                );
            }
        }
    }

    tracing::error!(error = %err, "Database error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        codes::INTERNAL,
        GENERIC_INTERNAL_MESSAGE.to_string(),
    )
}
