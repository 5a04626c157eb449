//! Admin authentication extractor.
//!
//! Token validation is stateless: the extractor checks the JWT signature and
//! expiry but does not touch the database. Account deactivation and lockout
//! are enforced at login and refresh, where the user row is loaded anyway.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use stagedoor_core::error::CoreError;
use stagedoor_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The authenticated admin, extracted from a `Bearer` token.
///
/// Every handler under `/api/v1/admin` (and the auth endpoints that operate
/// on the current account) takes this as a parameter; a missing, malformed,
/// or expired token rejects the request with 401 before the handler runs.
#[derive(Debug, Clone)]
pub struct AdminUser {
    /// The admin's database id (from `claims.sub`).
    pub user_id: DbId,
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AdminUser {
            user_id: claims.sub,
        })
    }
}

/// Pull the token out of the `Authorization: Bearer <token>` header.
fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let header = parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Missing Authorization header".into(),
            ))
        })?;

    header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::Core(CoreError::Unauthorized(
            "Invalid Authorization format. Expected: Bearer <token>".into(),
        ))
    })
}
