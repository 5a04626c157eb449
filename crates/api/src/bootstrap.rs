//! Startup bootstrap: seed the initial admin account.
//!
//! The admin panel has no self-registration. On a fresh database the first
//! account comes from `ADMIN_EMAIL` + `ADMIN_PASSWORD`; once any account
//! exists the bootstrap is a no-op, so these variables never overwrite a
//! changed password.

use stagedoor_db::models::user::CreateAdminUser;
use stagedoor_db::repositories::UserRepo;
use stagedoor_db::DbPool;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};

/// Create the initial admin account when `admin_users` is empty.
///
/// Reads `ADMIN_EMAIL` and `ADMIN_PASSWORD`; when either is missing on an
/// empty database a warning is logged and the panel stays unreachable until
/// they are provided.
pub async fn ensure_admin_account(pool: &DbPool) -> AppResult<()> {
    let count = UserRepo::count(pool).await?;
    if count > 0 {
        return Ok(());
    }

    let (email, password) = match (
        std::env::var("ADMIN_EMAIL").ok(),
        std::env::var("ADMIN_PASSWORD").ok(),
    ) {
        (Some(email), Some(password)) => (email, password),
        _ => {
            tracing::warn!(
                "No admin account exists and ADMIN_EMAIL/ADMIN_PASSWORD are not set; \
                 the admin panel will be unreachable"
            );
            return Ok(());
        }
    };

    validate_password_strength(&password)?;

    let password_hash = hash_password(&password)
        .map_err(|e| AppError::Internal(format!("Password hashing error: {e}")))?;

    let input = CreateAdminUser {
        email,
        password_hash,
    };
    let admin = UserRepo::create(pool, &input).await?;

    tracing::info!(user_id = admin.id, email = %admin.email, "Bootstrapped initial admin account");
    Ok(())
}
