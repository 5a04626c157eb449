//! Admin password hashing and policy.
//!
//! Hashes use Argon2id with a random per-password salt and are stored in PHC
//! string format, so the algorithm parameters travel with the hash. The panel
//! has a single password policy: the bootstrap account and every password
//! change go through [`validate_password_strength`].

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use stagedoor_core::error::CoreError;

/// Minimum admin password length, applied at bootstrap and on change.
pub const MIN_PASSWORD_LENGTH: usize = 12;

/// Hash a plaintext password with Argon2id and a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Check a plaintext password against a stored PHC-format hash.
///
/// `Ok(false)` means the password did not match; anything else that goes
/// wrong (malformed hash, unsupported parameters) surfaces as an error.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Apply the admin password policy.
pub fn validate_password_strength(password: &str) -> Result<(), CoreError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }
    Ok(())
}
