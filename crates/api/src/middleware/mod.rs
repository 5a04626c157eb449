//! Authentication middleware extractors.
//!
//! - [`auth::AdminUser`] -- Extracts the authenticated admin from a JWT Bearer token.

pub mod auth;
