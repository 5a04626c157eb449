//! Request handlers.
//!
//! Each submodule covers one resource: async handler functions that delegate
//! to the repositories in `stagedoor_db` and map errors via
//! [`crate::error::AppError`]. Public site reads and admin panel mutations
//! for a resource live in the same module.

pub mod auth;
pub mod gigs;
pub mod pages;
pub mod photos;
pub mod send_email;
pub mod videos;
