//! Domain types and pure domain logic for the stagedoor backend.
//!
//! Everything here is I/O-free: shared id/timestamp aliases, the domain
//! error type, contact-form validation, the gig-grouping routine, typed
//! page-content definitions, and the reorder request contract. The `db`
//! and `api` crates build on these.

pub mod contact;
pub mod error;
pub mod gigs;
pub mod media;
pub mod ordering;
pub mod pages;
pub mod types;
