//! Outbound transactional email for contact and booking enquiries.
//!
//! This crate turns a validated form submission into a localized HTML email
//! and delivers it through a transactional-email HTTP API:
//!
//! - [`MailerConfig`] — provider credentials and addressing, loaded from
//!   environment variables.
//! - [`template`] — localized subject and HTML body rendering.
//! - [`EmailSender`] — the delivery seam the HTTP layer depends on, so tests
//!   can substitute a recording fake.
//! - [`HttpEmailProvider`] — the real implementation speaking the provider's
//!   `POST /emails` API.

pub mod config;
pub mod provider;
pub mod sender;
pub mod template;

pub use config::MailerConfig;
pub use provider::HttpEmailProvider;
pub use sender::{EmailSender, MailError, OutboundEmail};
pub use template::{render, Locale, RenderedEmail};
