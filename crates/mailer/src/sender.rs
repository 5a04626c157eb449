//! The email delivery seam: [`EmailSender`], its input and error types.

use async_trait::async_trait;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for transactional email failures.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Email provider returned HTTP {status}: {detail}")]
    HttpStatus {
        /// HTTP status code from the provider.
        status: u16,
        /// Response body, for server-side logs only.
        detail: String,
    },

    /// The provider accepted the request but returned no message id.
    #[error("Email provider response did not include a message id")]
    MissingMessageId,
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A rendered email ready for delivery. Sender and recipient addresses come
/// from [`crate::MailerConfig`]; the reply-to is the form submitter so the
/// artist can answer directly.
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub subject: String,
    pub html_body: String,
    pub reply_to: String,
}

/// Trait implemented by email delivery backends.
///
/// The HTTP layer holds this as a trait object so integration tests can swap
/// in a recording fake instead of a live provider.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Deliver the email, returning the provider's message id.
    async fn send(&self, email: &OutboundEmail) -> Result<String, MailError>;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
