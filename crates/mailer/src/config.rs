//! Mailer configuration loaded from environment variables.

use std::time::Duration;

use crate::template::Locale;

/// Default provider API base URL.
const DEFAULT_API_URL: &str = "https://api.resend.com";

/// Default sender address when `MAIL_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "noreply@stagedoor.local";

/// Default recipient address when `MAIL_TO` is not set.
const DEFAULT_TO_ADDRESS: &str = "booking@stagedoor.local";

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the transactional email provider.
#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// Provider API base URL (no trailing path).
    pub api_url: String,
    /// Bearer token for the provider API.
    pub api_key: String,
    /// RFC 5322 "From" address on outbound mail.
    pub from_address: String,
    /// Inbox that receives contact and booking enquiries.
    pub to_address: String,
    /// Language for subjects and field labels.
    pub locale: Locale,
    /// Timeout for a single send request.
    pub request_timeout: Duration,
}

impl MailerConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `MAIL_API_KEY` is not set, signalling that email
    /// delivery is not configured; the send endpoint reports that as a
    /// server error instead of attempting delivery.
    ///
    /// | Variable            | Required | Default                    |
    /// |---------------------|----------|----------------------------|
    /// | `MAIL_API_KEY`      | yes      | —                          |
    /// | `MAIL_API_URL`      | no       | `https://api.resend.com`   |
    /// | `MAIL_FROM`         | no       | `noreply@stagedoor.local`  |
    /// | `MAIL_TO`           | no       | `booking@stagedoor.local`  |
    /// | `MAIL_LOCALE`       | no       | `de`                       |
    /// | `MAIL_TIMEOUT_SECS` | no       | `10`                       |
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("MAIL_API_KEY").ok()?;
        Some(Self {
            api_url: std::env::var("MAIL_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            api_key,
            from_address: std::env::var("MAIL_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            to_address: std::env::var("MAIL_TO")
                .unwrap_or_else(|_| DEFAULT_TO_ADDRESS.to_string()),
            locale: std::env::var("MAIL_LOCALE")
                .map(|v| Locale::parse(&v))
                .unwrap_or_default(),
            request_timeout: Duration::from_secs(
                std::env::var("MAIL_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
