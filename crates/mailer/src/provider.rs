//! HTTP client for the transactional email provider.
//!
//! [`HttpEmailProvider`] speaks the provider's `POST /emails` API with bearer
//! authentication. Sends are single-shot; a failed send surfaces to the
//! caller rather than being retried, so the visitor sees the error and can
//! resubmit.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::MailerConfig;
use crate::sender::{EmailSender, MailError, OutboundEmail};

/// Sends emails through the provider's HTTP API.
pub struct HttpEmailProvider {
    client: reqwest::Client,
    config: MailerConfig,
}

impl HttpEmailProvider {
    /// Create a provider client with a pre-configured HTTP client.
    pub fn new(config: MailerConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client, config }
    }

    fn send_url(&self) -> String {
        format!("{}/emails", self.config.api_url.trim_end_matches('/'))
    }
}

/// Subset of the provider's send response we care about.
#[derive(Debug, Deserialize)]
struct SendResponse {
    id: Option<String>,
}

#[async_trait]
impl EmailSender for HttpEmailProvider {
    async fn send(&self, email: &OutboundEmail) -> Result<String, MailError> {
        let payload = serde_json::json!({
            "from": self.config.from_address,
            "to": [self.config.to_address],
            "reply_to": email.reply_to,
            "subject": email.subject,
            "html": email.html_body,
        });

        let response = self
            .client
            .post(self.send_url())
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(MailError::HttpStatus {
                status: status.as_u16(),
                detail,
            });
        }

        let body: SendResponse = response.json().await?;
        let message_id = body.id.ok_or(MailError::MissingMessageId)?;

        tracing::info!(message_id = %message_id, "Transactional email sent");
        Ok(message_id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
