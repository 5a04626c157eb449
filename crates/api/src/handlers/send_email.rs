//! Handler for the public contact/booking form endpoint.
//!
//! This endpoint predates the versioned API and its response shape is pinned
//! to what the frontend already parses: `{"success": true, "messageId": ..}`
//! on success, `{"success": false, "error": ..}` on failure. It builds those
//! responses by hand instead of going through [`crate::error::AppError`] and
//! [`crate::response::DataResponse`].

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use stagedoor_core::contact::{self, ContactForm};
use stagedoor_core::error::CoreError;
use stagedoor_mailer::{template, OutboundEmail};

use crate::state::AppState;

/// Message id returned for honeypot submissions. The bot gets an ordinary
/// success response; nothing is sent.
const HONEYPOT_MESSAGE_ID: &str = "ok";

/// POST /api/send-email
///
/// Accepts both the contact and the booking variant of the form. See
/// `stagedoor_core::contact` for the validation rules and messages.
pub async fn send_email(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Response {
    if contact::is_bot(&form) {
        tracing::info!("Honeypot field filled, dropping submission");
        return success(HONEYPOT_MESSAGE_ID);
    }

    let submission = match contact::validate(&form) {
        Ok(submission) => submission,
        Err(CoreError::Validation(msg)) => return failure(StatusCode::BAD_REQUEST, &msg),
        Err(err) => {
            tracing::error!(error = %err, "Unexpected error validating contact form");
            return failure(StatusCode::INTERNAL_SERVER_ERROR, "Failed to send email");
        }
    };

    let Some(mailer) = &state.mailer else {
        tracing::error!("Contact form submitted but no email provider is configured");
        return failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Email service is not configured",
        );
    };

    let rendered = template::render(&submission, state.mail_locale);
    let email = OutboundEmail {
        subject: rendered.subject,
        html_body: rendered.html,
        reply_to: submission.email.clone(),
    };

    match mailer.send(&email).await {
        Ok(message_id) => {
            tracing::info!(
                form_type = submission.kind.as_str(),
                message_id = %message_id,
                "Contact form email sent"
            );
            success(&message_id)
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to send contact form email");
            failure(StatusCode::INTERNAL_SERVER_ERROR, "Failed to send email")
        }
    }
}

fn success(message_id: &str) -> Response {
    Json(json!({ "success": true, "messageId": message_id })).into_response()
}

fn failure(status: StatusCode, error: &str) -> Response {
    (status, Json(json!({ "success": false, "error": error }))).into_response()
}
