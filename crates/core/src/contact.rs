//! Contact/booking form validation and the honeypot bot check.
//!
//! The public site submits two form variants through one endpoint: a plain
//! contact form and a booking enquiry carrying extra event fields. Rules are
//! checked in a fixed order and the first failure wins, so the client can
//! surface exactly one message per attempt. A hidden `website` field acts as
//! the honeypot: humans never see it, form-filler bots populate it.

use serde::Deserialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Validation constants
// ---------------------------------------------------------------------------

/// Maximum length for the submitted name (characters).
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum length for the submitted email address (characters).
pub const MAX_EMAIL_LENGTH: usize = 320;

/// Minimum length for a phone number after trimming.
pub const MIN_PHONE_LENGTH: usize = 6;

/// Maximum length for the message body (characters).
pub const MAX_MESSAGE_LENGTH: usize = 5_000;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Which form the visitor submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    Booking,
}

impl FormKind {
    /// Wire string for this form kind (`"contact"` / `"booking"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::Contact => "contact",
            FormKind::Booking => "booking",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "contact" => Some(FormKind::Contact),
            "booking" => Some(FormKind::Booking),
            _ => None,
        }
    }
}

/// The raw form payload as submitted by the browser.
///
/// Every field is optional so a missing JSON key fails its presence rule
/// with that rule's message instead of failing deserialization.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactForm {
    pub form_type: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    /// Booking extras; free-form strings the visitor typed or picked.
    pub date: Option<String>,
    pub location: Option<String>,
    pub event_type: Option<String>,
    /// Honeypot. Hidden in the real form; any content marks the submission
    /// as automated.
    pub website: Option<String>,
}

/// A validated, trimmed submission ready for templating.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub kind: FormKind,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub date: Option<String>,
    pub location: Option<String>,
    pub event_type: Option<String>,
}

// ---------------------------------------------------------------------------
// Honeypot
// ---------------------------------------------------------------------------

/// True when the hidden `website` field carries any non-blank content.
pub fn is_bot(form: &ContactForm) -> bool {
    form.website
        .as_deref()
        .is_some_and(|w| !w.trim().is_empty())
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a submission, returning the first failing rule's message.
///
/// Rule order: name, email, phone, message, form type. Each failure maps to
/// one fixed message so the endpoint's 400 responses are stable:
///
/// | Rule                      | Message                          |
/// |---------------------------|----------------------------------|
/// | name missing/blank        | `Name is required`               |
/// | name too long             | `Name is too long`               |
/// | email missing or no `@`   | `Valid email is required`        |
/// | email too long            | `Valid email is required`        |
/// | phone missing/blank       | `Phone number is required`       |
/// | phone shorter than 6      | `Valid phone number is required` |
/// | message missing/blank     | `Message is required`            |
/// | message too long          | `Message is too long`            |
/// | unknown form type         | `Invalid form type`              |
pub fn validate(form: &ContactForm) -> Result<ContactSubmission, CoreError> {
    let name = trimmed(&form.name);
    if name.is_empty() {
        return Err(CoreError::Validation("Name is required".into()));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation("Name is too long".into()));
    }

    let email = trimmed(&form.email);
    if email.is_empty() || !email.contains('@') || email.len() > MAX_EMAIL_LENGTH {
        return Err(CoreError::Validation("Valid email is required".into()));
    }

    let phone = trimmed(&form.phone);
    if phone.is_empty() {
        return Err(CoreError::Validation("Phone number is required".into()));
    }
    if phone.len() < MIN_PHONE_LENGTH {
        return Err(CoreError::Validation("Valid phone number is required".into()));
    }

    let message = trimmed(&form.message);
    if message.is_empty() {
        return Err(CoreError::Validation("Message is required".into()));
    }
    if message.len() > MAX_MESSAGE_LENGTH {
        return Err(CoreError::Validation("Message is too long".into()));
    }

    let kind = form
        .form_type
        .as_deref()
        .and_then(FormKind::parse)
        .ok_or_else(|| CoreError::Validation("Invalid form type".into()))?;

    Ok(ContactSubmission {
        kind,
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        message: message.to_string(),
        date: non_blank(&form.date),
        location: non_blank(&form.location),
        event_type: non_blank(&form.event_type),
    })
}

fn trimmed(field: &Option<String>) -> &str {
    field.as_deref().map(str::trim).unwrap_or("")
}

fn non_blank(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
