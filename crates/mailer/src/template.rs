//! Localized rendering of contact and booking enquiry emails.
//!
//! The site runs primarily in German with an English fallback; subjects and
//! field labels follow [`Locale`]. All user-supplied values are HTML-escaped
//! before they reach the body.

use stagedoor_core::contact::{ContactSubmission, FormKind};

/// Language for rendered subjects and field labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    De,
    En,
}

impl Locale {
    /// Parse a locale string; unknown values fall back to German.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" => Locale::En,
            _ => Locale::De,
        }
    }
}

/// A rendered subject and HTML body.
#[derive(Debug, Clone)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
}

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

struct Labels {
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    message: &'static str,
    date: &'static str,
    location: &'static str,
    event_type: &'static str,
}

const LABELS_DE: Labels = Labels {
    name: "Name",
    email: "E-Mail",
    phone: "Telefon",
    message: "Nachricht",
    date: "Datum",
    location: "Ort",
    event_type: "Art der Veranstaltung",
};

const LABELS_EN: Labels = Labels {
    name: "Name",
    email: "Email",
    phone: "Phone",
    message: "Message",
    date: "Date",
    location: "Location",
    event_type: "Event type",
};

fn subject_for(kind: FormKind, locale: Locale) -> &'static str {
    match (locale, kind) {
        (Locale::De, FormKind::Contact) => "Neue Kontaktanfrage über die Website",
        (Locale::De, FormKind::Booking) => "Neue Buchungsanfrage über die Website",
        (Locale::En, FormKind::Contact) => "New contact request via the website",
        (Locale::En, FormKind::Booking) => "New booking request via the website",
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render a validated submission into a localized subject and HTML body.
///
/// Booking extras (date, location, event type) appear only for booking
/// enquiries and only when the visitor filled them in.
pub fn render(submission: &ContactSubmission, locale: Locale) -> RenderedEmail {
    let labels = match locale {
        Locale::De => &LABELS_DE,
        Locale::En => &LABELS_EN,
    };
    let subject = subject_for(submission.kind, locale).to_string();

    let mut html = String::new();
    html.push_str(&format!("<h2>{subject}</h2>\n"));
    push_row(&mut html, labels.name, &submission.name);
    push_row(&mut html, labels.email, &submission.email);
    push_row(&mut html, labels.phone, &submission.phone);

    if submission.kind == FormKind::Booking {
        if let Some(date) = &submission.date {
            push_row(&mut html, labels.date, date);
        }
        if let Some(location) = &submission.location {
            push_row(&mut html, labels.location, location);
        }
        if let Some(event_type) = &submission.event_type {
            push_row(&mut html, labels.event_type, event_type);
        }
    }

    html.push_str(&format!("<p><strong>{}:</strong></p>\n", labels.message));
    html.push_str(&format!(
        "<p>{}</p>\n",
        escape_html(&submission.message).replace('\n', "<br>\n")
    ));

    RenderedEmail { subject, html }
}

fn push_row(html: &mut String, label: &str, value: &str) {
    html.push_str(&format!(
        "<p><strong>{label}:</strong> {}</p>\n",
        escape_html(value)
    ));
}

/// Escape text for embedding in HTML.
fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
