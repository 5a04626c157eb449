//! Validation for gallery photo sets and video entries.
//!
//! Image and archive files live in external object storage; records here
//! only carry their URLs, so validation is shape-level: non-blank titles,
//! http(s) URLs, and a closed set of video sections.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Video sections
// ---------------------------------------------------------------------------

/// Videos shown on the main (home) page.
pub const SECTION_MAIN: &str = "main";
/// Videos shown on the party-band page.
pub const SECTION_PARTY_BAND: &str = "party_band";

/// All valid video sections.
pub const VALID_SECTIONS: &[&str] = &[SECTION_MAIN, SECTION_PARTY_BAND];

/// Validate that a section string is one of the known sections.
pub fn validate_section(section: &str) -> Result<(), CoreError> {
    if VALID_SECTIONS.contains(&section) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid video section '{section}'. Must be one of: {VALID_SECTIONS:?}"
        )))
    }
}

// ---------------------------------------------------------------------------
// Titles and URLs
// ---------------------------------------------------------------------------

/// Maximum length for photo set titles (characters).
pub const MAX_SET_TITLE_LENGTH: usize = 200;

/// Validate a photo set title: non-blank, bounded length.
pub fn validate_set_title(title: &str) -> Result<(), CoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Photo set title is required".into()));
    }
    if trimmed.len() > MAX_SET_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Photo set title exceeds maximum length of {MAX_SET_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate that `value` looks like an http(s) URL.
///
/// `field` names the offending field in the error message.
pub fn validate_url(field: &str, value: &str) -> Result<(), CoreError> {
    let trimmed = value.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "{field} must be an http(s) URL"
        )))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sections_are_valid() {
        for s in VALID_SECTIONS {
            assert!(validate_section(s).is_ok(), "section '{s}' should be valid");
        }
    }

    #[test]
    fn unknown_section_is_rejected() {
        let err = validate_section("backstage").unwrap_err();
        assert!(err.to_string().contains("backstage"));
    }

    #[test]
    fn set_title_must_be_non_blank() {
        assert!(validate_set_title("Pressefotos 2025").is_ok());
        assert!(validate_set_title("  ").is_err());
    }

    #[test]
    fn url_must_have_http_scheme() {
        assert!(validate_url("image_url", "https://cdn.example/a.jpg").is_ok());
        assert!(validate_url("image_url", "http://cdn.example/a.jpg").is_ok());
        assert!(validate_url("image_url", "ftp://cdn.example/a.jpg").is_err());
        assert!(validate_url("image_url", "not a url").is_err());
    }
}
