//! Typed definitions for editable page content.
//!
//! The admin panel edits one JSON blob per page (hero images, biography
//! text). Storage stays JSONB, but writes are validated against the typed
//! shape for that page so the frontend never receives a malformed blob.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Page names
// ---------------------------------------------------------------------------

/// The editable pages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageName {
    Home,
    Bio,
    Gigs,
    Gallery,
    PartyBand,
}

/// All page names in display order.
pub const ALL_PAGES: &[PageName] = &[
    PageName::Home,
    PageName::Bio,
    PageName::Gigs,
    PageName::Gallery,
    PageName::PartyBand,
];

impl PageName {
    /// The stable string key used in URLs and the `page_contents.page` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            PageName::Home => "home",
            PageName::Bio => "bio",
            PageName::Gigs => "gigs",
            PageName::Gallery => "gallery",
            PageName::PartyBand => "party-band",
        }
    }
}

impl fmt::Display for PageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageName {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(PageName::Home),
            "bio" => Ok(PageName::Bio),
            "gigs" => Ok(PageName::Gigs),
            "gallery" => Ok(PageName::Gallery),
            "party-band" => Ok(PageName::PartyBand),
            other => Err(CoreError::Validation(format!(
                "Unknown page '{other}'. Must be one of: home, bio, gigs, gallery, party-band"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Content bodies
// ---------------------------------------------------------------------------

/// The typed content shapes a page blob may take, tagged by `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageBody {
    /// Hero banner content: image plus optional tagline.
    Hero {
        hero_image_url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        tagline: Option<String>,
    },
    /// Biography content: portrait plus text paragraphs.
    Biography {
        #[serde(skip_serializing_if = "Option::is_none")]
        portrait_url: Option<String>,
        paragraphs: Vec<String>,
    },
}

impl PageBody {
    fn kind_name(&self) -> &'static str {
        match self {
            PageBody::Hero { .. } => "hero",
            PageBody::Biography { .. } => "biography",
        }
    }
}

/// The content kind each page accepts.
fn expected_kind(page: PageName) -> &'static str {
    match page {
        PageName::Bio => "biography",
        _ => "hero",
    }
}

/// Validate a raw JSON blob against the typed shape for `page`.
///
/// The blob must deserialize into a [`PageBody`] and that body's variant
/// must be the one the page accepts (the bio page takes `biography`,
/// every other page takes `hero`).
pub fn validate_body(page: PageName, content: &serde_json::Value) -> Result<(), CoreError> {
    let body: PageBody = serde_json::from_value(content.clone())
        .map_err(|e| CoreError::Validation(format!("Invalid page content: {e}")))?;

    let expected = expected_kind(page);
    if body.kind_name() != expected {
        return Err(CoreError::Validation(format!(
            "Page '{page}' requires '{expected}' content, got '{}'",
            body.kind_name()
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
