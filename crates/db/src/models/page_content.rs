//! Page content model.

use serde::Serialize;
use sqlx::FromRow;
use stagedoor_core::types::{DbId, Timestamp};

/// A row from the `page_contents` table: one JSON blob per page.
///
/// The blob's shape is validated against `core::pages::PageBody` on write;
/// reads return it verbatim.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PageContent {
    pub id: DbId,
    pub page: String,
    pub content: serde_json::Value,
    pub updated_at: Timestamp,
}
