//! Video entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stagedoor_core::types::{DbId, Timestamp};

/// A row from the `videos` table: one embedded video in a page section.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Video {
    pub id: DbId,
    pub title: Option<String>,
    pub video_url: String,
    /// Which page section lists this video (`main` or `party_band`).
    pub section: String,
    pub is_featured: bool,
    pub order_index: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new video.
#[derive(Debug, Deserialize)]
pub struct CreateVideo {
    pub title: Option<String>,
    pub video_url: String,
    pub section: String,
    #[serde(default)]
    pub is_featured: bool,
}

/// DTO for updating a video. Only non-`None` fields are applied.
#[derive(Debug, Deserialize)]
pub struct UpdateVideo {
    pub title: Option<String>,
    pub video_url: Option<String>,
    pub section: Option<String>,
    pub is_featured: Option<bool>,
}
