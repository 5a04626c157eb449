//! Photo set and photo entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stagedoor_core::types::{DbId, Timestamp};

/// A row from the `photo_sets` table: an ordered gallery collection.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PhotoSet {
    pub id: DbId,
    pub title: String,
    /// Shared attribution for every photo in the set.
    pub credit: Option<String>,
    /// Press-kit sets are listed on the press page instead of the gallery.
    pub is_press_kit: bool,
    /// Optional downloadable archive (zip) in external storage.
    pub archive_url: Option<String>,
    pub order_index: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `photos` table, ordered within its set.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Photo {
    pub id: DbId,
    pub photo_set_id: DbId,
    pub image_url: String,
    pub alt_text: Option<String>,
    pub order_index: i32,
    pub created_at: Timestamp,
}

/// A photo set together with its ordered photos, as the public API returns it.
#[derive(Debug, Clone, Serialize)]
pub struct PhotoSetWithPhotos {
    #[serde(flatten)]
    pub set: PhotoSet,
    pub photos: Vec<Photo>,
}

/// DTO for creating a new photo set.
#[derive(Debug, Deserialize)]
pub struct CreatePhotoSet {
    pub title: String,
    pub credit: Option<String>,
    #[serde(default)]
    pub is_press_kit: bool,
    pub archive_url: Option<String>,
}

/// DTO for updating a photo set. Only non-`None` fields are applied.
#[derive(Debug, Deserialize)]
pub struct UpdatePhotoSet {
    pub title: Option<String>,
    pub credit: Option<String>,
    pub is_press_kit: Option<bool>,
    pub archive_url: Option<String>,
}

/// DTO for adding a photo to a set.
#[derive(Debug, Deserialize)]
pub struct CreatePhoto {
    pub image_url: String,
    pub alt_text: Option<String>,
}

/// DTO for updating a photo. Only non-`None` fields are applied.
#[derive(Debug, Deserialize)]
pub struct UpdatePhoto {
    pub image_url: Option<String>,
    pub alt_text: Option<String>,
}
