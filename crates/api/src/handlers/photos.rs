//! Photo set and photo handlers: the public gallery listing plus the admin
//! CRUD and drag-and-drop reorder surface.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use stagedoor_core::error::CoreError;
use stagedoor_core::media;
use stagedoor_core::ordering::{self, ReorderRequest};
use stagedoor_core::types::DbId;
use stagedoor_db::models::photo::{
    CreatePhoto, CreatePhotoSet, Photo, PhotoSetWithPhotos, UpdatePhoto, UpdatePhotoSet,
};
use stagedoor_db::repositories::{PhotoRepo, PhotoSetRepo};
use stagedoor_db::DbPool;

use crate::error::AppResult;
use crate::middleware::auth::AdminUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Shared listing
// ---------------------------------------------------------------------------

/// Query parameters for photo set listings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListPhotoSetsParams {
    pub press_kit: Option<bool>,
}

/// Fetch sets in display order and attach their photos, using one query for
/// the sets and one for all photos.
async fn sets_with_photos(
    pool: &DbPool,
    press_kit: Option<bool>,
) -> Result<Vec<PhotoSetWithPhotos>, sqlx::Error> {
    let sets = PhotoSetRepo::list(pool, press_kit).await?;
    let set_ids: Vec<DbId> = sets.iter().map(|s| s.id).collect();

    let mut photos_by_set: HashMap<DbId, Vec<Photo>> = HashMap::new();
    for photo in PhotoRepo::list_for_sets(pool, &set_ids).await? {
        photos_by_set
            .entry(photo.photo_set_id)
            .or_default()
            .push(photo);
    }

    Ok(sets
        .into_iter()
        .map(|set| {
            let photos = photos_by_set.remove(&set.id).unwrap_or_default();
            PhotoSetWithPhotos { set, photos }
        })
        .collect())
}

/// GET /api/v1/photo-sets
pub async fn list_photo_sets(
    State(state): State<AppState>,
    Query(params): Query<ListPhotoSetsParams>,
) -> AppResult<impl IntoResponse> {
    let sets = sets_with_photos(&state.pool, params.press_kit).await?;
    Ok(Json(DataResponse { data: sets }))
}

/// GET /api/v1/admin/photo-sets
///
/// Same shape as the public listing; the admin panel shows thumbnails for
/// every set, press kit or not.
pub async fn admin_list_photo_sets(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(params): Query<ListPhotoSetsParams>,
) -> AppResult<impl IntoResponse> {
    let sets = sets_with_photos(&state.pool, params.press_kit).await?;
    Ok(Json(DataResponse { data: sets }))
}

// ---------------------------------------------------------------------------
// Photo set CRUD
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/photo-sets/{id}
pub async fn get_photo_set(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let set = PhotoSetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound { entity: "Photo set", id })?;
    let photos = PhotoRepo::list_for_set(&state.pool, id).await?;
    Ok(Json(DataResponse { data: PhotoSetWithPhotos { set, photos } }))
}

/// POST /api/v1/admin/photo-sets
pub async fn create_photo_set(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(payload): Json<CreatePhotoSet>,
) -> AppResult<impl IntoResponse> {
    media::validate_set_title(&payload.title)?;
    if let Some(url) = payload.archive_url.as_deref() {
        media::validate_url("archive_url", url)?;
    }

    let set = PhotoSetRepo::create(&state.pool, &payload).await?;
    tracing::info!(photo_set_id = set.id, title = %set.title, "Created photo set");
    Ok((StatusCode::CREATED, Json(DataResponse { data: set })))
}

/// PUT /api/v1/admin/photo-sets/{id}
pub async fn update_photo_set(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<DbId>,
    Json(payload): Json<UpdatePhotoSet>,
) -> AppResult<impl IntoResponse> {
    if let Some(title) = payload.title.as_deref() {
        media::validate_set_title(title)?;
    }
    if let Some(url) = payload.archive_url.as_deref() {
        media::validate_url("archive_url", url)?;
    }

    let set = PhotoSetRepo::update(&state.pool, id, &payload).await?;
    tracing::info!(photo_set_id = set.id, "Updated photo set");
    Ok(Json(DataResponse { data: set }))
}

/// DELETE /api/v1/admin/photo-sets/{id}
pub async fn delete_photo_set(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PhotoSetRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound { entity: "Photo set", id }.into());
    }

    tracing::info!(photo_set_id = id, "Deleted photo set");
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/admin/photo-sets/reorder
pub async fn reorder_photo_sets(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(payload): Json<ReorderRequest>,
) -> AppResult<impl IntoResponse> {
    ordering::validate_reorder_ids(&payload.ids)?;

    if let Some(unknown) = PhotoSetRepo::reorder(&state.pool, &payload.ids).await? {
        return Err(
            CoreError::NotFound { entity: "Photo set", id: unknown }.into(),
        );
    }

    tracing::info!(count = payload.ids.len(), "Reordered photo sets");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Photos within a set
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/photo-sets/{id}/photos
pub async fn add_photo(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<DbId>,
    Json(payload): Json<CreatePhoto>,
) -> AppResult<impl IntoResponse> {
    media::validate_url("image_url", &payload.image_url)?;

    PhotoSetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound { entity: "Photo set", id })?;

    let photo = PhotoRepo::create(&state.pool, id, &payload).await?;
    tracing::info!(photo_id = photo.id, photo_set_id = id, "Added photo to set");
    Ok((StatusCode::CREATED, Json(DataResponse { data: photo })))
}

/// PUT /api/v1/admin/photos/{id}
pub async fn update_photo(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<DbId>,
    Json(payload): Json<UpdatePhoto>,
) -> AppResult<impl IntoResponse> {
    if let Some(url) = payload.image_url.as_deref() {
        media::validate_url("image_url", url)?;
    }

    let photo = PhotoRepo::update(&state.pool, id, &payload).await?;
    tracing::info!(photo_id = photo.id, "Updated photo");
    Ok(Json(DataResponse { data: photo }))
}

/// DELETE /api/v1/admin/photos/{id}
pub async fn delete_photo(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PhotoRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound { entity: "Photo", id }.into());
    }

    tracing::info!(photo_id = id, "Deleted photo");
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/admin/photo-sets/{id}/photos/reorder
pub async fn reorder_photos(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<DbId>,
    Json(payload): Json<ReorderRequest>,
) -> AppResult<impl IntoResponse> {
    ordering::validate_reorder_ids(&payload.ids)?;

    PhotoSetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound { entity: "Photo set", id })?;

    if let Some(unknown) = PhotoRepo::reorder_within_set(&state.pool, id, &payload.ids).await? {
        return Err(CoreError::NotFound { entity: "Photo", id: unknown }.into());
    }

    tracing::info!(photo_set_id = id, count = payload.ids.len(), "Reordered photos");
    Ok(StatusCode::NO_CONTENT)
}
