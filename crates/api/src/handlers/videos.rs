//! Video handlers: the public per-section listing and the admin CRUD and
//! reorder surface.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use stagedoor_core::error::CoreError;
use stagedoor_core::media;
use stagedoor_core::ordering::{self, ReorderRequest};
use stagedoor_core::types::DbId;
use stagedoor_db::models::video::{CreateVideo, UpdateVideo};
use stagedoor_db::repositories::VideoRepo;

use crate::error::AppResult;
use crate::middleware::auth::AdminUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the public video listing.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListVideosParams {
    pub section: Option<String>,
    pub featured: Option<bool>,
}

// ---------------------------------------------------------------------------
// Public listing
// ---------------------------------------------------------------------------

/// GET /api/v1/videos
pub async fn list_videos(
    State(state): State<AppState>,
    Query(params): Query<ListVideosParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(section) = params.section.as_deref() {
        media::validate_section(section)?;
    }

    let videos = VideoRepo::list(&state.pool, params.section.as_deref(), params.featured).await?;
    Ok(Json(DataResponse { data: videos }))
}

// ---------------------------------------------------------------------------
// Admin CRUD
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/videos
pub async fn admin_list_videos(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> AppResult<impl IntoResponse> {
    let videos = VideoRepo::list(&state.pool, None, None).await?;
    Ok(Json(DataResponse { data: videos }))
}

/// GET /api/v1/admin/videos/{id}
pub async fn get_video(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let video = VideoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound { entity: "Video", id })?;
    Ok(Json(DataResponse { data: video }))
}

/// POST /api/v1/admin/videos
pub async fn create_video(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(payload): Json<CreateVideo>,
) -> AppResult<impl IntoResponse> {
    media::validate_url("video_url", &payload.video_url)?;
    media::validate_section(&payload.section)?;

    let video = VideoRepo::create(&state.pool, &payload).await?;
    tracing::info!(video_id = video.id, section = %video.section, "Created video");
    Ok((StatusCode::CREATED, Json(DataResponse { data: video })))
}

/// PUT /api/v1/admin/videos/{id}
pub async fn update_video(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<DbId>,
    Json(payload): Json<UpdateVideo>,
) -> AppResult<impl IntoResponse> {
    if let Some(url) = payload.video_url.as_deref() {
        media::validate_url("video_url", url)?;
    }
    if let Some(section) = payload.section.as_deref() {
        media::validate_section(section)?;
    }

    let video = VideoRepo::update(&state.pool, id, &payload).await?;
    tracing::info!(video_id = video.id, "Updated video");
    Ok(Json(DataResponse { data: video }))
}

/// DELETE /api/v1/admin/videos/{id}
pub async fn delete_video(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = VideoRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound { entity: "Video", id }.into());
    }

    tracing::info!(video_id = id, "Deleted video");
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/admin/videos/reorder
pub async fn reorder_videos(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(payload): Json<ReorderRequest>,
) -> AppResult<impl IntoResponse> {
    ordering::validate_reorder_ids(&payload.ids)?;

    if let Some(unknown) = VideoRepo::reorder(&state.pool, &payload.ids).await? {
        return Err(CoreError::NotFound { entity: "Video", id: unknown }.into());
    }

    tracing::info!(count = payload.ids.len(), "Reordered videos");
    Ok(StatusCode::NO_CONTENT)
}
