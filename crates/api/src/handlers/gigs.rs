//! Gig handlers: the public event listing and the admin CRUD surface.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{NaiveTime, Utc};
use serde::Deserialize;
use stagedoor_core::error::CoreError;
use stagedoor_core::gigs::{self, GigRow};
use stagedoor_core::types::DbId;
use stagedoor_db::models::gig::{CreateGig, UpdateGig};
use stagedoor_db::repositories::GigRepo;

use crate::error::AppResult;
use crate::middleware::auth::AdminUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Public listing
// ---------------------------------------------------------------------------

/// Query parameters for the public event listing.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListEventsParams {
    pub include_past: Option<bool>,
}

/// GET /api/v1/gigs
///
/// Returns display events: rows sharing a `gig_group_id` are collapsed into
/// one event carrying all their dates. Past performances are excluded unless
/// `include_past=true`; "past" means before the start of the current UTC day,
/// so tonight's show stays listed all day.
pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<ListEventsParams>,
) -> AppResult<impl IntoResponse> {
    let rows = if params.include_past.unwrap_or(false) {
        GigRepo::list_all(&state.pool).await?
    } else {
        let today = Utc::now().date_naive().and_time(NaiveTime::MIN).and_utc();
        GigRepo::list_from(&state.pool, today).await?
    };

    let events = gigs::group_into_events(rows.into_iter().map(GigRow::from).collect());
    Ok(Json(DataResponse { data: events }))
}

// ---------------------------------------------------------------------------
// Admin CRUD
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/gigs
///
/// Raw rows without grouping, ascending by date, for the admin table view.
pub async fn list_gigs(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> AppResult<impl IntoResponse> {
    let gigs = GigRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: gigs }))
}

/// GET /api/v1/admin/gigs/{id}
pub async fn get_gig(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let gig = GigRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound { entity: "Gig", id })?;
    Ok(Json(DataResponse { data: gig }))
}

/// POST /api/v1/admin/gigs
pub async fn create_gig(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(payload): Json<CreateGig>,
) -> AppResult<impl IntoResponse> {
    gigs::validate_title(&payload.title)?;
    gigs::validate_venue(&payload.venue)?;

    let gig = GigRepo::create(&state.pool, &payload).await?;
    tracing::info!(gig_id = gig.id, title = %gig.title, "Created gig");
    Ok((StatusCode::CREATED, Json(DataResponse { data: gig })))
}

/// PUT /api/v1/admin/gigs/{id}
pub async fn update_gig(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<DbId>,
    Json(payload): Json<UpdateGig>,
) -> AppResult<impl IntoResponse> {
    if let Some(title) = payload.title.as_deref() {
        gigs::validate_title(title)?;
    }
    if let Some(venue) = payload.venue.as_deref() {
        gigs::validate_venue(venue)?;
    }

    let gig = GigRepo::update(&state.pool, id, &payload).await?;
    tracing::info!(gig_id = gig.id, "Updated gig");
    Ok(Json(DataResponse { data: gig }))
}

/// DELETE /api/v1/admin/gigs/{id}
pub async fn delete_gig(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = GigRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound { entity: "Gig", id }.into());
    }

    tracing::info!(gig_id = id, "Deleted gig");
    Ok(StatusCode::NO_CONTENT)
}
