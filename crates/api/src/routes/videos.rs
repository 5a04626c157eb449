//! Route definitions for videos: public listing and admin CRUD.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::videos;
use crate::state::AppState;

/// Public routes mounted at `/videos`.
///
/// ```text
/// GET /  -> list_videos (?section, ?featured)
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(videos::list_videos))
}

/// Admin routes mounted at `/admin/videos`.
///
/// ```text
/// GET    /         -> admin_list_videos
/// POST   /         -> create_video
/// PUT    /reorder  -> reorder_videos
/// GET    /{id}     -> get_video
/// PUT    /{id}     -> update_video
/// DELETE /{id}     -> delete_video
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(videos::admin_list_videos).post(videos::create_video),
        )
        .route("/reorder", put(videos::reorder_videos))
        .route(
            "/{id}",
            get(videos::get_video)
                .put(videos::update_video)
                .delete(videos::delete_video),
        )
}
