//! Route definitions for photo sets and photos.
//!
//! Three routers are provided:
//! - `public_router()` for the gallery listing, mounted at `/photo-sets`
//! - `admin_router()` for set management, mounted at `/admin/photo-sets`
//! - `admin_photos_router()` for single photos, mounted at `/admin/photos`

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::photos;
use crate::state::AppState;

/// Public routes mounted at `/photo-sets`.
///
/// ```text
/// GET /  -> list_photo_sets (?press_kit)
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(photos::list_photo_sets))
}

/// Admin routes mounted at `/admin/photo-sets`.
///
/// ```text
/// GET    /                     -> admin_list_photo_sets (?press_kit)
/// POST   /                     -> create_photo_set
/// PUT    /reorder              -> reorder_photo_sets
/// GET    /{id}                 -> get_photo_set
/// PUT    /{id}                 -> update_photo_set
/// DELETE /{id}                 -> delete_photo_set
/// POST   /{id}/photos          -> add_photo
/// PUT    /{id}/photos/reorder  -> reorder_photos
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(photos::admin_list_photo_sets).post(photos::create_photo_set),
        )
        .route("/reorder", put(photos::reorder_photo_sets))
        .route(
            "/{id}",
            get(photos::get_photo_set)
                .put(photos::update_photo_set)
                .delete(photos::delete_photo_set),
        )
        .route("/{id}/photos", post(photos::add_photo))
        .route("/{id}/photos/reorder", put(photos::reorder_photos))
}

/// Admin routes mounted at `/admin/photos`.
///
/// ```text
/// PUT    /{id}  -> update_photo
/// DELETE /{id}  -> delete_photo
/// ```
pub fn admin_photos_router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        put(photos::update_photo).delete(photos::delete_photo),
    )
}
