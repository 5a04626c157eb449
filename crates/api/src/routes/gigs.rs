//! Route definitions for gigs: public listing and admin CRUD.

use axum::routing::get;
use axum::Router;

use crate::handlers::gigs;
use crate::state::AppState;

/// Public routes mounted at `/gigs`.
///
/// ```text
/// GET /  -> list_events (?include_past)
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(gigs::list_events))
}

/// Admin routes mounted at `/admin/gigs`.
///
/// ```text
/// GET    /      -> list_gigs
/// POST   /      -> create_gig
/// GET    /{id}  -> get_gig
/// PUT    /{id}  -> update_gig
/// DELETE /{id}  -> delete_gig
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(gigs::list_gigs).post(gigs::create_gig))
        .route(
            "/{id}",
            get(gigs::get_gig).put(gigs::update_gig).delete(gigs::delete_gig),
        )
}
