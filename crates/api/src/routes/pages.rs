//! Route definitions for editable page content.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Public routes mounted at `/pages`.
///
/// ```text
/// GET /{name}  -> get_page
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/{name}", get(pages::get_page))
}

/// Admin routes mounted at `/admin/pages`.
///
/// ```text
/// GET /        -> list_pages
/// PUT /{name}  -> update_page
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::list_pages))
        .route("/{name}", put(pages::update_page))
}
