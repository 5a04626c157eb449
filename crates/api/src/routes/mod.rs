pub mod auth;
pub mod gigs;
pub mod health;
pub mod pages;
pub mod photos;
pub mod send_email;
pub mod videos;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                            login (public)
/// /auth/refresh                          refresh (public)
/// /auth/logout                           logout (requires auth)
/// /auth/me                               current admin (requires auth)
/// /auth/password                         change password (requires auth)
///
/// /gigs                                  public event listing (?include_past)
/// /photo-sets                            public gallery listing (?press_kit)
/// /videos                                public video listing (?section, ?featured)
/// /pages/{name}                          public page content
///
/// /admin/gigs                            list, create
/// /admin/gigs/{id}                       get, update, delete
/// /admin/photo-sets                      list, create
/// /admin/photo-sets/reorder              reorder sets (PUT)
/// /admin/photo-sets/{id}                 get, update, delete
/// /admin/photo-sets/{id}/photos          add photo (POST)
/// /admin/photo-sets/{id}/photos/reorder  reorder photos (PUT)
/// /admin/photos/{id}                     update, delete
/// /admin/videos                          list, create
/// /admin/videos/reorder                  reorder (PUT)
/// /admin/videos/{id}                     get, update, delete
/// /admin/pages                           list stored documents
/// /admin/pages/{name}                    update (PUT)
/// ```
///
/// The legacy `POST /api/send-email` endpoint and `GET /health` live outside
/// this tree; see [`send_email::router`] and [`health::router`].
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication and the admin's own account.
        .nest("/auth", auth::router())
        // Public site content.
        .nest("/gigs", gigs::public_router())
        .nest("/photo-sets", photos::public_router())
        .nest("/videos", videos::public_router())
        .nest("/pages", pages::public_router())
        // Admin panel content management.
        .nest("/admin/gigs", gigs::admin_router())
        .nest("/admin/photo-sets", photos::admin_router())
        .nest("/admin/photos", photos::admin_photos_router())
        .nest("/admin/videos", videos::admin_router())
        .nest("/admin/pages", pages::admin_router())
}
