//! Page content handlers: public reads and the admin editing surface.
//!
//! Content is one JSON document per page. The document is stored verbatim;
//! writes are validated against the typed shape for the page first.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use stagedoor_core::pages::{self, PageName};
use stagedoor_db::repositories::PageContentRepo;

use crate::error::AppResult;
use crate::middleware::auth::AdminUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/pages/{name}
///
/// Unknown page names are a 400; a known page with no stored document yet
/// is a 404.
pub async fn get_page(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<impl IntoResponse> {
    let page: PageName = name.parse()?;
    let content = PageContentRepo::get_by_page(&state.pool, page.as_str()).await?;
    Ok(Json(DataResponse { data: content }))
}

/// GET /api/v1/admin/pages
///
/// Every stored page document, for the admin overview.
pub async fn list_pages(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> AppResult<impl IntoResponse> {
    let contents = PageContentRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: contents }))
}

/// PUT /api/v1/admin/pages/{name}
///
/// The body is the page's full content document; it replaces whatever is
/// stored. Creates the row on first write.
pub async fn update_page(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(name): Path<String>,
    Json(content): Json<serde_json::Value>,
) -> AppResult<impl IntoResponse> {
    let page: PageName = name.parse()?;
    pages::validate_body(page, &content)?;

    let stored = PageContentRepo::upsert(&state.pool, page.as_str(), &content).await?;
    tracing::info!(page = %page, "Updated page content");
    Ok(Json(DataResponse { data: stored }))
}
