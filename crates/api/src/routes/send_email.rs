//! Route definition for the legacy contact form endpoint.
//!
//! Mounted at `/api` rather than `/api/v1`; the public site's form posts to
//! `/api/send-email` and that path is part of the frozen wire contract.

use axum::routing::post;
use axum::Router;

use crate::handlers::send_email;
use crate::state::AppState;

/// Routes mounted at `/api`.
///
/// ```text
/// POST /send-email  -> send_email
/// ```
///
/// Only POST is registered, so other methods get a 405 from the method
/// router. CORS preflight OPTIONS is answered by the CORS layer.
pub fn router() -> Router<AppState> {
    Router::new().route("/send-email", post(send_email::send_email))
}
