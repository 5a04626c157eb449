use std::sync::Arc;

use stagedoor_mailer::{EmailSender, Locale};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: stagedoor_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Email delivery backend; `None` when `MAIL_API_KEY` is unset, in which
    /// case the send endpoint reports a configuration error.
    pub mailer: Option<Arc<dyn EmailSender>>,
    /// Language for outbound email subjects and labels.
    pub mail_locale: Locale,
}
