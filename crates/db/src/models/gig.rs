//! Gig entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stagedoor_core::gigs::GigRow;
use stagedoor_core::types::{DbId, Timestamp};
use uuid::Uuid;

/// A row from the `gigs` table: one performance date.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Gig {
    pub id: DbId,
    pub title: String,
    pub venue: String,
    pub starts_at: Timestamp,
    /// Rows sharing this id form one multi-date event series.
    pub gig_group_id: Option<Uuid>,
    pub ticket_url: Option<String>,
    pub organizer_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Gig> for GigRow {
    fn from(gig: Gig) -> Self {
        GigRow {
            id: gig.id,
            title: gig.title,
            venue: gig.venue,
            starts_at: gig.starts_at,
            gig_group_id: gig.gig_group_id,
            ticket_url: gig.ticket_url,
            organizer_url: gig.organizer_url,
        }
    }
}

/// DTO for creating a new gig.
#[derive(Debug, Deserialize)]
pub struct CreateGig {
    pub title: String,
    pub venue: String,
    pub starts_at: Timestamp,
    pub gig_group_id: Option<Uuid>,
    pub ticket_url: Option<String>,
    pub organizer_url: Option<String>,
}

/// DTO for updating an existing gig. Only non-`None` fields are applied.
#[derive(Debug, Deserialize)]
pub struct UpdateGig {
    pub title: Option<String>,
    pub venue: Option<String>,
    pub starts_at: Option<Timestamp>,
    pub gig_group_id: Option<Uuid>,
    pub ticket_url: Option<String>,
    pub organizer_url: Option<String>,
}
