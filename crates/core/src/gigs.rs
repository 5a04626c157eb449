//! Gig domain validation and grouping of performance rows into events.
//!
//! A gig row is one dated performance. Rows that share a `gig_group_id`
//! belong to the same multi-date event series (a festival run, a recurring
//! show) and are displayed as a single event with a list of dates. The
//! grouping here is a pure transformation over already-fetched rows; the
//! repository layer decides which rows to fetch.

use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Validation constants
// ---------------------------------------------------------------------------

/// Maximum length for a gig title (characters).
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length for a venue name (characters).
pub const MAX_VENUE_LENGTH: usize = 200;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The grouping input: one row per performance date.
///
/// The db crate's `Gig` model converts into this via `From`, keeping the
/// grouping routine free of any sqlx types.
#[derive(Debug, Clone)]
pub struct GigRow {
    pub id: DbId,
    pub title: String,
    pub venue: String,
    pub starts_at: Timestamp,
    pub gig_group_id: Option<Uuid>,
    pub ticket_url: Option<String>,
    pub organizer_url: Option<String>,
}

/// One dated performance inside a [`GigEvent`].
#[derive(Debug, Clone, Serialize)]
pub struct GigPerformance {
    pub gig_id: DbId,
    pub starts_at: Timestamp,
    pub ticket_url: Option<String>,
    pub organizer_url: Option<String>,
}

/// One display entry on the gig listing: a single show, or a whole series.
#[derive(Debug, Clone, Serialize)]
pub struct GigEvent {
    pub title: String,
    pub venue: String,
    pub gig_group_id: Option<Uuid>,
    /// Performance dates, ascending. Always at least one entry.
    pub performances: Vec<GigPerformance>,
}

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// Collapse performance rows into display events.
///
/// - Rows sharing a non-null `gig_group_id` become exactly one event whose
///   `performances` holds one entry per row, sorted ascending by date.
/// - Rows without a group id each become a single-performance event.
/// - The event's title and venue are taken from the earliest row of its
///   group.
/// - Events are sorted ascending by their earliest performance date, with
///   gig id as a deterministic tie-break.
pub fn group_into_events(rows: Vec<GigRow>) -> Vec<GigEvent> {
    let mut grouped: HashMap<Uuid, Vec<GigRow>> = HashMap::new();
    let mut singles: Vec<GigRow> = Vec::new();

    for row in rows {
        match row.gig_group_id {
            Some(group_id) => grouped.entry(group_id).or_default().push(row),
            None => singles.push(row),
        }
    }

    let mut events: Vec<GigEvent> = Vec::with_capacity(grouped.len() + singles.len());

    for (group_id, mut members) in grouped {
        members.sort_by(|a, b| a.starts_at.cmp(&b.starts_at).then(a.id.cmp(&b.id)));
        // Non-empty by construction: a group only exists because a row joined it.
        let first = &members[0];
        events.push(GigEvent {
            title: first.title.clone(),
            venue: first.venue.clone(),
            gig_group_id: Some(group_id),
            performances: members.iter().map(to_performance).collect(),
        });
    }

    for row in singles {
        events.push(GigEvent {
            title: row.title.clone(),
            venue: row.venue.clone(),
            gig_group_id: None,
            performances: vec![to_performance(&row)],
        });
    }

    events.sort_by(|a, b| {
        let ka = (&a.performances[0].starts_at, a.performances[0].gig_id);
        let kb = (&b.performances[0].starts_at, b.performances[0].gig_id);
        ka.cmp(&kb)
    });

    events
}

fn to_performance(row: &GigRow) -> GigPerformance {
    GigPerformance {
        gig_id: row.id,
        starts_at: row.starts_at,
        ticket_url: row.ticket_url.clone(),
        organizer_url: row.organizer_url.clone(),
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a gig title: non-blank, bounded length.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Gig title is required".into()));
    }
    if trimmed.len() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Gig title exceeds maximum length of {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a venue name: non-blank, bounded length.
pub fn validate_venue(venue: &str) -> Result<(), CoreError> {
    let trimmed = venue.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Venue is required".into()));
    }
    if trimmed.len() > MAX_VENUE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Venue exceeds maximum length of {MAX_VENUE_LENGTH} characters"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
