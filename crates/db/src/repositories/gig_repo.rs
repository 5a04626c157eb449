//! Repository for the `gigs` table.

use sqlx::PgPool;
use stagedoor_core::types::{DbId, Timestamp};

use crate::models::gig::{CreateGig, Gig, UpdateGig};

const COLUMNS: &str =
    "id, title, venue, starts_at, gig_group_id, ticket_url, organizer_url, created_at, updated_at";

/// Provides CRUD operations for gigs.
pub struct GigRepo;

impl GigRepo {
    /// Insert a new gig, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateGig) -> Result<Gig, sqlx::Error> {
        let query = format!(
            "INSERT INTO gigs (title, venue, starts_at, gig_group_id, ticket_url, organizer_url)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Gig>(&query)
            .bind(&input.title)
            .bind(&input.venue)
            .bind(input.starts_at)
            .bind(input.gig_group_id)
            .bind(&input.ticket_url)
            .bind(&input.organizer_url)
            .fetch_one(pool)
            .await
    }

    /// Find a gig by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Gig>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gigs WHERE id = $1");
        sqlx::query_as::<_, Gig>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every gig ordered by start date ascending, then ID.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Gig>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gigs ORDER BY starts_at ASC, id ASC");
        sqlx::query_as::<_, Gig>(&query).fetch_all(pool).await
    }

    /// List gigs starting at or after the cutoff, ordered by start date
    /// ascending, then ID.
    pub async fn list_from(pool: &PgPool, cutoff: Timestamp) -> Result<Vec<Gig>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM gigs WHERE starts_at >= $1 ORDER BY starts_at ASC, id ASC");
        sqlx::query_as::<_, Gig>(&query)
            .bind(cutoff)
            .fetch_all(pool)
            .await
    }

    /// Apply a partial update. Only non-`None` fields are changed.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateGig) -> Result<Gig, sqlx::Error> {
        let query = format!(
            "UPDATE gigs SET
                title = COALESCE($2, title),
                venue = COALESCE($3, venue),
                starts_at = COALESCE($4, starts_at),
                gig_group_id = COALESCE($5, gig_group_id),
                ticket_url = COALESCE($6, ticket_url),
                organizer_url = COALESCE($7, organizer_url),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Gig>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.venue)
            .bind(input.starts_at)
            .bind(input.gig_group_id)
            .bind(&input.ticket_url)
            .bind(&input.organizer_url)
            .fetch_one(pool)
            .await
    }

    /// Delete a gig. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gigs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
