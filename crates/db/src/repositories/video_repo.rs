//! Repository for the `videos` table.

use sqlx::PgPool;
use stagedoor_core::types::DbId;

use crate::models::video::{CreateVideo, UpdateVideo, Video};

const COLUMNS: &str =
    "id, title, video_url, section, is_featured, order_index, created_at, updated_at";

/// Provides CRUD and ordering operations for videos.
pub struct VideoRepo;

impl VideoRepo {
    /// Insert a video at the end of its section's ordering.
    pub async fn create(pool: &PgPool, input: &CreateVideo) -> Result<Video, sqlx::Error> {
        let query = format!(
            "INSERT INTO videos (title, video_url, section, is_featured, order_index)
             VALUES ($1, $2, $3, $4,
                     (SELECT COALESCE(MAX(order_index) + 1, 0) FROM videos WHERE section = $3))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(&input.title)
            .bind(&input.video_url)
            .bind(&input.section)
            .bind(input.is_featured)
            .fetch_one(pool)
            .await
    }

    /// Find a video by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE id = $1");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List videos in display order, optionally filtered by section and
    /// featured flag.
    pub async fn list(
        pool: &PgPool,
        section: Option<&str>,
        featured: Option<bool>,
    ) -> Result<Vec<Video>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM videos
             WHERE ($1::text IS NULL OR section = $1)
               AND ($2::boolean IS NULL OR is_featured = $2)
             ORDER BY section ASC, order_index ASC, id ASC"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(section)
            .bind(featured)
            .fetch_all(pool)
            .await
    }

    /// Apply a partial update. Only non-`None` fields are changed.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateVideo) -> Result<Video, sqlx::Error> {
        let query = format!(
            "UPDATE videos SET
                title = COALESCE($2, title),
                video_url = COALESCE($3, video_url),
                section = COALESCE($4, section),
                is_featured = COALESCE($5, is_featured),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.video_url)
            .bind(&input.section)
            .bind(input.is_featured)
            .fetch_one(pool)
            .await
    }

    /// Delete a video. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Rewrite `order_index` for the given videos so the list position
    /// becomes the stored index, inside a single transaction.
    ///
    /// Returns `Ok(Some(id))` with the first unknown ID if any entry does not
    /// match a row; the transaction is rolled back in that case.
    pub async fn reorder(pool: &PgPool, ids: &[DbId]) -> Result<Option<DbId>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        for (index, id) in ids.iter().enumerate() {
            let result =
                sqlx::query("UPDATE videos SET order_index = $2, updated_at = NOW() WHERE id = $1")
                    .bind(id)
                    .bind(index as i32)
                    .execute(&mut *tx)
                    .await?;
            if result.rows_affected() == 0 {
                return Ok(Some(*id));
            }
        }
        tx.commit().await?;
        Ok(None)
    }
}
