//! Repository for the `photos` table.

use sqlx::PgPool;
use stagedoor_core::types::DbId;

use crate::models::photo::{CreatePhoto, Photo, UpdatePhoto};

const COLUMNS: &str = "id, photo_set_id, image_url, alt_text, order_index, created_at";

/// Provides CRUD and ordering operations for photos within a set.
pub struct PhotoRepo;

impl PhotoRepo {
    /// Insert a photo at the end of its set's ordering.
    pub async fn create(
        pool: &PgPool,
        photo_set_id: DbId,
        input: &CreatePhoto,
    ) -> Result<Photo, sqlx::Error> {
        let query = format!(
            "INSERT INTO photos (photo_set_id, image_url, alt_text, order_index)
             VALUES ($1, $2, $3,
                     (SELECT COALESCE(MAX(order_index) + 1, 0) FROM photos
                      WHERE photo_set_id = $1))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(photo_set_id)
            .bind(&input.image_url)
            .bind(&input.alt_text)
            .fetch_one(pool)
            .await
    }

    /// List the photos of one set in display order.
    pub async fn list_for_set(pool: &PgPool, photo_set_id: DbId) -> Result<Vec<Photo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM photos WHERE photo_set_id = $1
             ORDER BY order_index ASC, id ASC"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(photo_set_id)
            .fetch_all(pool)
            .await
    }

    /// List the photos of several sets in one query, ordered by set and
    /// display position.
    pub async fn list_for_sets(pool: &PgPool, set_ids: &[DbId]) -> Result<Vec<Photo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM photos WHERE photo_set_id = ANY($1)
             ORDER BY photo_set_id ASC, order_index ASC, id ASC"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(set_ids.to_vec())
            .fetch_all(pool)
            .await
    }

    /// Apply a partial update. Only non-`None` fields are changed.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdatePhoto) -> Result<Photo, sqlx::Error> {
        let query = format!(
            "UPDATE photos SET
                image_url = COALESCE($2, image_url),
                alt_text = COALESCE($3, alt_text)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(id)
            .bind(&input.image_url)
            .bind(&input.alt_text)
            .fetch_one(pool)
            .await
    }

    /// Delete a photo. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM photos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Rewrite `order_index` for the photos of one set so the list position
    /// becomes the stored index, inside a single transaction.
    ///
    /// IDs must belong to the given set. Returns `Ok(Some(id))` with the
    /// first ID that does not match; the transaction is rolled back in that
    /// case.
    pub async fn reorder_within_set(
        pool: &PgPool,
        photo_set_id: DbId,
        ids: &[DbId],
    ) -> Result<Option<DbId>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        for (index, id) in ids.iter().enumerate() {
            let result = sqlx::query(
                "UPDATE photos SET order_index = $3 WHERE id = $1 AND photo_set_id = $2",
            )
            .bind(id)
            .bind(photo_set_id)
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
