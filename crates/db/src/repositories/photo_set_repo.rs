//! Repository for the `photo_sets` table.

use sqlx::PgPool;
use stagedoor_core::types::DbId;

use crate::models::photo::{CreatePhotoSet, PhotoSet, UpdatePhotoSet};

const COLUMNS: &str = "id, title, credit, is_press_kit, archive_url, order_index, \
                        created_at, updated_at";

/// Provides CRUD and ordering operations for photo sets.
pub struct PhotoSetRepo;

impl PhotoSetRepo {
    /// Insert a new photo set at the end of the current ordering.
    pub async fn create(pool: &PgPool, input: &CreatePhotoSet) -> Result<PhotoSet, sqlx::Error> {
        let query = format!(
            "INSERT INTO photo_sets (title, credit, is_press_kit, archive_url, order_index)
             VALUES ($1, $2, $3, $4,
                     (SELECT COALESCE(MAX(order_index) + 1, 0) FROM photo_sets))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PhotoSet>(&query)
            .bind(&input.title)
            .bind(&input.credit)
            .bind(input.is_press_kit)
            .bind(&input.archive_url)
            .fetch_one(pool)
            .await
    }

    /// Find a photo set by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PhotoSet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM photo_sets WHERE id = $1");
        sqlx::query_as::<_, PhotoSet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List photo sets in display order, optionally filtered by the press
    /// kit flag.
    pub async fn list(
        pool: &PgPool,
        press_kit: Option<bool>,
    ) -> Result<Vec<PhotoSet>, sqlx::Error> {
        match press_kit {
            Some(flag) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM photo_sets WHERE is_press_kit = $1
                     ORDER BY order_index ASC, id ASC"
                );
                sqlx::query_as::<_, PhotoSet>(&query)
                    .bind(flag)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query =
                    format!("SELECT {COLUMNS} FROM photo_sets ORDER BY order_index ASC, id ASC");
                sqlx::query_as::<_, PhotoSet>(&query).fetch_all(pool).await
            }
        }
    }

    /// Apply a partial update. Only non-`None` fields are changed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePhotoSet,
    ) -> Result<PhotoSet, sqlx::Error> {
        let query = format!(
            "UPDATE photo_sets SET
                title = COALESCE($2, title),
                credit = COALESCE($3, credit),
                is_press_kit = COALESCE($4, is_press_kit),
                archive_url = COALESCE($5, archive_url),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PhotoSet>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.credit)
            .bind(input.is_press_kit)
            .bind(&input.archive_url)
            .fetch_one(pool)
            .await
    }

    /// Delete a photo set (its photos cascade). Returns `true` if a row was
    /// removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM photo_sets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Rewrite `order_index` for the given sets so the list position becomes
    /// the stored index, inside a single transaction.
    ///
    /// Returns `Ok(Some(id))` with the first unknown ID if any entry does not
    /// match a row; the transaction is rolled back in that case.
    pub async fn reorder(pool: &PgPool, ids: &[DbId]) -> Result<Option<DbId>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        for (index, id) in ids.iter().enumerate() {
            let result = sqlx::query(
                "UPDATE photo_sets SET order_index = $2, updated_at = NOW() WHERE id = $1",
            )
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
