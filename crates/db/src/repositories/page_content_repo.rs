//! Repository for the `page_contents` table.

use sqlx::PgPool;

use crate::models::page_content::PageContent;

const COLUMNS: &str = "id, page, content, updated_at";

/// Provides read and upsert operations for per-page content documents.
pub struct PageContentRepo;

impl PageContentRepo {
    /// Fetch the content document for a page.
    ///
    /// Returns `sqlx::Error::RowNotFound` when no document has been stored
    /// for the page yet.
    pub async fn get_by_page(pool: &PgPool, page: &str) -> Result<PageContent, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM page_contents WHERE page = $1");
        sqlx::query_as::<_, PageContent>(&query)
            .bind(page)
            .fetch_one(pool)
            .await
    }

    /// List every stored page document.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<PageContent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM page_contents ORDER BY page ASC");
        sqlx::query_as::<_, PageContent>(&query).fetch_all(pool).await
    }

    /// Insert or replace the content document for a page.
    pub async fn upsert(
        pool: &PgPool,
        page: &str,
        content: &serde_json::Value,
    ) -> Result<PageContent, sqlx::Error> {
        let query = format!(
            "INSERT INTO page_contents (page, content)
             VALUES ($1, $2)
             ON CONFLICT (page) DO UPDATE
                SET content = EXCLUDED.content, updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PageContent>(&query)
            .bind(page)
            .bind(content)
            .fetch_one(pool)
            .await
    }
}
