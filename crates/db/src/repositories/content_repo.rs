//! Repository for the `contents` table.

use quill_core::types::DbId;
use sqlx::PgPool;

use crate::models::content::{Content, CreateContent, UpdateContent};

/// Column list for contents queries.
const COLUMNS: &str = "id, title, body, created_at, updated_at";

/// Provides CRUD operations for content records.
pub struct ContentRepo;

impl ContentRepo {
    /// List all content records, ordered by id ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Content>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contents ORDER BY id ASC");
        sqlx::query_as::<_, Content>(&query).fetch_all(pool).await
    }

    /// Find a content record by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Content>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contents WHERE id = $1");
        sqlx::query_as::<_, Content>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new content record, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateContent) -> Result<Content, sqlx::Error> {
        let query = format!(
            "INSERT INTO contents (title, body)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Content>(&query)
            .bind(&input.title)
            .bind(&input.body)
            .fetch_one(pool)
            .await
    }

    /// Partially update a content record by ID, returning the updated row.
    ///
    /// Absent fields keep their stored value; `updated_at` is refreshed
    /// unconditionally.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateContent,
    ) -> Result<Option<Content>, sqlx::Error> {
        let query = format!(
            "UPDATE contents SET
                title = COALESCE($2, title),
                body = COALESCE($3, body),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Content>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.body)
            .fetch_optional(pool)
            .await
    }

    /// Delete a content record by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contents WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
