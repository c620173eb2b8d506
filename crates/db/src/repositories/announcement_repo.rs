//! Repository for the `announcements` table.

use institut_core::types::DbId;
use sqlx::PgPool;

use crate::models::announcement::{Announcement, CreateAnnouncement, UpdateAnnouncement};

const COLUMNS: &str = "id, title_ru, title_en, title_kk, event_date, created_at, updated_at";

/// Provides CRUD operations for announcements.
pub struct AnnouncementRepo;

impl AnnouncementRepo {
    /// Insert an announcement, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAnnouncement,
    ) -> Result<Announcement, sqlx::Error> {
        let query = format!(
            "INSERT INTO announcements (title_ru, title_en, title_kk, event_date)
             VALUES ($1, $2, $3, COALESCE($4, CURRENT_DATE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(&input.title_ru)
            .bind(&input.title_en)
            .bind(&input.title_kk)
            .bind(input.event_date)
            .fetch_one(pool)
            .await
    }

    /// List all announcements, soonest event first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Announcement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM announcements ORDER BY event_date, id");
        sqlx::query_as::<_, Announcement>(&query)
            .fetch_all(pool)
            .await
    }

    /// The `n` announcements with the latest event dates (home page block).
    pub async fn latest(pool: &PgPool, n: i64) -> Result<Vec<Announcement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM announcements ORDER BY event_date DESC, id DESC LIMIT $1"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(n)
            .fetch_all(pool)
            .await
    }

    /// Find an announcement by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Announcement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM announcements WHERE id = $1");
        sqlx::query_as::<_, Announcement>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update an announcement. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAnnouncement,
    ) -> Result<Option<Announcement>, sqlx::Error> {
        let query = format!(
            "UPDATE announcements SET
                title_ru = COALESCE($2, title_ru),
                title_en = COALESCE($3, title_en),
                title_kk = COALESCE($4, title_kk),
                event_date = COALESCE($5, event_date),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(id)
            .bind(&input.title_ru)
            .bind(&input.title_en)
            .bind(&input.title_kk)
            .bind(input.event_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete an announcement by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM announcements WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
