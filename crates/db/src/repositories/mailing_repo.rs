//! Repository for the `mailings` table (newsletter signups).
//!
//! Signups are deduplicated by exact email match: `create` is a no-op when
//! the address is already subscribed.

use institut_core::types::DbId;
use sqlx::PgPool;

use crate::models::submission::Mailing;

const COLUMNS: &str = "id, email, created_at";

/// Stores newsletter signups.
pub struct MailingRepo;

impl MailingRepo {
    /// Subscribe an email address.
    ///
    /// Returns `None` when the address is already subscribed (the existing
    /// row is left unchanged).
    pub async fn create(pool: &PgPool, email: &str) -> Result<Option<Mailing>, sqlx::Error> {
        let query = format!(
            "INSERT INTO mailings (email) VALUES ($1)
             ON CONFLICT (email) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mailing>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Whether an address is already subscribed.
    pub async fn exists_by_email(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
        let row: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM mailings WHERE email = $1)")
                .bind(email)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }

    /// List all signups, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Mailing>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mailings ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Mailing>(&query).fetch_all(pool).await
    }

    /// Delete a signup by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM mailings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
