//! Repository for the `applications` table (contact form submissions).
//!
//! Applications are append-only: there is no update method.

use institut_core::types::DbId;
use sqlx::PgPool;

use crate::models::submission::{Application, CreateApplication};

const COLUMNS: &str = "id, full_name, email, phone, topic, message, created_at";

/// Stores and lists contact form submissions.
pub struct ApplicationRepo;

impl ApplicationRepo {
    /// Insert a contact application, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateApplication,
    ) -> Result<Application, sqlx::Error> {
        let query = format!(
            "INSERT INTO applications (full_name, email, phone, topic, message)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.topic)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// List all applications, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Application>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM applications ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Application>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find an application by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Application>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM applications WHERE id = $1");
        sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an application by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM applications WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
