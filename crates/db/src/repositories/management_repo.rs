//! Repository for the `management` table.

use institut_core::types::DbId;
use sqlx::PgPool;

use crate::models::management::{CreateManagement, Management, UpdateManagement};

const COLUMNS: &str = "id, name_ru, name_en, name_kk, \
    position_ru, position_en, position_kk, \
    biography_ru, biography_en, biography_kk, \
    photo, linkedin_url, sort_order, \
    orcid_id, scopus_id, publications_url, email, \
    created_at, updated_at";

/// Provides CRUD operations for institute leadership entries.
pub struct ManagementRepo;

impl ManagementRepo {
    /// Insert a management entry, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateManagement,
    ) -> Result<Management, sqlx::Error> {
        let query = format!(
            "INSERT INTO management
                (name_ru, name_en, name_kk, position_ru, position_en,
                 position_kk, biography_ru, biography_en, biography_kk,
                 photo, linkedin_url, sort_order,
                 orcid_id, scopus_id, publications_url, email)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11,
                     COALESCE($12, 0), $13, $14, $15, $16)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Management>(&query)
            .bind(&input.name_ru)
            .bind(&input.name_en)
            .bind(&input.name_kk)
            .bind(&input.position_ru)
            .bind(&input.position_en)
            .bind(&input.position_kk)
            .bind(&input.biography_ru)
            .bind(&input.biography_en)
            .bind(&input.biography_kk)
            .bind(&input.photo)
            .bind(&input.linkedin_url)
            .bind(input.sort_order)
            .bind(&input.orcid_id)
            .bind(&input.scopus_id)
            .bind(&input.publications_url)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// List all management entries in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Management>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM management ORDER BY sort_order, id");
        sqlx::query_as::<_, Management>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a management entry by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Management>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM management WHERE id = $1");
        sqlx::query_as::<_, Management>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a management entry. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateManagement,
    ) -> Result<Option<Management>, sqlx::Error> {
        let query = format!(
            "UPDATE management SET
                name_ru = COALESCE($2, name_ru),
                name_en = COALESCE($3, name_en),
                name_kk = COALESCE($4, name_kk),
                position_ru = COALESCE($5, position_ru),
                position_en = COALESCE($6, position_en),
                position_kk = COALESCE($7, position_kk),
                biography_ru = COALESCE($8, biography_ru),
                biography_en = COALESCE($9, biography_en),
                biography_kk = COALESCE($10, biography_kk),
                photo = COALESCE($11, photo),
                linkedin_url = COALESCE($12, linkedin_url),
                sort_order = COALESCE($13, sort_order),
                orcid_id = COALESCE($14, orcid_id),
                scopus_id = COALESCE($15, scopus_id),
                publications_url = COALESCE($16, publications_url),
                email = COALESCE($17, email),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Management>(&query)
            .bind(id)
            .bind(&input.name_ru)
            .bind(&input.name_en)
            .bind(&input.name_kk)
            .bind(&input.position_ru)
            .bind(&input.position_en)
            .bind(&input.position_kk)
            .bind(&input.biography_ru)
            .bind(&input.biography_en)
            .bind(&input.biography_kk)
            .bind(&input.photo)
            .bind(&input.linkedin_url)
            .bind(input.sort_order)
            .bind(&input.orcid_id)
            .bind(&input.scopus_id)
            .bind(&input.publications_url)
            .bind(&input.email)
            .fetch_optional(pool)
            .await
    }

    /// Delete a management entry by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM management WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
