//! Repository for the `partners` table.

use institut_core::types::DbId;
use sqlx::PgPool;

use crate::models::partner::{CreatePartner, Partner, UpdatePartner};

const COLUMNS: &str = "id, name_ru, name_en, name_kk, logo, website_url, created_at, updated_at";

/// Provides CRUD operations for partners.
pub struct PartnerRepo;

impl PartnerRepo {
    /// Insert a partner, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePartner) -> Result<Partner, sqlx::Error> {
        let query = format!(
            "INSERT INTO partners (name_ru, name_en, name_kk, logo, website_url)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Partner>(&query)
            .bind(&input.name_ru)
            .bind(&input.name_en)
            .bind(&input.name_kk)
            .bind(&input.logo)
            .bind(&input.website_url)
            .fetch_one(pool)
            .await
    }

    /// List all partners ordered by Russian name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Partner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM partners ORDER BY name_ru");
        sqlx::query_as::<_, Partner>(&query).fetch_all(pool).await
    }

    /// Find a partner by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Partner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM partners WHERE id = $1");
        sqlx::query_as::<_, Partner>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a partner. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePartner,
    ) -> Result<Option<Partner>, sqlx::Error> {
        let query = format!(
            "UPDATE partners SET
                name_ru = COALESCE($2, name_ru),
                name_en = COALESCE($3, name_en),
                name_kk = COALESCE($4, name_kk),
                logo = COALESCE($5, logo),
                website_url = COALESCE($6, website_url),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Partner>(&query)
            .bind(id)
            .bind(&input.name_ru)
            .bind(&input.name_en)
            .bind(&input.name_kk)
            .bind(&input.logo)
            .bind(&input.website_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a partner by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM partners WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
