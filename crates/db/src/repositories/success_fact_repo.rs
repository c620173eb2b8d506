//! Repository for the `success_facts` table.

use institut_core::types::DbId;
use sqlx::PgPool;

use crate::models::success_fact::{CreateSuccessFact, SuccessFact, UpdateSuccessFact};

const COLUMNS: &str = "id, title_ru, title_en, title_kk, \
    value_ru, value_en, value_kk, \
    long_description_ru, long_description_en, long_description_kk, \
    image, icon_class, sort_order, created_at, updated_at";

/// Provides CRUD operations for success facts.
pub struct SuccessFactRepo;

impl SuccessFactRepo {
    /// Insert a success fact, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSuccessFact,
    ) -> Result<SuccessFact, sqlx::Error> {
        let query = format!(
            "INSERT INTO success_facts
                (title_ru, title_en, title_kk, value_ru, value_en, value_kk,
                 long_description_ru, long_description_en, long_description_kk,
                 image, icon_class, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                     COALESCE($11, 'bi-award-fill'), COALESCE($12, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SuccessFact>(&query)
            .bind(&input.title_ru)
            .bind(&input.title_en)
            .bind(&input.title_kk)
            .bind(&input.value_ru)
            .bind(&input.value_en)
            .bind(&input.value_kk)
            .bind(&input.long_description_ru)
            .bind(&input.long_description_en)
            .bind(&input.long_description_kk)
            .bind(&input.image)
            .bind(&input.icon_class)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// List all success facts in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<SuccessFact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM success_facts ORDER BY sort_order, id");
        sqlx::query_as::<_, SuccessFact>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a success fact by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SuccessFact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM success_facts WHERE id = $1");
        sqlx::query_as::<_, SuccessFact>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a success fact. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSuccessFact,
    ) -> Result<Option<SuccessFact>, sqlx::Error> {
        let query = format!(
            "UPDATE success_facts SET
                title_ru = COALESCE($2, title_ru),
                title_en = COALESCE($3, title_en),
                title_kk = COALESCE($4, title_kk),
                value_ru = COALESCE($5, value_ru),
                value_en = COALESCE($6, value_en),
                value_kk = COALESCE($7, value_kk),
                long_description_ru = COALESCE($8, long_description_ru),
                long_description_en = COALESCE($9, long_description_en),
                long_description_kk = COALESCE($10, long_description_kk),
                image = COALESCE($11, image),
                icon_class = COALESCE($12, icon_class),
                sort_order = COALESCE($13, sort_order),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SuccessFact>(&query)
            .bind(id)
            .bind(&input.title_ru)
            .bind(&input.title_en)
            .bind(&input.title_kk)
            .bind(&input.value_ru)
            .bind(&input.value_en)
            .bind(&input.value_kk)
            .bind(&input.long_description_ru)
            .bind(&input.long_description_en)
            .bind(&input.long_description_kk)
            .bind(&input.image)
            .bind(&input.icon_class)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a success fact by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM success_facts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
