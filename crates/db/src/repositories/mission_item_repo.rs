//! Repository for the `mission_items` table.

use institut_core::types::DbId;
use sqlx::PgPool;

use crate::models::mission_item::{CreateMissionItem, MissionItem, UpdateMissionItem};

const COLUMNS: &str = "id, name_ru, name_en, name_kk, \
    description_ru, description_en, description_kk, \
    icon_class, sort_order, created_at, updated_at";

/// Provides CRUD operations for mission items.
pub struct MissionItemRepo;

impl MissionItemRepo {
    /// Insert a mission item, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMissionItem,
    ) -> Result<MissionItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO mission_items
                (name_ru, name_en, name_kk, description_ru, description_en,
                 description_kk, icon_class, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, ''), COALESCE($8, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MissionItem>(&query)
            .bind(&input.name_ru)
            .bind(&input.name_en)
            .bind(&input.name_kk)
            .bind(&input.description_ru)
            .bind(&input.description_en)
            .bind(&input.description_kk)
            .bind(&input.icon_class)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// List all mission items in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<MissionItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mission_items ORDER BY sort_order, id");
        sqlx::query_as::<_, MissionItem>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a mission item by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MissionItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mission_items WHERE id = $1");
        sqlx::query_as::<_, MissionItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a mission item. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMissionItem,
    ) -> Result<Option<MissionItem>, sqlx::Error> {
        let query = format!(
            "UPDATE mission_items SET
                name_ru = COALESCE($2, name_ru),
                name_en = COALESCE($3, name_en),
                name_kk = COALESCE($4, name_kk),
                description_ru = COALESCE($5, description_ru),
                description_en = COALESCE($6, description_en),
                description_kk = COALESCE($7, description_kk),
                icon_class = COALESCE($8, icon_class),
                sort_order = COALESCE($9, sort_order),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MissionItem>(&query)
            .bind(id)
            .bind(&input.name_ru)
            .bind(&input.name_en)
            .bind(&input.name_kk)
            .bind(&input.description_ru)
            .bind(&input.description_en)
            .bind(&input.description_kk)
            .bind(&input.icon_class)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a mission item by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM mission_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
