//! Repository for the `fields` table.

use institut_core::slug::generate_slug;
use institut_core::types::DbId;
use sqlx::PgPool;

use crate::models::field::{CreateField, Field, UpdateField};

const COLUMNS: &str = "id, name_ru, name_en, name_kk, \
    description_ru, description_en, description_kk, \
    image, hero_image, slug, created_at, updated_at";

/// Provides CRUD operations for research fields.
pub struct FieldRepo;

impl FieldRepo {
    /// Insert a new research field, returning the created row.
    ///
    /// If `slug` is `None`, it is derived from `name_ru`.
    pub async fn create(pool: &PgPool, input: &CreateField) -> Result<Field, sqlx::Error> {
        let slug = match &input.slug {
            Some(s) => s.clone(),
            None => generate_slug(&input.name_ru),
        };
        let query = format!(
            "INSERT INTO fields
                (name_ru, name_en, name_kk, description_ru, description_en,
                 description_kk, image, hero_image, slug)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Field>(&query)
            .bind(&input.name_ru)
            .bind(&input.name_en)
            .bind(&input.name_kk)
            .bind(&input.description_ru)
            .bind(&input.description_en)
            .bind(&input.description_kk)
            .bind(&input.image)
            .bind(&input.hero_image)
            .bind(&slug)
            .fetch_one(pool)
            .await
    }

    /// List all research fields ordered by Russian name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Field>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fields ORDER BY name_ru");
        sqlx::query_as::<_, Field>(&query).fetch_all(pool).await
    }

    /// Pick up to `n` research fields at random (about-page highlight).
    pub async fn sample(pool: &PgPool, n: i64) -> Result<Vec<Field>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fields ORDER BY RANDOM() LIMIT $1");
        sqlx::query_as::<_, Field>(&query)
            .bind(n)
            .fetch_all(pool)
            .await
    }

    /// Find a research field by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Field>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fields WHERE id = $1");
        sqlx::query_as::<_, Field>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a research field by its slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Field>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fields WHERE slug = $1");
        sqlx::query_as::<_, Field>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Update a research field. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateField,
    ) -> Result<Option<Field>, sqlx::Error> {
        let query = format!(
            "UPDATE fields SET
                name_ru = COALESCE($2, name_ru),
                name_en = COALESCE($3, name_en),
                name_kk = COALESCE($4, name_kk),
                description_ru = COALESCE($5, description_ru),
                description_en = COALESCE($6, description_en),
                description_kk = COALESCE($7, description_kk),
                image = COALESCE($8, image),
                hero_image = COALESCE($9, hero_image),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Field>(&query)
            .bind(id)
            .bind(&input.name_ru)
            .bind(&input.name_en)
            .bind(&input.name_kk)
            .bind(&input.description_ru)
            .bind(&input.description_en)
            .bind(&input.description_kk)
            .bind(&input.image)
            .bind(&input.hero_image)
            .fetch_optional(pool)
            .await
    }

    /// Delete a research field by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM fields WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
