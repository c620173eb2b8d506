//! Repository for the `labs` table.

use institut_core::slug::generate_slug;
use institut_core::types::DbId;
use sqlx::PgPool;

use crate::models::field::Field;
use crate::models::lab::{CreateLab, Lab, UpdateLab};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name_ru, name_en, name_kk, \
    description_ru, description_en, description_kk, \
    image, slug, created_at, updated_at";

/// Provides CRUD operations for labs.
pub struct LabRepo;

impl LabRepo {
    /// Insert a new lab, returning the created row.
    ///
    /// If `slug` is `None`, it is derived from `name_ru`. A duplicate slug
    /// violates `uq_labs_slug`.
    pub async fn create(pool: &PgPool, input: &CreateLab) -> Result<Lab, sqlx::Error> {
        let slug = match &input.slug {
            Some(s) => s.clone(),
            None => generate_slug(&input.name_ru),
        };
        let query = format!(
            "INSERT INTO labs
                (name_ru, name_en, name_kk, description_ru, description_en,
                 description_kk, image, slug)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lab>(&query)
            .bind(&input.name_ru)
            .bind(&input.name_en)
            .bind(&input.name_kk)
            .bind(&input.description_ru)
            .bind(&input.description_en)
            .bind(&input.description_kk)
            .bind(&input.image)
            .bind(&slug)
            .fetch_one(pool)
            .await
    }

    /// List all labs ordered by Russian name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Lab>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM labs ORDER BY name_ru");
        sqlx::query_as::<_, Lab>(&query).fetch_all(pool).await
    }

    /// Find a lab by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Lab>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM labs WHERE id = $1");
        sqlx::query_as::<_, Lab>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a lab by its slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Lab>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM labs WHERE slug = $1");
        sqlx::query_as::<_, Lab>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Update a lab. Only non-`None` fields in `input` are applied; the
    /// slug is left untouched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLab,
    ) -> Result<Option<Lab>, sqlx::Error> {
        let query = format!(
            "UPDATE labs SET
                name_ru = COALESCE($2, name_ru),
                name_en = COALESCE($3, name_en),
                name_kk = COALESCE($4, name_kk),
                description_ru = COALESCE($5, description_ru),
                description_en = COALESCE($6, description_en),
                description_kk = COALESCE($7, description_kk),
                image = COALESCE($8, image),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lab>(&query)
            .bind(id)
            .bind(&input.name_ru)
            .bind(&input.name_en)
            .bind(&input.name_kk)
            .bind(&input.description_ru)
            .bind(&input.description_en)
            .bind(&input.description_kk)
            .bind(&input.image)
            .fetch_optional(pool)
            .await
    }

    /// Delete a lab by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM labs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Replace the set of research fields this lab works in.
    pub async fn set_fields(
        pool: &PgPool,
        lab_id: DbId,
        field_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("DELETE FROM lab_fields WHERE lab_id = $1")
            .bind(lab_id)
            .execute(&mut *tx)
            .await?;
        for field_id in field_ids {
            sqlx::query("INSERT INTO lab_fields (lab_id, field_id) VALUES ($1, $2)")
                .bind(lab_id)
                .bind(field_id)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await
    }

    /// List the research fields attached to a lab, ordered by Russian name.
    pub async fn list_fields(pool: &PgPool, lab_id: DbId) -> Result<Vec<Field>, sqlx::Error> {
        sqlx::query_as::<_, Field>(
            "SELECT f.id, f.name_ru, f.name_en, f.name_kk,
                    f.description_ru, f.description_en, f.description_kk,
                    f.image, f.hero_image, f.slug, f.created_at, f.updated_at
             FROM fields f
             JOIN lab_fields lf ON lf.field_id = f.id
             WHERE lf.lab_id = $1
             ORDER BY f.name_ru",
        )
        .bind(lab_id)
        .fetch_all(pool)
        .await
    }
}
