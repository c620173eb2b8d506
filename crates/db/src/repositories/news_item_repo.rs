//! Repository for the `news_items` table.

use institut_core::slug::generate_slug;
use institut_core::types::DbId;
use sqlx::PgPool;

use crate::models::news_item::{CreateNewsItem, NewsItem, UpdateNewsItem};

const COLUMNS: &str = "id, title_ru, title_en, title_kk, \
    content_ru, content_en, content_kk, \
    excerpt_ru, excerpt_en, excerpt_kk, \
    slug, image, publish_date, created_at, updated_at";

/// Provides CRUD operations for news items.
pub struct NewsItemRepo;

impl NewsItemRepo {
    /// Insert a news item, returning the created row.
    ///
    /// If `slug` is `None`, it is derived from `title_ru`.
    pub async fn create(pool: &PgPool, input: &CreateNewsItem) -> Result<NewsItem, sqlx::Error> {
        let slug = match &input.slug {
            Some(s) => s.clone(),
            None => generate_slug(&input.title_ru),
        };
        let query = format!(
            "INSERT INTO news_items
                (title_ru, title_en, title_kk, content_ru, content_en,
                 content_kk, excerpt_ru, excerpt_en, excerpt_kk, slug, image,
                 publish_date)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11,
                     COALESCE($12, CURRENT_DATE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NewsItem>(&query)
            .bind(&input.title_ru)
            .bind(&input.title_en)
            .bind(&input.title_kk)
            .bind(&input.content_ru)
            .bind(&input.content_en)
            .bind(&input.content_kk)
            .bind(&input.excerpt_ru)
            .bind(&input.excerpt_en)
            .bind(&input.excerpt_kk)
            .bind(&slug)
            .bind(&input.image)
            .bind(input.publish_date)
            .fetch_one(pool)
            .await
    }

    /// List all news, newest publish date first.
    pub async fn list(pool: &PgPool) -> Result<Vec<NewsItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM news_items ORDER BY publish_date DESC, id DESC");
        sqlx::query_as::<_, NewsItem>(&query).fetch_all(pool).await
    }

    /// The `n` most recent news items (home page block).
    pub async fn latest(pool: &PgPool, n: i64) -> Result<Vec<NewsItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM news_items ORDER BY publish_date DESC, id DESC LIMIT $1"
        );
        sqlx::query_as::<_, NewsItem>(&query)
            .bind(n)
            .fetch_all(pool)
            .await
    }

    /// Find a news item by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<NewsItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM news_items WHERE id = $1");
        sqlx::query_as::<_, NewsItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a news item by its slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<NewsItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM news_items WHERE slug = $1");
        sqlx::query_as::<_, NewsItem>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Update a news item. Only non-`None` fields are applied; the slug is
    /// left untouched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNewsItem,
    ) -> Result<Option<NewsItem>, sqlx::Error> {
        let query = format!(
            "UPDATE news_items SET
                title_ru = COALESCE($2, title_ru),
                title_en = COALESCE($3, title_en),
                title_kk = COALESCE($4, title_kk),
                content_ru = COALESCE($5, content_ru),
                content_en = COALESCE($6, content_en),
                content_kk = COALESCE($7, content_kk),
                excerpt_ru = COALESCE($8, excerpt_ru),
                excerpt_en = COALESCE($9, excerpt_en),
                excerpt_kk = COALESCE($10, excerpt_kk),
                image = COALESCE($11, image),
                publish_date = COALESCE($12, publish_date),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NewsItem>(&query)
            .bind(id)
            .bind(&input.title_ru)
            .bind(&input.title_en)
            .bind(&input.title_kk)
            .bind(&input.content_ru)
            .bind(&input.content_en)
            .bind(&input.content_kk)
            .bind(&input.excerpt_ru)
            .bind(&input.excerpt_en)
            .bind(&input.excerpt_kk)
            .bind(&input.image)
            .bind(input.publish_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a news item by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM news_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
