//! News item entity model and DTOs.

use institut_core::types::{DateOnly, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `news_items` table. Listed newest-first by publish date.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NewsItem {
    pub id: DbId,
    pub title_ru: String,
    pub title_en: Option<String>,
    pub title_kk: Option<String>,
    pub content_ru: String,
    pub content_en: Option<String>,
    pub content_kk: Option<String>,
    pub excerpt_ru: Option<String>,
    pub excerpt_en: Option<String>,
    pub excerpt_kk: Option<String>,
    pub slug: String,
    pub image: Option<String>,
    pub publish_date: DateOnly,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a news item.
///
/// If `slug` is omitted it is derived from `title_ru`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNewsItem {
    pub title_ru: String,
    pub title_en: Option<String>,
    pub title_kk: Option<String>,
    pub content_ru: String,
    pub content_en: Option<String>,
    pub content_kk: Option<String>,
    pub excerpt_ru: Option<String>,
    pub excerpt_en: Option<String>,
    pub excerpt_kk: Option<String>,
    pub slug: Option<String>,
    pub image: Option<String>,
    pub publish_date: Option<DateOnly>,
}

/// DTO for updating a news item. The slug is never regenerated.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateNewsItem {
    pub title_ru: Option<String>,
    pub title_en: Option<String>,
    pub title_kk: Option<String>,
    pub content_ru: Option<String>,
    pub content_en: Option<String>,
    pub content_kk: Option<String>,
    pub excerpt_ru: Option<String>,
    pub excerpt_en: Option<String>,
    pub excerpt_kk: Option<String>,
    pub image: Option<String>,
    pub publish_date: Option<DateOnly>,
}
