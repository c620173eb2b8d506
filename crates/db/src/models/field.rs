//! Research field entity model and DTOs.

use institut_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `fields` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Field {
    pub id: DbId,
    pub name_ru: String,
    pub name_en: Option<String>,
    pub name_kk: Option<String>,
    pub description_ru: String,
    pub description_en: Option<String>,
    pub description_kk: Option<String>,
    pub image: Option<String>,
    pub hero_image: Option<String>,
    pub slug: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new research field.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateField {
    pub name_ru: String,
    pub name_en: Option<String>,
    pub name_kk: Option<String>,
    pub description_ru: String,
    pub description_en: Option<String>,
    pub description_kk: Option<String>,
    pub image: Option<String>,
    pub hero_image: Option<String>,
    pub slug: Option<String>,
}

/// DTO for updating an existing research field.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateField {
    pub name_ru: Option<String>,
    pub name_en: Option<String>,
    pub name_kk: Option<String>,
    pub description_ru: Option<String>,
    pub description_en: Option<String>,
    pub description_kk: Option<String>,
    pub image: Option<String>,
    pub hero_image: Option<String>,
}
