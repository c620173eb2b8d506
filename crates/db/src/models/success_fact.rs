//! Success fact (achievements counter) model and DTOs.

use institut_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `success_facts` table. Listed by `sort_order`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SuccessFact {
    pub id: DbId,
    pub title_ru: String,
    pub title_en: Option<String>,
    pub title_kk: Option<String>,
    pub value_ru: String,
    pub value_en: Option<String>,
    pub value_kk: Option<String>,
    pub long_description_ru: Option<String>,
    pub long_description_en: Option<String>,
    pub long_description_kk: Option<String>,
    pub image: Option<String>,
    pub icon_class: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a success fact.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSuccessFact {
    pub title_ru: String,
    pub title_en: Option<String>,
    pub title_kk: Option<String>,
    pub value_ru: String,
    pub value_en: Option<String>,
    pub value_kk: Option<String>,
    pub long_description_ru: Option<String>,
    pub long_description_en: Option<String>,
    pub long_description_kk: Option<String>,
    pub image: Option<String>,
    /// Defaults to `'bi-award-fill'` if omitted.
    pub icon_class: Option<String>,
    /// Defaults to 0 if omitted.
    pub sort_order: Option<i32>,
}

/// DTO for updating a success fact.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSuccessFact {
    pub title_ru: Option<String>,
    pub title_en: Option<String>,
    pub title_kk: Option<String>,
    pub value_ru: Option<String>,
    pub value_en: Option<String>,
    pub value_kk: Option<String>,
    pub long_description_ru: Option<String>,
    pub long_description_en: Option<String>,
    pub long_description_kk: Option<String>,
    pub image: Option<String>,
    pub icon_class: Option<String>,
    pub sort_order: Option<i32>,
}
