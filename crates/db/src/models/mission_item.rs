//! Mission / goals / strategy item model and DTOs.

use institut_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `mission_items` table. Listed by `sort_order`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MissionItem {
    pub id: DbId,
    pub name_ru: String,
    pub name_en: Option<String>,
    pub name_kk: Option<String>,
    pub description_ru: String,
    pub description_en: Option<String>,
    pub description_kk: Option<String>,
    pub icon_class: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new mission item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMissionItem {
    pub name_ru: String,
    pub name_en: Option<String>,
    pub name_kk: Option<String>,
    pub description_ru: String,
    pub description_en: Option<String>,
    pub description_kk: Option<String>,
    /// Defaults to `''` if omitted.
    pub icon_class: Option<String>,
    /// Defaults to 0 if omitted.
    pub sort_order: Option<i32>,
}

/// DTO for updating an existing mission item.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMissionItem {
    pub name_ru: Option<String>,
    pub name_en: Option<String>,
    pub name_kk: Option<String>,
    pub description_ru: Option<String>,
    pub description_en: Option<String>,
    pub description_kk: Option<String>,
    pub icon_class: Option<String>,
    pub sort_order: Option<i32>,
}
