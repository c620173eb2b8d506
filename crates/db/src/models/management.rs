//! Management (institute leadership) entity model and DTOs.

use institut_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `management` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Management {
    pub id: DbId,
    pub name_ru: String,
    pub name_en: Option<String>,
    pub name_kk: Option<String>,
    pub position_ru: String,
    pub position_en: Option<String>,
    pub position_kk: Option<String>,
    pub biography_ru: Option<String>,
    pub biography_en: Option<String>,
    pub biography_kk: Option<String>,
    pub photo: Option<String>,
    pub linkedin_url: Option<String>,
    pub sort_order: i32,
    pub orcid_id: Option<String>,
    pub scopus_id: Option<String>,
    pub publications_url: Option<String>,
    pub email: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new management entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateManagement {
    pub name_ru: String,
    pub name_en: Option<String>,
    pub name_kk: Option<String>,
    pub position_ru: String,
    pub position_en: Option<String>,
    pub position_kk: Option<String>,
    pub biography_ru: Option<String>,
    pub biography_en: Option<String>,
    pub biography_kk: Option<String>,
    pub photo: Option<String>,
    pub linkedin_url: Option<String>,
    /// Defaults to 0 if omitted.
    pub sort_order: Option<i32>,
    pub orcid_id: Option<String>,
    pub scopus_id: Option<String>,
    pub publications_url: Option<String>,
    pub email: Option<String>,
}

/// DTO for updating an existing management entry.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateManagement {
    pub name_ru: Option<String>,
    pub name_en: Option<String>,
    pub name_kk: Option<String>,
    pub position_ru: Option<String>,
    pub position_en: Option<String>,
    pub position_kk: Option<String>,
    pub biography_ru: Option<String>,
    pub biography_en: Option<String>,
    pub biography_kk: Option<String>,
    pub photo: Option<String>,
    pub linkedin_url: Option<String>,
    pub sort_order: Option<i32>,
    pub orcid_id: Option<String>,
    pub scopus_id: Option<String>,
    pub publications_url: Option<String>,
    pub email: Option<String>,
}
