//! Partner entity model and DTOs.

use institut_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `partners` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Partner {
    pub id: DbId,
    pub name_ru: String,
    pub name_en: Option<String>,
    pub name_kk: Option<String>,
    pub logo: Option<String>,
    pub website_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a partner.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePartner {
    pub name_ru: String,
    pub name_en: Option<String>,
    pub name_kk: Option<String>,
    pub logo: Option<String>,
    pub website_url: Option<String>,
}

/// DTO for updating a partner.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePartner {
    pub name_ru: Option<String>,
    pub name_en: Option<String>,
    pub name_kk: Option<String>,
    pub logo: Option<String>,
    pub website_url: Option<String>,
}
