//! Team member entity model and DTOs.

use institut_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `team_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TeamMember {
    pub id: DbId,
    pub name_ru: String,
    pub name_en: Option<String>,
    pub name_kk: Option<String>,
    pub position_ru: String,
    pub position_en: Option<String>,
    pub position_kk: Option<String>,
    pub description_ru: String,
    pub description_en: Option<String>,
    pub description_kk: Option<String>,
    pub photo: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub is_featured: bool,
    pub orcid_id: Option<String>,
    pub scopus_id: Option<String>,
    pub publications_url: Option<String>,
    pub email: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new team member.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeamMember {
    pub name_ru: String,
    pub name_en: Option<String>,
    pub name_kk: Option<String>,
    pub position_ru: String,
    pub position_en: Option<String>,
    pub position_kk: Option<String>,
    pub description_ru: String,
    pub description_en: Option<String>,
    pub description_kk: Option<String>,
    pub photo: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    /// Defaults to `false` if omitted.
    pub is_featured: Option<bool>,
    pub orcid_id: Option<String>,
    pub scopus_id: Option<String>,
    pub publications_url: Option<String>,
    pub email: Option<String>,
}

/// DTO for updating an existing team member.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTeamMember {
    pub name_ru: Option<String>,
    pub name_en: Option<String>,
    pub name_kk: Option<String>,
    pub position_ru: Option<String>,
    pub position_en: Option<String>,
    pub position_kk: Option<String>,
    pub description_ru: Option<String>,
    pub description_en: Option<String>,
    pub description_kk: Option<String>,
    pub photo: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub is_featured: Option<bool>,
    pub orcid_id: Option<String>,
    pub scopus_id: Option<String>,
    pub publications_url: Option<String>,
    pub email: Option<String>,
}
