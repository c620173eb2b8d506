//! Site settings singleton model and DTOs.
//!
//! The table holds at most one row (id pinned to 1). There is no delete
//! DTO and no delete repository method: the settings row, once created, can
//! only be updated.

use institut_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The single row of the `site_settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteSettings {
    pub id: DbId,
    pub hero_title_home: String,
    pub hero_subtitle_home: String,
    pub about_text_intro: String,
    pub about_image: Option<String>,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub hero_image_home: Option<String>,
    pub hero_image_about: Option<String>,
    pub hero_image_labs: Option<String>,
    pub hero_image_contacts: Option<String>,
    pub hero_image_news: Option<String>,
    pub hero_image_all_projects: Option<String>,
    pub hero_image_projects_field: Option<String>,
    pub hero_image_project_detail: Option<String>,
    pub hero_image_lab_detail: Option<String>,
    pub hero_image_news_detail: Option<String>,
    pub hero_image_team_detail: Option<String>,
    pub contact_hero_title: String,
    pub contact_hero_subtitle: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating the settings row.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSiteSettings {
    pub hero_title_home: String,
    pub hero_subtitle_home: String,
    pub about_text_intro: String,
    pub about_image: Option<String>,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub hero_image_home: Option<String>,
    pub hero_image_about: Option<String>,
    pub hero_image_labs: Option<String>,
    pub hero_image_contacts: Option<String>,
    pub hero_image_news: Option<String>,
    pub hero_image_all_projects: Option<String>,
    pub hero_image_projects_field: Option<String>,
    pub hero_image_project_detail: Option<String>,
    pub hero_image_lab_detail: Option<String>,
    pub hero_image_news_detail: Option<String>,
    pub hero_image_team_detail: Option<String>,
    pub contact_hero_title: String,
    pub contact_hero_subtitle: String,
}

/// DTO for updating the settings row.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSiteSettings {
    pub hero_title_home: Option<String>,
    pub hero_subtitle_home: Option<String>,
    pub about_text_intro: Option<String>,
    pub about_image: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub hero_image_home: Option<String>,
    pub hero_image_about: Option<String>,
    pub hero_image_labs: Option<String>,
    pub hero_image_contacts: Option<String>,
    pub hero_image_news: Option<String>,
    pub hero_image_all_projects: Option<String>,
    pub hero_image_projects_field: Option<String>,
    pub hero_image_project_detail: Option<String>,
    pub hero_image_lab_detail: Option<String>,
    pub hero_image_news_detail: Option<String>,
    pub hero_image_team_detail: Option<String>,
    pub contact_hero_title: Option<String>,
    pub contact_hero_subtitle: Option<String>,
}
