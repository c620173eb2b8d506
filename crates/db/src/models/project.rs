//! Project entity model and DTOs.
//!
//! The widest entity on the site: eight translated attribute triples plus
//! optional relations to a lab, a research field, and a leading team member.

use institut_core::types::{DateOnly, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name_ru: String,
    pub name_en: Option<String>,
    pub name_kk: Option<String>,
    pub description_ru: String,
    pub description_en: Option<String>,
    pub description_kk: Option<String>,
    pub content_ru: Option<String>,
    pub content_en: Option<String>,
    pub content_kk: Option<String>,
    pub application_area_ru: Option<String>,
    pub application_area_en: Option<String>,
    pub application_area_kk: Option<String>,
    pub superiority_ru: Option<String>,
    pub superiority_en: Option<String>,
    pub superiority_kk: Option<String>,
    pub client_name_ru: Option<String>,
    pub client_name_en: Option<String>,
    pub client_name_kk: Option<String>,
    pub technologies_ru: Option<String>,
    pub technologies_en: Option<String>,
    pub technologies_kk: Option<String>,
    pub author_ru: Option<String>,
    pub author_en: Option<String>,
    pub author_kk: Option<String>,
    pub lab_id: Option<DbId>,
    pub field_id: Option<DbId>,
    pub author_member_id: Option<DbId>,
    pub slug: String,
    pub date: DateOnly,
    pub project_url: Option<String>,
    pub year_completed: Option<String>,
    pub main_image: Option<String>,
    pub pdf_file: Option<String>,
    pub youtube_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
///
/// If `slug` is omitted it is derived from `name_ru`; if `date` is omitted
/// the database defaults it to today.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name_ru: String,
    pub name_en: Option<String>,
    pub name_kk: Option<String>,
    pub description_ru: String,
    pub description_en: Option<String>,
    pub description_kk: Option<String>,
    pub content_ru: Option<String>,
    pub content_en: Option<String>,
    pub content_kk: Option<String>,
    pub application_area_ru: Option<String>,
    pub application_area_en: Option<String>,
    pub application_area_kk: Option<String>,
    pub superiority_ru: Option<String>,
    pub superiority_en: Option<String>,
    pub superiority_kk: Option<String>,
    pub client_name_ru: Option<String>,
    pub client_name_en: Option<String>,
    pub client_name_kk: Option<String>,
    pub technologies_ru: Option<String>,
    pub technologies_en: Option<String>,
    pub technologies_kk: Option<String>,
    pub author_ru: Option<String>,
    pub author_en: Option<String>,
    pub author_kk: Option<String>,
    pub lab_id: Option<DbId>,
    pub field_id: Option<DbId>,
    pub author_member_id: Option<DbId>,
    pub slug: Option<String>,
    pub date: Option<DateOnly>,
    pub project_url: Option<String>,
    pub year_completed: Option<String>,
    pub main_image: Option<String>,
    pub pdf_file: Option<String>,
    pub youtube_url: Option<String>,
}

/// DTO for updating an existing project. All fields are optional; the slug
/// is never regenerated.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub name_ru: Option<String>,
    pub name_en: Option<String>,
    pub name_kk: Option<String>,
    pub description_ru: Option<String>,
    pub description_en: Option<String>,
    pub description_kk: Option<String>,
    pub content_ru: Option<String>,
    pub content_en: Option<String>,
    pub content_kk: Option<String>,
    pub application_area_ru: Option<String>,
    pub application_area_en: Option<String>,
    pub application_area_kk: Option<String>,
    pub superiority_ru: Option<String>,
    pub superiority_en: Option<String>,
    pub superiority_kk: Option<String>,
    pub client_name_ru: Option<String>,
    pub client_name_en: Option<String>,
    pub client_name_kk: Option<String>,
    pub technologies_ru: Option<String>,
    pub technologies_en: Option<String>,
    pub technologies_kk: Option<String>,
    pub author_ru: Option<String>,
    pub author_en: Option<String>,
    pub author_kk: Option<String>,
    pub lab_id: Option<DbId>,
    pub field_id: Option<DbId>,
    pub author_member_id: Option<DbId>,
    pub date: Option<DateOnly>,
    pub project_url: Option<String>,
    pub year_completed: Option<String>,
    pub main_image: Option<String>,
    pub pdf_file: Option<String>,
    pub youtube_url: Option<String>,
}
