//! Announcement entity model and DTOs.

use institut_core::types::{DateOnly, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `announcements` table. Ordered by event date.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Announcement {
    pub id: DbId,
    pub title_ru: String,
    pub title_en: Option<String>,
    pub title_kk: Option<String>,
    pub event_date: DateOnly,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an announcement.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAnnouncement {
    pub title_ru: String,
    pub title_en: Option<String>,
    pub title_kk: Option<String>,
    pub event_date: Option<DateOnly>,
}

/// DTO for updating an announcement.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAnnouncement {
    pub title_ru: Option<String>,
    pub title_en: Option<String>,
    pub title_kk: Option<String>,
    pub event_date: Option<DateOnly>,
}
