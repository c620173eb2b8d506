//! Form submission records: contact applications and mailing signups.
//!
//! Both tables are append-only; neither has an update DTO.

use institut_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `applications` table (contact form).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Application {
    pub id: DbId,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub topic: String,
    pub message: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a contact application. Fields arrive from the form
/// body; missing values are stored as empty strings.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateApplication {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub topic: String,
    pub message: String,
}

/// A row from the `mailings` table (newsletter signup).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Mailing {
    pub id: DbId,
    pub email: String,
    pub created_at: Timestamp,
}
