//! Repository for the `site_settings` singleton.
//!
//! The table holds at most one row, pinned to id = 1. `create` is a no-op
//! when a row already exists; there is intentionally no delete method.

use sqlx::PgPool;

use crate::models::site_settings::{CreateSiteSettings, SiteSettings, UpdateSiteSettings};

const COLUMNS: &str = "id, hero_title_home, hero_subtitle_home, about_text_intro, \
    about_image, address, phone, email, \
    hero_image_home, hero_image_about, hero_image_labs, hero_image_contacts, \
    hero_image_news, hero_image_all_projects, hero_image_projects_field, \
    hero_image_project_detail, hero_image_lab_detail, hero_image_news_detail, \
    hero_image_team_detail, contact_hero_title, contact_hero_subtitle, \
    created_at, updated_at";

/// Provides access to the settings singleton.
pub struct SiteSettingsRepo;

impl SiteSettingsRepo {
    /// Fetch the settings row, if one has been created yet.
    pub async fn get(pool: &PgPool) -> Result<Option<SiteSettings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_settings WHERE id = 1");
        sqlx::query_as::<_, SiteSettings>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Create the settings row.
    ///
    /// Returns `None` (leaving the existing row unchanged) when a row
    /// already exists: the singleton invariant turns a second creation
    /// attempt into a no-op.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSiteSettings,
    ) -> Result<Option<SiteSettings>, sqlx::Error> {
        let query = format!(
            "INSERT INTO site_settings
                (id, hero_title_home, hero_subtitle_home, about_text_intro,
                 about_image, address, phone, email,
                 hero_image_home, hero_image_about, hero_image_labs,
                 hero_image_contacts, hero_image_news, hero_image_all_projects,
                 hero_image_projects_field, hero_image_project_detail,
                 hero_image_lab_detail, hero_image_news_detail,
                 hero_image_team_detail, contact_hero_title, contact_hero_subtitle)
             VALUES (1, $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                     $13, $14, $15, $16, $17, $18, $19, $20)
             ON CONFLICT (id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteSettings>(&query)
            .bind(&input.hero_title_home)
            .bind(&input.hero_subtitle_home)
            .bind(&input.about_text_intro)
            .bind(&input.about_image)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.hero_image_home)
            .bind(&input.hero_image_about)
            .bind(&input.hero_image_labs)
            .bind(&input.hero_image_contacts)
            .bind(&input.hero_image_news)
            .bind(&input.hero_image_all_projects)
            .bind(&input.hero_image_projects_field)
            .bind(&input.hero_image_project_detail)
            .bind(&input.hero_image_lab_detail)
            .bind(&input.hero_image_news_detail)
            .bind(&input.hero_image_team_detail)
            .bind(&input.contact_hero_title)
            .bind(&input.contact_hero_subtitle)
            .fetch_optional(pool)
            .await
    }

    /// Update the settings row. Only non-`None` fields are applied.
    ///
    /// Returns `None` if the row has not been created yet.
    pub async fn update(
        pool: &PgPool,
        input: &UpdateSiteSettings,
    ) -> Result<Option<SiteSettings>, sqlx::Error> {
        let query = format!(
            "UPDATE site_settings SET
                hero_title_home = COALESCE($1, hero_title_home),
                hero_subtitle_home = COALESCE($2, hero_subtitle_home),
                about_text_intro = COALESCE($3, about_text_intro),
                about_image = COALESCE($4, about_image),
                address = COALESCE($5, address),
                phone = COALESCE($6, phone),
                email = COALESCE($7, email),
                hero_image_home = COALESCE($8, hero_image_home),
                hero_image_about = COALESCE($9, hero_image_about),
                hero_image_labs = COALESCE($10, hero_image_labs),
                hero_image_contacts = COALESCE($11, hero_image_contacts),
                hero_image_news = COALESCE($12, hero_image_news),
                hero_image_all_projects = COALESCE($13, hero_image_all_projects),
                hero_image_projects_field = COALESCE($14, hero_image_projects_field),
                hero_image_project_detail = COALESCE($15, hero_image_project_detail),
                hero_image_lab_detail = COALESCE($16, hero_image_lab_detail),
                hero_image_news_detail = COALESCE($17, hero_image_news_detail),
                hero_image_team_detail = COALESCE($18, hero_image_team_detail),
                contact_hero_title = COALESCE($19, contact_hero_title),
                contact_hero_subtitle = COALESCE($20, contact_hero_subtitle),
                updated_at = NOW()
             WHERE id = 1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteSettings>(&query)
            .bind(&input.hero_title_home)
            .bind(&input.hero_subtitle_home)
            .bind(&input.about_text_intro)
            .bind(&input.about_image)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.hero_image_home)
            .bind(&input.hero_image_about)
            .bind(&input.hero_image_labs)
            .bind(&input.hero_image_contacts)
            .bind(&input.hero_image_news)
            .bind(&input.hero_image_all_projects)
            .bind(&input.hero_image_projects_field)
            .bind(&input.hero_image_project_detail)
            .bind(&input.hero_image_lab_detail)
            .bind(&input.hero_image_news_detail)
            .bind(&input.hero_image_team_detail)
            .bind(&input.contact_hero_title)
            .bind(&input.contact_hero_subtitle)
            .fetch_optional(pool)
            .await
    }
}
