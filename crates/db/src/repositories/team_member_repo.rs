//! Repository for the `team_members` table.

use institut_core::types::DbId;
use sqlx::PgPool;

use crate::models::team_member::{CreateTeamMember, TeamMember, UpdateTeamMember};

const COLUMNS: &str = "id, name_ru, name_en, name_kk, \
    position_ru, position_en, position_kk, \
    description_ru, description_en, description_kk, \
    photo, linkedin_url, twitter_url, is_featured, \
    orcid_id, scopus_id, publications_url, email, \
    created_at, updated_at";

/// Provides CRUD operations for team members.
pub struct TeamMemberRepo;

impl TeamMemberRepo {
    /// Insert a team member, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTeamMember,
    ) -> Result<TeamMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO team_members
                (name_ru, name_en, name_kk, position_ru, position_en,
                 position_kk, description_ru, description_en, description_kk,
                 photo, linkedin_url, twitter_url, is_featured,
                 orcid_id, scopus_id, publications_url, email)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                     COALESCE($13, FALSE), $14, $15, $16, $17)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(&input.name_ru)
            .bind(&input.name_en)
            .bind(&input.name_kk)
            .bind(&input.position_ru)
            .bind(&input.position_en)
            .bind(&input.position_kk)
            .bind(&input.description_ru)
            .bind(&input.description_en)
            .bind(&input.description_kk)
            .bind(&input.photo)
            .bind(&input.linkedin_url)
            .bind(&input.twitter_url)
            .bind(input.is_featured)
            .bind(&input.orcid_id)
            .bind(&input.scopus_id)
            .bind(&input.publications_url)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// List all team members ordered by Russian name.
    pub async fn list(pool: &PgPool) -> Result<Vec<TeamMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM team_members ORDER BY name_ru");
        sqlx::query_as::<_, TeamMember>(&query)
            .fetch_all(pool)
            .await
    }

    /// List only members featured on the about page.
    pub async fn list_featured(pool: &PgPool) -> Result<Vec<TeamMember>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM team_members WHERE is_featured ORDER BY name_ru"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a team member by their internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TeamMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM team_members WHERE id = $1");
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a team member. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTeamMember,
    ) -> Result<Option<TeamMember>, sqlx::Error> {
        let query = format!(
            "UPDATE team_members SET
                name_ru = COALESCE($2, name_ru),
                name_en = COALESCE($3, name_en),
                name_kk = COALESCE($4, name_kk),
                position_ru = COALESCE($5, position_ru),
                position_en = COALESCE($6, position_en),
                position_kk = COALESCE($7, position_kk),
                description_ru = COALESCE($8, description_ru),
                description_en = COALESCE($9, description_en),
                description_kk = COALESCE($10, description_kk),
                photo = COALESCE($11, photo),
                linkedin_url = COALESCE($12, linkedin_url),
                twitter_url = COALESCE($13, twitter_url),
                is_featured = COALESCE($14, is_featured),
                orcid_id = COALESCE($15, orcid_id),
                scopus_id = COALESCE($16, scopus_id),
                publications_url = COALESCE($17, publications_url),
                email = COALESCE($18, email),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(id)
            .bind(&input.name_ru)
            .bind(&input.name_en)
            .bind(&input.name_kk)
            .bind(&input.position_ru)
            .bind(&input.position_en)
            .bind(&input.position_kk)
            .bind(&input.description_ru)
            .bind(&input.description_en)
            .bind(&input.description_kk)
            .bind(&input.photo)
            .bind(&input.linkedin_url)
            .bind(&input.twitter_url)
            .bind(input.is_featured)
            .bind(&input.orcid_id)
            .bind(&input.scopus_id)
            .bind(&input.publications_url)
            .bind(&input.email)
            .fetch_optional(pool)
            .await
    }

    /// Delete a team member by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM team_members WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
