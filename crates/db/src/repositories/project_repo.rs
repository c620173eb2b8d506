//! Repository for the `projects` table.
//!
//! Public pages address projects by slug triples (lab slug, field slug,
//! project slug), so the lookup methods here join through the optional
//! relations rather than taking bare IDs.

use institut_core::slug::generate_slug;
use institut_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::models::team_member::TeamMember;

const COLUMNS: &str = "id, name_ru, name_en, name_kk, \
    description_ru, description_en, description_kk, \
    content_ru, content_en, content_kk, \
    application_area_ru, application_area_en, application_area_kk, \
    superiority_ru, superiority_en, superiority_kk, \
    client_name_ru, client_name_en, client_name_kk, \
    technologies_ru, technologies_en, technologies_kk, \
    author_ru, author_en, author_kk, \
    lab_id, field_id, author_member_id, slug, date, \
    project_url, year_completed, main_image, pdf_file, youtube_url, \
    created_at, updated_at";

/// Same column list, qualified for joined queries.
const P_COLUMNS: &str = "p.id, p.name_ru, p.name_en, p.name_kk, \
    p.description_ru, p.description_en, p.description_kk, \
    p.content_ru, p.content_en, p.content_kk, \
    p.application_area_ru, p.application_area_en, p.application_area_kk, \
    p.superiority_ru, p.superiority_en, p.superiority_kk, \
    p.client_name_ru, p.client_name_en, p.client_name_kk, \
    p.technologies_ru, p.technologies_en, p.technologies_kk, \
    p.author_ru, p.author_en, p.author_kk, \
    p.lab_id, p.field_id, p.author_member_id, p.slug, p.date, \
    p.project_url, p.year_completed, p.main_image, p.pdf_file, p.youtube_url, \
    p.created_at, p.updated_at";

/// Provides CRUD operations and slug-path lookups for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// If `slug` is `None`, it is derived from `name_ru`; if `date` is
    /// `None`, the database defaults it to today.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let slug = match &input.slug {
            Some(s) => s.clone(),
            None => generate_slug(&input.name_ru),
        };
        let query = format!(
            "INSERT INTO projects
                (name_ru, name_en, name_kk,
                 description_ru, description_en, description_kk,
                 content_ru, content_en, content_kk,
                 application_area_ru, application_area_en, application_area_kk,
                 superiority_ru, superiority_en, superiority_kk,
                 client_name_ru, client_name_en, client_name_kk,
                 technologies_ru, technologies_en, technologies_kk,
                 author_ru, author_en, author_kk,
                 lab_id, field_id, author_member_id, slug, date,
                 project_url, year_completed, main_image, pdf_file, youtube_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                     $13, $14, $15, $16, $17, $18, $19, $20, $21, $22, $23, $24,
                     $25, $26, $27, $28, COALESCE($29, CURRENT_DATE),
                     $30, $31, $32, $33, $34)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name_ru)
            .bind(&input.name_en)
            .bind(&input.name_kk)
            .bind(&input.description_ru)
            .bind(&input.description_en)
            .bind(&input.description_kk)
            .bind(&input.content_ru)
            .bind(&input.content_en)
            .bind(&input.content_kk)
            .bind(&input.application_area_ru)
            .bind(&input.application_area_en)
            .bind(&input.application_area_kk)
            .bind(&input.superiority_ru)
            .bind(&input.superiority_en)
            .bind(&input.superiority_kk)
            .bind(&input.client_name_ru)
            .bind(&input.client_name_en)
            .bind(&input.client_name_kk)
            .bind(&input.technologies_ru)
            .bind(&input.technologies_en)
            .bind(&input.technologies_kk)
            .bind(&input.author_ru)
            .bind(&input.author_en)
            .bind(&input.author_kk)
            .bind(input.lab_id)
            .bind(input.field_id)
            .bind(input.author_member_id)
            .bind(&slug)
            .bind(input.date)
            .bind(&input.project_url)
            .bind(&input.year_completed)
            .bind(&input.main_image)
            .bind(&input.pdf_file)
            .bind(&input.youtube_url)
            .fetch_one(pool)
            .await
    }

    /// List all projects, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY id DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// The `n` most recently created projects (home page showcase).
    pub async fn latest(pool: &PgPool, n: i64) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY id DESC LIMIT $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(n)
            .fetch_all(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the projects of one lab, addressed by the lab's slug.
    pub async fn list_by_lab_slug(
        pool: &PgPool,
        lab_slug: &str,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {P_COLUMNS} FROM projects p
             JOIN labs l ON l.id = p.lab_id
             WHERE l.slug = $1
             ORDER BY p.id DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(lab_slug)
            .fetch_all(pool)
            .await
    }

    /// List the projects of one lab filtered to one research field.
    pub async fn list_by_lab_and_field(
        pool: &PgPool,
        lab_slug: &str,
        field_slug: &str,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {P_COLUMNS} FROM projects p
             JOIN labs l ON l.id = p.lab_id
             JOIN fields f ON f.id = p.field_id
             WHERE l.slug = $1 AND f.slug = $2
             ORDER BY p.id DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(lab_slug)
            .bind(field_slug)
            .fetch_all(pool)
            .await
    }

    /// Find one project by its (lab slug, field slug, project slug) path.
    ///
    /// Returns `None` unless all three slugs match the same row.
    pub async fn find_detail(
        pool: &PgPool,
        lab_slug: &str,
        field_slug: &str,
        project_slug: &str,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {P_COLUMNS} FROM projects p
             JOIN labs l ON l.id = p.lab_id
             JOIN fields f ON f.id = p.field_id
             WHERE l.slug = $1 AND f.slug = $2 AND p.slug = $3"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(lab_slug)
            .bind(field_slug)
            .bind(project_slug)
            .fetch_optional(pool)
            .await
    }

    /// Other projects of the same lab, excluding one slug.
    pub async fn related(
        pool: &PgPool,
        lab_id: DbId,
        exclude_slug: &str,
        limit: i64,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE lab_id = $1 AND slug <> $2
             ORDER BY id DESC
             LIMIT $3"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(lab_id)
            .bind(exclude_slug)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields are applied; the slug is
    /// left untouched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name_ru = COALESCE($2, name_ru),
                name_en = COALESCE($3, name_en),
                name_kk = COALESCE($4, name_kk),
                description_ru = COALESCE($5, description_ru),
                description_en = COALESCE($6, description_en),
                description_kk = COALESCE($7, description_kk),
                content_ru = COALESCE($8, content_ru),
                content_en = COALESCE($9, content_en),
                content_kk = COALESCE($10, content_kk),
                application_area_ru = COALESCE($11, application_area_ru),
                application_area_en = COALESCE($12, application_area_en),
                application_area_kk = COALESCE($13, application_area_kk),
                superiority_ru = COALESCE($14, superiority_ru),
                superiority_en = COALESCE($15, superiority_en),
                superiority_kk = COALESCE($16, superiority_kk),
                client_name_ru = COALESCE($17, client_name_ru),
                client_name_en = COALESCE($18, client_name_en),
                client_name_kk = COALESCE($19, client_name_kk),
                technologies_ru = COALESCE($20, technologies_ru),
                technologies_en = COALESCE($21, technologies_en),
                technologies_kk = COALESCE($22, technologies_kk),
                author_ru = COALESCE($23, author_ru),
                author_en = COALESCE($24, author_en),
                author_kk = COALESCE($25, author_kk),
                lab_id = COALESCE($26, lab_id),
                field_id = COALESCE($27, field_id),
                author_member_id = COALESCE($28, author_member_id),
                date = COALESCE($29, date),
                project_url = COALESCE($30, project_url),
                year_completed = COALESCE($31, year_completed),
                main_image = COALESCE($32, main_image),
                pdf_file = COALESCE($33, pdf_file),
                youtube_url = COALESCE($34, youtube_url),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name_ru)
            .bind(&input.name_en)
            .bind(&input.name_kk)
            .bind(&input.description_ru)
            .bind(&input.description_en)
            .bind(&input.description_kk)
            .bind(&input.content_ru)
            .bind(&input.content_en)
            .bind(&input.content_kk)
            .bind(&input.application_area_ru)
            .bind(&input.application_area_en)
            .bind(&input.application_area_kk)
            .bind(&input.superiority_ru)
            .bind(&input.superiority_en)
            .bind(&input.superiority_kk)
            .bind(&input.client_name_ru)
            .bind(&input.client_name_en)
            .bind(&input.client_name_kk)
            .bind(&input.technologies_ru)
            .bind(&input.technologies_en)
            .bind(&input.technologies_kk)
            .bind(&input.author_ru)
            .bind(&input.author_en)
            .bind(&input.author_kk)
            .bind(input.lab_id)
            .bind(input.field_id)
            .bind(input.author_member_id)
            .bind(input.date)
            .bind(&input.project_url)
            .bind(&input.year_completed)
            .bind(&input.main_image)
            .bind(&input.pdf_file)
            .bind(&input.youtube_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Replace the project's team membership.
    pub async fn set_team(
        pool: &PgPool,
        project_id: DbId,
        member_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("DELETE FROM project_team WHERE project_id = $1")
            .bind(project_id)
            .execute(&mut *tx)
            .await?;
        for member_id in member_ids {
            sqlx::query(
                "INSERT INTO project_team (project_id, team_member_id) VALUES ($1, $2)",
            )
            .bind(project_id)
            .bind(member_id)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await
    }

    /// List the team members attached to a project.
    pub async fn list_team(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<TeamMember>, sqlx::Error> {
        sqlx::query_as::<_, TeamMember>(
            "SELECT t.id, t.name_ru, t.name_en, t.name_kk,
                    t.position_ru, t.position_en, t.position_kk,
                    t.description_ru, t.description_en, t.description_kk,
                    t.photo, t.linkedin_url, t.twitter_url, t.is_featured,
                    t.orcid_id, t.scopus_id, t.publications_url, t.email,
                    t.created_at, t.updated_at
             FROM team_members t
             JOIN project_team pt ON pt.team_member_id = t.id
             WHERE pt.project_id = $1
             ORDER BY t.name_ru",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }
}
