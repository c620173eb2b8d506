//! Handlers for the lab and project pages.
//!
//! Public URLs address labs, fields, and projects by slug; a missing slug
//! (or a slug combination that doesn't match a single project) is a 404.

use axum::extract::{Path, Query, State};
use axum::Json;
use institut_db::repositories::{FieldRepo, LabRepo, ProjectRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::pages::{common_context, CommonContext};
use crate::query::LangParams;
use crate::state::AppState;
use crate::views::{FieldView, LabView, ProjectCardView, ProjectDetailView};

#[derive(Debug, Serialize)]
pub struct LabListContext {
    #[serde(flatten)]
    pub common: CommonContext,
}

/// GET /labs -- the lab list itself ships in the common context.
pub async fn lab_list(
    State(state): State<AppState>,
    Query(params): Query<LangParams>,
) -> AppResult<Json<LabListContext>> {
    let common = common_context(&state, params.lang).await?;
    Ok(Json(LabListContext { common }))
}

#[derive(Debug, Serialize)]
pub struct LabDetailContext {
    #[serde(flatten)]
    pub common: CommonContext,
    pub lab: LabView,
    pub lab_fields: Vec<FieldView>,
}

/// GET /labs/{lab_slug}
pub async fn lab_detail(
    State(state): State<AppState>,
    Path(lab_slug): Path<String>,
    Query(params): Query<LangParams>,
) -> AppResult<Json<LabDetailContext>> {
    let lang = params.lang;
    let common = common_context(&state, lang).await?;

    let lab = LabRepo::find_by_slug(&state.pool, &lab_slug)
        .await?
        .ok_or_else(|| AppError::not_found("Lab", &lab_slug))?;
    let lab_fields = LabRepo::list_fields(&state.pool, lab.id)
        .await?
        .iter()
        .map(|f| FieldView::from_model(f, lang))
        .collect();

    Ok(Json(LabDetailContext {
        common,
        lab: LabView::from_model(&lab, lang),
        lab_fields,
    }))
}

#[derive(Debug, Serialize)]
pub struct LabProjectsContext {
    #[serde(flatten)]
    pub common: CommonContext,
    pub lab: LabView,
    pub projects: Vec<ProjectCardView>,
}

/// GET /labs/{lab_slug}/all -- every project of one lab.
pub async fn all_projects(
    State(state): State<AppState>,
    Path(lab_slug): Path<String>,
    Query(params): Query<LangParams>,
) -> AppResult<Json<LabProjectsContext>> {
    let lang = params.lang;
    let common = common_context(&state, lang).await?;

    let lab = LabRepo::find_by_slug(&state.pool, &lab_slug)
        .await?
        .ok_or_else(|| AppError::not_found("Lab", &lab_slug))?;
    let projects = ProjectRepo::list_by_lab_slug(&state.pool, &lab.slug)
        .await?
        .iter()
        .map(|p| ProjectCardView::from_model(p, lang))
        .collect();

    Ok(Json(LabProjectsContext {
        common,
        lab: LabView::from_model(&lab, lang),
        projects,
    }))
}

#[derive(Debug, Serialize)]
pub struct FieldProjectsContext {
    #[serde(flatten)]
    pub common: CommonContext,
    pub lab: LabView,
    pub field: FieldView,
    pub projects: Vec<ProjectCardView>,
}

/// GET /labs/{lab_slug}/{field_slug} -- one lab's projects in one field.
pub async fn projects_by_field(
    State(state): State<AppState>,
    Path((lab_slug, field_slug)): Path<(String, String)>,
    Query(params): Query<LangParams>,
) -> AppResult<Json<FieldProjectsContext>> {
    let lang = params.lang;
    let common = common_context(&state, lang).await?;

    let lab = LabRepo::find_by_slug(&state.pool, &lab_slug)
        .await?
        .ok_or_else(|| AppError::not_found("Lab", &lab_slug))?;
    let field = FieldRepo::find_by_slug(&state.pool, &field_slug)
        .await?
        .ok_or_else(|| AppError::not_found("Field", &field_slug))?;
    let projects = ProjectRepo::list_by_lab_and_field(&state.pool, &lab.slug, &field.slug)
        .await?
        .iter()
        .map(|p| ProjectCardView::from_model(p, lang))
        .collect();

    Ok(Json(FieldProjectsContext {
        common,
        lab: LabView::from_model(&lab, lang),
        field: FieldView::from_model(&field, lang),
        projects,
    }))
}

#[derive(Debug, Serialize)]
pub struct ProjectDetailContext {
    #[serde(flatten)]
    pub common: CommonContext,
    pub project: ProjectDetailView,
    pub related_projects: Vec<ProjectCardView>,
}

/// GET /how/{lab_slug}/{field_slug}/{project_slug}
///
/// All three slugs must belong to the same project row.
pub async fn project_detail(
    State(state): State<AppState>,
    Path((lab_slug, field_slug, project_slug)): Path<(String, String, String)>,
    Query(params): Query<LangParams>,
) -> AppResult<Json<ProjectDetailContext>> {
    let lang = params.lang;
    let common = common_context(&state, lang).await?;

    let project = ProjectRepo::find_detail(&state.pool, &lab_slug, &field_slug, &project_slug)
        .await?
        .ok_or_else(|| AppError::not_found("Project", &project_slug))?;

    let related_projects = match project.lab_id {
        Some(lab_id) => ProjectRepo::related(&state.pool, lab_id, &project.slug, 4)
            .await?
            .iter()
            .map(|p| ProjectCardView::from_model(p, lang))
            .collect(),
        None => Vec::new(),
    };
    let team = ProjectRepo::list_team(&state.pool, project.id).await?;

    Ok(Json(ProjectDetailContext {
        common,
        project: ProjectDetailView::from_model(&project, &team, lang),
        related_projects,
    }))
}
