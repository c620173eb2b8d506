//! Admin handlers for the `/admin/projects` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use institut_assistant::FieldTriple;
use institut_core::slug::validate_slug;
use institut_core::types::DbId;
use institut_db::models::project::{CreateProject, Project, UpdateProject};
use institut_db::models::team_member::TeamMember;
use institut_db::repositories::ProjectRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::admin::autofill;
use crate::query::{matches_search, ProjectFilterParams};
use crate::state::AppState;

/// POST /api/v1/admin/projects
pub async fn create(
    State(state): State<AppState>,
    Json(mut input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    if let Some(slug) = &input.slug {
        validate_slug(slug)?;
    }

    let mut fields = [
        FieldTriple::new(Some(&input.name_ru), &mut input.name_en, &mut input.name_kk),
        FieldTriple::new(
            Some(&input.description_ru),
            &mut input.description_en,
            &mut input.description_kk,
        ),
        FieldTriple::new(
            input.content_ru.as_deref(),
            &mut input.content_en,
            &mut input.content_kk,
        ),
        FieldTriple::new(
            input.application_area_ru.as_deref(),
            &mut input.application_area_en,
            &mut input.application_area_kk,
        ),
        FieldTriple::new(
            input.superiority_ru.as_deref(),
            &mut input.superiority_en,
            &mut input.superiority_kk,
        ),
        FieldTriple::new(
            input.client_name_ru.as_deref(),
            &mut input.client_name_en,
            &mut input.client_name_kk,
        ),
        FieldTriple::new(
            input.technologies_ru.as_deref(),
            &mut input.technologies_en,
            &mut input.technologies_kk,
        ),
        FieldTriple::new(
            input.author_ru.as_deref(),
            &mut input.author_en,
            &mut input.author_kk,
        ),
    ];
    autofill(&state, &mut fields).await;

    let project = ProjectRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/admin/projects?q=&lab_id=&field_id=
///
/// Supports name search plus lab and research field filters.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProjectFilterParams>,
) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool)
        .await?
        .into_iter()
        .filter(|p| matches_search(&p.name_ru, &params.q))
        .filter(|p| params.lab_id.is_none() || p.lab_id == params.lab_id)
        .filter(|p| params.field_id.is_none() || p.field_id == params.field_id)
        .collect();
    Ok(Json(projects))
}

/// GET /api/v1/admin/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Project", id.to_string()))?;
    Ok(Json(project))
}

/// PUT /api/v1/admin/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    let mut fields = [
        FieldTriple::new(input.name_ru.as_deref(), &mut input.name_en, &mut input.name_kk),
        FieldTriple::new(
            input.description_ru.as_deref(),
            &mut input.description_en,
            &mut input.description_kk,
        ),
        FieldTriple::new(
            input.content_ru.as_deref(),
            &mut input.content_en,
            &mut input.content_kk,
        ),
        FieldTriple::new(
            input.application_area_ru.as_deref(),
            &mut input.application_area_en,
            &mut input.application_area_kk,
        ),
        FieldTriple::new(
            input.superiority_ru.as_deref(),
            &mut input.superiority_en,
            &mut input.superiority_kk,
        ),
        FieldTriple::new(
            input.client_name_ru.as_deref(),
            &mut input.client_name_en,
            &mut input.client_name_kk,
        ),
        FieldTriple::new(
            input.technologies_ru.as_deref(),
            &mut input.technologies_en,
            &mut input.technologies_kk,
        ),
        FieldTriple::new(
            input.author_ru.as_deref(),
            &mut input.author_en,
            &mut input.author_kk,
        ),
    ];
    autofill(&state, &mut fields).await;

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Project", id.to_string()))?;
    Ok(Json(project))
}

/// DELETE /api/v1/admin/projects/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Project", id.to_string()))
    }
}

/// Body for replacing a project's team membership.
#[derive(Debug, Deserialize)]
pub struct SetTeamBody {
    pub team_member_ids: Vec<DbId>,
}

/// PUT /api/v1/admin/projects/{id}/team
pub async fn set_team(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<SetTeamBody>,
) -> AppResult<Json<Vec<TeamMember>>> {
    ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Project", id.to_string()))?;

    ProjectRepo::set_team(&state.pool, id, &body.team_member_ids).await?;
    let team = ProjectRepo::list_team(&state.pool, id).await?;
    Ok(Json(team))
}

/// GET /api/v1/admin/projects/{id}/team
pub async fn list_team(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<TeamMember>>> {
    ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Project", id.to_string()))?;

    let team = ProjectRepo::list_team(&state.pool, id).await?;
    Ok(Json(team))
}
