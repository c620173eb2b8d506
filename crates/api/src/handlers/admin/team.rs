//! Admin handlers for team members and institute leadership.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use institut_assistant::FieldTriple;
use institut_core::types::DbId;
use institut_db::models::management::{CreateManagement, Management, UpdateManagement};
use institut_db::models::team_member::{CreateTeamMember, TeamMember, UpdateTeamMember};
use institut_db::repositories::{ManagementRepo, TeamMemberRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::admin::autofill;
use crate::query::{matches_search, SearchParams};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Team members
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/team-members
pub async fn create_member(
    State(state): State<AppState>,
    Json(mut input): Json<CreateTeamMember>,
) -> AppResult<(StatusCode, Json<TeamMember>)> {
    let mut fields = [
        FieldTriple::new(Some(&input.name_ru), &mut input.name_en, &mut input.name_kk),
        FieldTriple::new(
            Some(&input.position_ru),
            &mut input.position_en,
            &mut input.position_kk,
        ),
        FieldTriple::new(
            Some(&input.description_ru),
            &mut input.description_en,
            &mut input.description_kk,
        ),
    ];
    autofill(&state, &mut fields).await;

    let member = TeamMemberRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// GET /api/v1/admin/team-members?q=
pub async fn list_members(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<TeamMember>>> {
    let members = TeamMemberRepo::list(&state.pool)
        .await?
        .into_iter()
        .filter(|m| {
            matches_search(&m.name_ru, &params.q) || matches_search(&m.position_ru, &params.q)
        })
        .collect();
    Ok(Json(members))
}

/// GET /api/v1/admin/team-members/{id}
pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<TeamMember>> {
    let member = TeamMemberRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("TeamMember", id.to_string()))?;
    Ok(Json(member))
}

/// PUT /api/v1/admin/team-members/{id}
pub async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateTeamMember>,
) -> AppResult<Json<TeamMember>> {
    let mut fields = [
        FieldTriple::new(input.name_ru.as_deref(), &mut input.name_en, &mut input.name_kk),
        FieldTriple::new(
            input.position_ru.as_deref(),
            &mut input.position_en,
            &mut input.position_kk,
        ),
        FieldTriple::new(
            input.description_ru.as_deref(),
            &mut input.description_en,
            &mut input.description_kk,
        ),
    ];
    autofill(&state, &mut fields).await;

    let member = TeamMemberRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("TeamMember", id.to_string()))?;
    Ok(Json(member))
}

/// DELETE /api/v1/admin/team-members/{id}
pub async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TeamMemberRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("TeamMember", id.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Management
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/management
pub async fn create_management(
    State(state): State<AppState>,
    Json(mut input): Json<CreateManagement>,
) -> AppResult<(StatusCode, Json<Management>)> {
    let mut fields = [
        FieldTriple::new(Some(&input.name_ru), &mut input.name_en, &mut input.name_kk),
        FieldTriple::new(
            Some(&input.position_ru),
            &mut input.position_en,
            &mut input.position_kk,
        ),
        FieldTriple::new(
            input.biography_ru.as_deref(),
            &mut input.biography_en,
            &mut input.biography_kk,
        ),
    ];
    autofill(&state, &mut fields).await;

    let entry = ManagementRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /api/v1/admin/management?q=
pub async fn list_management(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Management>>> {
    let entries = ManagementRepo::list(&state.pool)
        .await?
        .into_iter()
        .filter(|m| matches_search(&m.name_ru, &params.q))
        .collect();
    Ok(Json(entries))
}

/// GET /api/v1/admin/management/{id}
pub async fn get_management(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Management>> {
    let entry = ManagementRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Management", id.to_string()))?;
    Ok(Json(entry))
}

/// PUT /api/v1/admin/management/{id}
pub async fn update_management(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateManagement>,
) -> AppResult<Json<Management>> {
    let mut fields = [
        FieldTriple::new(input.name_ru.as_deref(), &mut input.name_en, &mut input.name_kk),
        FieldTriple::new(
            input.position_ru.as_deref(),
            &mut input.position_en,
            &mut input.position_kk,
        ),
        FieldTriple::new(
            input.biography_ru.as_deref(),
            &mut input.biography_en,
            &mut input.biography_kk,
        ),
    ];
    autofill(&state, &mut fields).await;

    let entry = ManagementRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Management", id.to_string()))?;
    Ok(Json(entry))
}

/// DELETE /api/v1/admin/management/{id}
pub async fn delete_management(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ManagementRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Management", id.to_string()))
    }
}
