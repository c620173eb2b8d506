//! Admin handlers for the `/admin/labs` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use institut_assistant::FieldTriple;
use institut_core::slug::validate_slug;
use institut_core::types::DbId;
use institut_db::models::field::Field;
use institut_db::models::lab::{CreateLab, Lab, UpdateLab};
use institut_db::repositories::LabRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::admin::autofill;
use crate::query::{matches_search, SearchParams};
use crate::state::AppState;

/// POST /api/v1/admin/labs
///
/// Runs the auto-translation hook over the translatable fields, then
/// derives the slug from `name_ru` unless one was provided.
pub async fn create(
    State(state): State<AppState>,
    Json(mut input): Json<CreateLab>,
) -> AppResult<(StatusCode, Json<Lab>)> {
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
    ];
    autofill(&state, &mut fields).await;

    let lab = LabRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(lab)))
}

/// GET /api/v1/admin/labs?q=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Lab>>> {
    let labs = LabRepo::list(&state.pool)
        .await?
        .into_iter()
        .filter(|l| matches_search(&l.name_ru, &params.q))
        .collect();
    Ok(Json(labs))
}

/// GET /api/v1/admin/labs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Lab>> {
    let lab = LabRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Lab", id.to_string()))?;
    Ok(Json(lab))
}

/// PUT /api/v1/admin/labs/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateLab>,
) -> AppResult<Json<Lab>> {
    let mut fields = [
        FieldTriple::new(input.name_ru.as_deref(), &mut input.name_en, &mut input.name_kk),
        FieldTriple::new(
            input.description_ru.as_deref(),
            &mut input.description_en,
            &mut input.description_kk,
        ),
    ];
    autofill(&state, &mut fields).await;

    let lab = LabRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Lab", id.to_string()))?;
    Ok(Json(lab))
}

/// DELETE /api/v1/admin/labs/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = LabRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Lab", id.to_string()))
    }
}

/// Body for replacing a lab's research field membership.
#[derive(Debug, Deserialize)]
pub struct SetFieldsBody {
    pub field_ids: Vec<DbId>,
}

/// PUT /api/v1/admin/labs/{id}/fields
pub async fn set_fields(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<SetFieldsBody>,
) -> AppResult<Json<Vec<Field>>> {
    // 404 before touching the join table.
    LabRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Lab", id.to_string()))?;

    LabRepo::set_fields(&state.pool, id, &body.field_ids).await?;
    let fields = LabRepo::list_fields(&state.pool, id).await?;
    Ok(Json(fields))
}

/// GET /api/v1/admin/labs/{id}/fields
pub async fn list_fields(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Field>>> {
    LabRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Lab", id.to_string()))?;

    let fields = LabRepo::list_fields(&state.pool, id).await?;
    Ok(Json(fields))
}
