//! Admin handlers for the `/admin/fields` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use institut_assistant::FieldTriple;
use institut_core::slug::validate_slug;
use institut_core::types::DbId;
use institut_db::models::field::{CreateField, Field, UpdateField};
use institut_db::repositories::FieldRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::admin::autofill;
use crate::query::{matches_search, SearchParams};
use crate::state::AppState;

/// POST /api/v1/admin/fields
pub async fn create(
    State(state): State<AppState>,
    Json(mut input): Json<CreateField>,
) -> AppResult<(StatusCode, Json<Field>)> {
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

    let field = FieldRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(field)))
}

/// GET /api/v1/admin/fields?q=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Field>>> {
    let fields = FieldRepo::list(&state.pool)
        .await?
        .into_iter()
        .filter(|f| matches_search(&f.name_ru, &params.q))
        .collect();
    Ok(Json(fields))
}

/// GET /api/v1/admin/fields/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Field>> {
    let field = FieldRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Field", id.to_string()))?;
    Ok(Json(field))
}

/// PUT /api/v1/admin/fields/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateField>,
) -> AppResult<Json<Field>> {
    let mut fields = [
        FieldTriple::new(input.name_ru.as_deref(), &mut input.name_en, &mut input.name_kk),
        FieldTriple::new(
            input.description_ru.as_deref(),
            &mut input.description_en,
            &mut input.description_kk,
        ),
    ];
    autofill(&state, &mut fields).await;

    let field = FieldRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Field", id.to_string()))?;
    Ok(Json(field))
}

/// DELETE /api/v1/admin/fields/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = FieldRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Field", id.to_string()))
    }
}
