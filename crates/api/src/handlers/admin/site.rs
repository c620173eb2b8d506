//! Admin handlers for site-wide content: the settings singleton, mission
//! items, success facts, and partners.
//!
//! The settings singleton is guarded: creation is rejected once an
//! instance exists, deletion is always denied.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use institut_assistant::FieldTriple;
use institut_core::error::CoreError;
use institut_core::types::DbId;
use institut_db::models::mission_item::{CreateMissionItem, MissionItem, UpdateMissionItem};
use institut_db::models::partner::{CreatePartner, Partner, UpdatePartner};
use institut_db::models::site_settings::{
    CreateSiteSettings, SiteSettings, UpdateSiteSettings,
};
use institut_db::models::success_fact::{CreateSuccessFact, SuccessFact, UpdateSuccessFact};
use institut_db::repositories::{
    MissionItemRepo, PartnerRepo, SiteSettingsRepo, SuccessFactRepo,
};

use crate::error::{AppError, AppResult};
use crate::handlers::admin::autofill;
use crate::query::{matches_search, SearchParams};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Site settings singleton
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/settings
pub async fn get_settings(State(state): State<AppState>) -> AppResult<Json<SiteSettings>> {
    let settings = SiteSettingsRepo::get(&state.pool)
        .await?
        .ok_or_else(|| AppError::not_found("SiteSettings", "singleton"))?;
    Ok(Json(settings))
}

/// POST /api/v1/admin/settings
///
/// Creates the settings row. Once one exists, further creation attempts
/// are rejected and the existing row stays unchanged.
pub async fn create_settings(
    State(state): State<AppState>,
    Json(input): Json<CreateSiteSettings>,
) -> AppResult<(StatusCode, Json<SiteSettings>)> {
    match SiteSettingsRepo::create(&state.pool, &input).await? {
        Some(settings) => Ok((StatusCode::CREATED, Json(settings))),
        None => Err(AppError::Core(CoreError::Conflict(
            "Site settings already exist".into(),
        ))),
    }
}

/// PUT /api/v1/admin/settings
pub async fn update_settings(
    State(state): State<AppState>,
    Json(input): Json<UpdateSiteSettings>,
) -> AppResult<Json<SiteSettings>> {
    let settings = SiteSettingsRepo::update(&state.pool, &input)
        .await?
        .ok_or_else(|| AppError::not_found("SiteSettings", "singleton"))?;
    Ok(Json(settings))
}

/// DELETE /api/v1/admin/settings -- always denied.
pub async fn delete_settings(State(_state): State<AppState>) -> AppResult<StatusCode> {
    Err(AppError::Core(CoreError::Forbidden(
        "Site settings cannot be deleted".into(),
    )))
}

// ---------------------------------------------------------------------------
// Mission items
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/mission-items
pub async fn create_mission_item(
    State(state): State<AppState>,
    Json(mut input): Json<CreateMissionItem>,
) -> AppResult<(StatusCode, Json<MissionItem>)> {
    let mut fields = [
        FieldTriple::new(Some(&input.name_ru), &mut input.name_en, &mut input.name_kk),
        FieldTriple::new(
            Some(&input.description_ru),
            &mut input.description_en,
            &mut input.description_kk,
        ),
    ];
    autofill(&state, &mut fields).await;

    let item = MissionItemRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/v1/admin/mission-items?q=
pub async fn list_mission_items(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<MissionItem>>> {
    let items = MissionItemRepo::list(&state.pool)
        .await?
        .into_iter()
        .filter(|m| matches_search(&m.name_ru, &params.q))
        .collect();
    Ok(Json(items))
}

/// GET /api/v1/admin/mission-items/{id}
pub async fn get_mission_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MissionItem>> {
    let item = MissionItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("MissionItem", id.to_string()))?;
    Ok(Json(item))
}

/// PUT /api/v1/admin/mission-items/{id}
pub async fn update_mission_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateMissionItem>,
) -> AppResult<Json<MissionItem>> {
    let mut fields = [
        FieldTriple::new(input.name_ru.as_deref(), &mut input.name_en, &mut input.name_kk),
        FieldTriple::new(
            input.description_ru.as_deref(),
            &mut input.description_en,
            &mut input.description_kk,
        ),
    ];
    autofill(&state, &mut fields).await;

    let item = MissionItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("MissionItem", id.to_string()))?;
    Ok(Json(item))
}

/// DELETE /api/v1/admin/mission-items/{id}
pub async fn delete_mission_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = MissionItemRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("MissionItem", id.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Success facts
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/success-facts
pub async fn create_success_fact(
    State(state): State<AppState>,
    Json(mut input): Json<CreateSuccessFact>,
) -> AppResult<(StatusCode, Json<SuccessFact>)> {
    let mut fields = [
        FieldTriple::new(Some(&input.title_ru), &mut input.title_en, &mut input.title_kk),
        FieldTriple::new(Some(&input.value_ru), &mut input.value_en, &mut input.value_kk),
        FieldTriple::new(
            input.long_description_ru.as_deref(),
            &mut input.long_description_en,
            &mut input.long_description_kk,
        ),
    ];
    autofill(&state, &mut fields).await;

    let fact = SuccessFactRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(fact)))
}

/// GET /api/v1/admin/success-facts?q=
pub async fn list_success_facts(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<SuccessFact>>> {
    let facts = SuccessFactRepo::list(&state.pool)
        .await?
        .into_iter()
        .filter(|f| matches_search(&f.title_ru, &params.q))
        .collect();
    Ok(Json(facts))
}

/// GET /api/v1/admin/success-facts/{id}
pub async fn get_success_fact(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessFact>> {
    let fact = SuccessFactRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("SuccessFact", id.to_string()))?;
    Ok(Json(fact))
}

/// PUT /api/v1/admin/success-facts/{id}
pub async fn update_success_fact(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateSuccessFact>,
) -> AppResult<Json<SuccessFact>> {
    let mut fields = [
        FieldTriple::new(input.title_ru.as_deref(), &mut input.title_en, &mut input.title_kk),
        FieldTriple::new(input.value_ru.as_deref(), &mut input.value_en, &mut input.value_kk),
        FieldTriple::new(
            input.long_description_ru.as_deref(),
            &mut input.long_description_en,
            &mut input.long_description_kk,
        ),
    ];
    autofill(&state, &mut fields).await;

    let fact = SuccessFactRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("SuccessFact", id.to_string()))?;
    Ok(Json(fact))
}

/// DELETE /api/v1/admin/success-facts/{id}
pub async fn delete_success_fact(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = SuccessFactRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("SuccessFact", id.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Partners
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/partners
pub async fn create_partner(
    State(state): State<AppState>,
    Json(mut input): Json<CreatePartner>,
) -> AppResult<(StatusCode, Json<Partner>)> {
    let mut fields = [FieldTriple::new(
        Some(&input.name_ru),
        &mut input.name_en,
        &mut input.name_kk,
    )];
    autofill(&state, &mut fields).await;

    let partner = PartnerRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(partner)))
}

/// GET /api/v1/admin/partners?q=
pub async fn list_partners(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Partner>>> {
    let partners = PartnerRepo::list(&state.pool)
        .await?
        .into_iter()
        .filter(|p| matches_search(&p.name_ru, &params.q))
        .collect();
    Ok(Json(partners))
}

/// GET /api/v1/admin/partners/{id}
pub async fn get_partner(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Partner>> {
    let partner = PartnerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Partner", id.to_string()))?;
    Ok(Json(partner))
}

/// PUT /api/v1/admin/partners/{id}
pub async fn update_partner(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdatePartner>,
) -> AppResult<Json<Partner>> {
    let mut fields = [FieldTriple::new(
        input.name_ru.as_deref(),
        &mut input.name_en,
        &mut input.name_kk,
    )];
    autofill(&state, &mut fields).await;

    let partner = PartnerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Partner", id.to_string()))?;
    Ok(Json(partner))
}

/// DELETE /api/v1/admin/partners/{id}
pub async fn delete_partner(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PartnerRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Partner", id.to_string()))
    }
}
