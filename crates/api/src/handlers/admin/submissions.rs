//! Admin handlers for form submissions (read and prune only).
//!
//! Applications and mailing signups are append-only records: there are no
//! create or update endpoints here, only listing and removal.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use institut_core::types::DbId;
use institut_db::models::submission::{Application, Mailing};
use institut_db::repositories::{ApplicationRepo, MailingRepo};

use crate::error::{AppError, AppResult};
use crate::query::{matches_search, SearchParams};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Applications
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/applications?q=
pub async fn list_applications(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Application>>> {
    let applications = ApplicationRepo::list(&state.pool)
        .await?
        .into_iter()
        .filter(|a| {
            matches_search(&a.full_name, &params.q) || matches_search(&a.topic, &params.q)
        })
        .collect();
    Ok(Json(applications))
}

/// GET /api/v1/admin/applications/{id}
pub async fn get_application(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Application>> {
    let application = ApplicationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Application", id.to_string()))?;
    Ok(Json(application))
}

/// DELETE /api/v1/admin/applications/{id}
pub async fn delete_application(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ApplicationRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Application", id.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Mailing signups
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/mailings?q=
pub async fn list_mailings(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Mailing>>> {
    let mailings = MailingRepo::list(&state.pool)
        .await?
        .into_iter()
        .filter(|m| matches_search(&m.email, &params.q))
        .collect();
    Ok(Json(mailings))
}

/// DELETE /api/v1/admin/mailings/{id}
pub async fn delete_mailing(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = MailingRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Mailing", id.to_string()))
    }
}
