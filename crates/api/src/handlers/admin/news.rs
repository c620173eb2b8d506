//! Admin handlers for news items and announcements.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use institut_assistant::FieldTriple;
use institut_core::slug::validate_slug;
use institut_core::types::DbId;
use institut_db::models::announcement::{Announcement, CreateAnnouncement, UpdateAnnouncement};
use institut_db::models::news_item::{CreateNewsItem, NewsItem, UpdateNewsItem};
use institut_db::repositories::{AnnouncementRepo, NewsItemRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::admin::autofill;
use crate::query::{matches_search, SearchParams};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// News items
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/news
pub async fn create_news(
    State(state): State<AppState>,
    Json(mut input): Json<CreateNewsItem>,
) -> AppResult<(StatusCode, Json<NewsItem>)> {
    if let Some(slug) = &input.slug {
        validate_slug(slug)?;
    }

    let mut fields = [
        FieldTriple::new(Some(&input.title_ru), &mut input.title_en, &mut input.title_kk),
        FieldTriple::new(
            Some(&input.content_ru),
            &mut input.content_en,
            &mut input.content_kk,
        ),
        FieldTriple::new(
            input.excerpt_ru.as_deref(),
            &mut input.excerpt_en,
            &mut input.excerpt_kk,
        ),
    ];
    autofill(&state, &mut fields).await;

    let item = NewsItemRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/v1/admin/news?q=
pub async fn list_news(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<NewsItem>>> {
    let items = NewsItemRepo::list(&state.pool)
        .await?
        .into_iter()
        .filter(|n| matches_search(&n.title_ru, &params.q))
        .collect();
    Ok(Json(items))
}

/// GET /api/v1/admin/news/{id}
pub async fn get_news(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<NewsItem>> {
    let item = NewsItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("NewsItem", id.to_string()))?;
    Ok(Json(item))
}

/// PUT /api/v1/admin/news/{id}
pub async fn update_news(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateNewsItem>,
) -> AppResult<Json<NewsItem>> {
    let mut fields = [
        FieldTriple::new(input.title_ru.as_deref(), &mut input.title_en, &mut input.title_kk),
        FieldTriple::new(
            input.content_ru.as_deref(),
            &mut input.content_en,
            &mut input.content_kk,
        ),
        FieldTriple::new(
            input.excerpt_ru.as_deref(),
            &mut input.excerpt_en,
            &mut input.excerpt_kk,
        ),
    ];
    autofill(&state, &mut fields).await;

    let item = NewsItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("NewsItem", id.to_string()))?;
    Ok(Json(item))
}

/// DELETE /api/v1/admin/news/{id}
pub async fn delete_news(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = NewsItemRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("NewsItem", id.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Announcements
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/announcements
pub async fn create_announcement(
    State(state): State<AppState>,
    Json(mut input): Json<CreateAnnouncement>,
) -> AppResult<(StatusCode, Json<Announcement>)> {
    let mut fields = [FieldTriple::new(
        Some(&input.title_ru),
        &mut input.title_en,
        &mut input.title_kk,
    )];
    autofill(&state, &mut fields).await;

    let item = AnnouncementRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/v1/admin/announcements?q=
pub async fn list_announcements(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Announcement>>> {
    let items = AnnouncementRepo::list(&state.pool)
        .await?
        .into_iter()
        .filter(|a| matches_search(&a.title_ru, &params.q))
        .collect();
    Ok(Json(items))
}

/// GET /api/v1/admin/announcements/{id}
pub async fn get_announcement(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Announcement>> {
    let item = AnnouncementRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Announcement", id.to_string()))?;
    Ok(Json(item))
}

/// PUT /api/v1/admin/announcements/{id}
pub async fn update_announcement(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateAnnouncement>,
) -> AppResult<Json<Announcement>> {
    let mut fields = [FieldTriple::new(
        input.title_ru.as_deref(),
        &mut input.title_en,
        &mut input.title_kk,
    )];
    autofill(&state, &mut fields).await;

    let item = AnnouncementRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Announcement", id.to_string()))?;
    Ok(Json(item))
}

/// DELETE /api/v1/admin/announcements/{id}
pub async fn delete_announcement(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = AnnouncementRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Announcement", id.to_string()))
    }
}
