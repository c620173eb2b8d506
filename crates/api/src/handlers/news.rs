//! Handlers for the news pages.

use axum::extract::{Path, Query, State};
use axum::Json;
use institut_db::repositories::NewsItemRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::pages::{common_context, CommonContext};
use crate::query::LangParams;
use crate::state::AppState;
use crate::views::{NewsCardView, NewsDetailView};

#[derive(Debug, Serialize)]
pub struct NewsListContext {
    #[serde(flatten)]
    pub common: CommonContext,
    pub news_list: Vec<NewsCardView>,
}

/// GET /news -- all news, newest first.
pub async fn news_list(
    State(state): State<AppState>,
    Query(params): Query<LangParams>,
) -> AppResult<Json<NewsListContext>> {
    let lang = params.lang;
    let common = common_context(&state, lang).await?;

    let news_list = NewsItemRepo::list(&state.pool)
        .await?
        .iter()
        .map(|n| NewsCardView::from_model(n, lang))
        .collect();

    Ok(Json(NewsListContext { common, news_list }))
}

#[derive(Debug, Serialize)]
pub struct NewsDetailContext {
    #[serde(flatten)]
    pub common: CommonContext,
    pub news_item: NewsDetailView,
}

/// GET /news/{news_slug}
pub async fn news_detail(
    State(state): State<AppState>,
    Path(news_slug): Path<String>,
    Query(params): Query<LangParams>,
) -> AppResult<Json<NewsDetailContext>> {
    let lang = params.lang;
    let common = common_context(&state, lang).await?;

    let news_item = NewsItemRepo::find_by_slug(&state.pool, &news_slug)
        .await?
        .ok_or_else(|| AppError::not_found("NewsItem", &news_slug))?;

    Ok(Json(NewsDetailContext {
        common,
        news_item: NewsDetailView::from_model(&news_item, lang),
    }))
}
