//! Handlers for the general pages: home, about, contacts, how-it-works.

use axum::extract::{Query, State};
use axum::Json;
use institut_core::lang::Lang;
use institut_db::models::site_settings::SiteSettings;
use institut_db::repositories::{
    AnnouncementRepo, FieldRepo, LabRepo, MissionItemRepo, NewsItemRepo, PartnerRepo, ProjectRepo,
    SiteSettingsRepo, SuccessFactRepo, TeamMemberRepo,
};
use serde::Serialize;

use crate::error::AppResult;
use crate::query::LangParams;
use crate::state::AppState;
use crate::views::{
    AnnouncementView, FieldView, LabView, MissionItemView, NewsCardView, PartnerView,
    ProjectCardView, SuccessFactView, TeamMemberView,
};

/// Data every page context carries: the settings singleton (may be absent
/// on a fresh database) and the lab list for the footer.
#[derive(Debug, Serialize)]
pub struct CommonContext {
    pub settings: Option<SiteSettings>,
    pub labs: Vec<LabView>,
}

/// Fetch the shared page context.
pub async fn common_context(state: &AppState, lang: Lang) -> AppResult<CommonContext> {
    let settings = SiteSettingsRepo::get(&state.pool).await?;
    let labs = LabRepo::list(&state.pool)
        .await?
        .iter()
        .map(|l| LabView::from_model(l, lang))
        .collect();
    Ok(CommonContext { settings, labs })
}

// ---------------------------------------------------------------------------
// Home page
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct IndexContext {
    #[serde(flatten)]
    pub common: CommonContext,
    pub all_fields: Vec<FieldView>,
    pub best_projects: Vec<ProjectCardView>,
    pub partners: Vec<PartnerView>,
    pub mission_items: Vec<MissionItemView>,
    pub latest_news: Vec<NewsCardView>,
    pub latest_announcements: Vec<AnnouncementView>,
}

/// GET /
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<LangParams>,
) -> AppResult<Json<IndexContext>> {
    let lang = params.lang;
    let common = common_context(&state, lang).await?;

    let all_fields = FieldRepo::list(&state.pool)
        .await?
        .iter()
        .map(|f| FieldView::from_model(f, lang))
        .collect();
    let best_projects = ProjectRepo::latest(&state.pool, 3)
        .await?
        .iter()
        .map(|p| ProjectCardView::from_model(p, lang))
        .collect();
    let partners = PartnerRepo::list(&state.pool)
        .await?
        .iter()
        .map(|p| PartnerView::from_model(p, lang))
        .collect();
    let mission_items = MissionItemRepo::list(&state.pool)
        .await?
        .iter()
        .map(|m| MissionItemView::from_model(m, lang))
        .collect();
    let latest_news = NewsItemRepo::latest(&state.pool, 2)
        .await?
        .iter()
        .map(|n| NewsCardView::from_model(n, lang))
        .collect();
    let latest_announcements = AnnouncementRepo::latest(&state.pool, 3)
        .await?
        .iter()
        .map(|a| AnnouncementView::from_model(a, lang))
        .collect();

    Ok(Json(IndexContext {
        common,
        all_fields,
        best_projects,
        partners,
        mission_items,
        latest_news,
        latest_announcements,
    }))
}

// ---------------------------------------------------------------------------
// About page
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct AboutContext {
    #[serde(flatten)]
    pub common: CommonContext,
    /// A random sample of up to six research fields.
    pub all_fields: Vec<FieldView>,
    pub team_members: Vec<TeamMemberView>,
    pub success_facts: Vec<SuccessFactView>,
    pub mission_items: Vec<MissionItemView>,
}

/// GET /about
pub async fn about(
    State(state): State<AppState>,
    Query(params): Query<LangParams>,
) -> AppResult<Json<AboutContext>> {
    let lang = params.lang;
    let common = common_context(&state, lang).await?;

    let all_fields = FieldRepo::sample(&state.pool, 6)
        .await?
        .iter()
        .map(|f| FieldView::from_model(f, lang))
        .collect();
    let team_members = TeamMemberRepo::list(&state.pool)
        .await?
        .iter()
        .map(|m| TeamMemberView::from_model(m, lang))
        .collect();
    let success_facts = SuccessFactRepo::list(&state.pool)
        .await?
        .iter()
        .map(|s| SuccessFactView::from_model(s, lang))
        .collect();
    let mission_items = MissionItemRepo::list(&state.pool)
        .await?
        .iter()
        .map(|m| MissionItemView::from_model(m, lang))
        .collect();

    Ok(Json(AboutContext {
        common,
        all_fields,
        team_members,
        success_facts,
        mission_items,
    }))
}

// ---------------------------------------------------------------------------
// Contacts and how-it-works pages
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct PageContext {
    #[serde(flatten)]
    pub common: CommonContext,
}

/// GET /contacts -- contact data lives in the settings singleton.
pub async fn contacts(
    State(state): State<AppState>,
    Query(params): Query<LangParams>,
) -> AppResult<Json<PageContext>> {
    let common = common_context(&state, params.lang).await?;
    Ok(Json(PageContext { common }))
}

/// GET /how
pub async fn how(
    State(state): State<AppState>,
    Query(params): Query<LangParams>,
) -> AppResult<Json<PageContext>> {
    let common = common_context(&state, params.lang).await?;
    Ok(Json(PageContext { common }))
}
