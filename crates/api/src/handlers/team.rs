//! Handlers for team member profile pages.

use axum::extract::{Path, Query, State};
use axum::Json;
use institut_core::types::DbId;
use institut_db::repositories::TeamMemberRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::pages::{common_context, CommonContext};
use crate::query::LangParams;
use crate::state::AppState;
use crate::views::TeamMemberView;

#[derive(Debug, Serialize)]
pub struct TeamMemberContext {
    #[serde(flatten)]
    pub common: CommonContext,
    pub member: TeamMemberView,
}

/// GET /team/{id}
pub async fn team_member_detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<LangParams>,
) -> AppResult<Json<TeamMemberContext>> {
    let lang = params.lang;
    let common = common_context(&state, lang).await?;

    let member = TeamMemberRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("TeamMember", id.to_string()))?;

    Ok(Json(TeamMemberContext {
        common,
        member: TeamMemberView::from_model(&member, lang),
    }))
}
