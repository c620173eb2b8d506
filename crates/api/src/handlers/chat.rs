//! Handler for the visitor chat endpoint.
//!
//! Proxies the visitor's question to the generative-language provider with
//! a snapshot of the catalogue as grounding. Provider failures of any kind
//! come back as a JSON error string with a 500 status -- never as an
//! unhandled fault.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use institut_assistant::SiteSnapshot;
use institut_core::markup::render_markup;
use institut_db::repositories::{LabRepo, ProjectRepo};
use serde::Deserialize;
use serde_json::json;

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

/// POST /api/chat
///
/// Accepts `{"message": string}` and answers `{"response": html}` on
/// success or `{"error": string}` with a 400/500 status.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> AppResult<Response> {
    if request.message.trim().is_empty() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Сообщение не может быть пустым." })),
        )
            .into_response());
    }

    // Snapshot the catalogue in the source language for prompt grounding.
    let snapshot = SiteSnapshot {
        lab_names: LabRepo::list(&state.pool)
            .await?
            .into_iter()
            .map(|l| l.name_ru)
            .collect(),
        project_names: ProjectRepo::list(&state.pool)
            .await?
            .into_iter()
            .map(|p| p.name_ru)
            .collect(),
    };
    let prompt = snapshot.build_prompt(&request.message);

    match state.chat.generate(&prompt).await {
        Ok(reply) => {
            Ok(Json(json!({ "response": render_markup(&reply) })).into_response())
        }
        Err(err) => {
            tracing::warn!(error = %err, "chat provider call failed");
            Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response())
        }
    }
}
