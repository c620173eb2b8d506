//! Handlers for the public form endpoints.
//!
//! Submissions are presence-only: missing fields are stored as empty
//! strings. Responses carry the flash message text for the frontend to
//! display.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Form, Json};
use institut_db::models::submission::CreateApplication;
use institut_db::repositories::{ApplicationRepo, MailingRepo};
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Contact form body. Field names match the HTML form inputs.
#[derive(Debug, Deserialize)]
pub struct ContactFormBody {
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

/// POST /form/contact
pub async fn contact_form(
    State(state): State<AppState>,
    Form(body): Form<ContactFormBody>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let input = CreateApplication {
        full_name: body.fullname,
        email: body.email,
        phone: body.phone,
        topic: body.subject,
        message: body.message,
    };
    ApplicationRepo::create(&state.pool, &input).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Спасибо! Ваша заявка принята.",
        }),
    ))
}

/// Mailing signup body.
#[derive(Debug, Deserialize)]
pub struct MailingFormBody {
    pub email: Option<String>,
}

/// POST /form/mailing
///
/// Deduplicates by exact email match: a repeated signup leaves a single
/// row and answers with the already-subscribed message. A missing email is
/// silently dropped.
pub async fn mailing_form(
    State(state): State<AppState>,
    Form(body): Form<MailingFormBody>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let email = body.email.unwrap_or_default();
    if email.is_empty() {
        return Ok((StatusCode::OK, Json(MessageResponse { message: "" })));
    }

    match MailingRepo::create(&state.pool, &email).await? {
        Some(_) => Ok((
            StatusCode::CREATED,
            Json(MessageResponse {
                message: "Спасибо! Вы успешно подписались на рассылку.",
            }),
        )),
        None => Ok((
            StatusCode::OK,
            Json(MessageResponse {
                message: "Этот email уже подписан на рассылку.",
            }),
        )),
    }
}
