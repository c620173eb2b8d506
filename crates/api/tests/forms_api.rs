//! HTTP-level integration tests for the public form endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_form};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn contact_form_stores_an_application(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        "/form/contact",
        "fullname=Иван Иванов&email=ivan@example.com&phone=%2B77000000000&subject=Вопрос&message=Здравствуйте",
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Спасибо! Ваша заявка принята.");

    let app = common::build_test_app(pool);
    let stored = body_json(get(app, "/api/v1/admin/applications").await).await;
    let list = stored.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["full_name"], "Иван Иванов");
    assert_eq!(list[0]["topic"], "Вопрос");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn contact_form_accepts_missing_fields(pool: PgPool) {
    // Presence-only handling: absent fields are stored as empty strings.
    let app = common::build_test_app(pool.clone());
    let response = post_form(app, "/form/contact", "fullname=Аноним").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let stored = body_json(get(app, "/api/v1/admin/applications").await).await;
    assert_eq!(stored[0]["email"], "");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn mailing_signup_twice_creates_one_row(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_form(app, "/form/mailing", "email=news@example.com").await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Спасибо! Вы успешно подписались на рассылку.");

    let app = common::build_test_app(pool.clone());
    let response = post_form(app, "/form/mailing", "email=news@example.com").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Этот email уже подписан на рассылку.");

    let app = common::build_test_app(pool);
    let stored = body_json(get(app, "/api/v1/admin/mailings").await).await;
    assert_eq!(stored.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn mailing_signup_without_email_is_dropped(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_form(app, "/form/mailing", "").await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let stored = body_json(get(app, "/api/v1/admin/mailings").await).await;
    assert!(stored.as_array().unwrap().is_empty());
}
