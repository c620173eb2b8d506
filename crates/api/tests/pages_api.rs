//! HTTP-level integration tests for the public page contexts.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn home_page_context_has_all_blocks(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    for key in [
        "settings",
        "labs",
        "all_fields",
        "best_projects",
        "partners",
        "mission_items",
        "latest_news",
        "latest_announcements",
    ] {
        assert!(json.get(key).is_some(), "home context missing '{key}'");
    }
    // Fresh database: the settings singleton does not exist yet.
    assert!(json["settings"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn home_page_shows_latest_three_projects(pool: PgPool) {
    for i in 1..=4 {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            "/api/v1/admin/projects",
            serde_json::json!({
                "name_ru": format!("Проект {i}"),
                "description_ru": "Описание"
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/").await).await;

    let best = json["best_projects"].as_array().unwrap();
    assert_eq!(best.len(), 3);
    // Most recently created first.
    assert_eq!(best[0]["name"], "Проект 4");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn about_page_context_has_team_and_facts(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/about").await).await;

    for key in ["all_fields", "team_members", "success_facts", "mission_items"] {
        assert!(json.get(key).is_some(), "about context missing '{key}'");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn contacts_page_carries_settings(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/admin/settings",
        serde_json::json!({
            "hero_title_home": "Институт",
            "hero_subtitle_home": "Наука и технологии",
            "about_text_intro": "Кто мы такие",
            "address": "Алматы",
            "phone": "+7 727 000 0000",
            "email": "info@institute.kz",
            "contact_hero_title": "Контакты",
            "contact_hero_subtitle": "Свяжитесь с нами"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/contacts").await).await;
    assert_eq!(json["settings"]["email"], "info@institute.kz");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn health_endpoint_reports_ok(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
}
