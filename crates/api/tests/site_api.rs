//! HTTP-level integration tests for the lab, project, news, and team pages.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, put_json};
use sqlx::PgPool;

async fn create_lab(pool: &PgPool, name_ru: &str, name_en: Option<&str>) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/admin/labs",
        serde_json::json!({
            "name_ru": name_ru,
            "name_en": name_en,
            "description_ru": "Описание"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

async fn create_field(pool: &PgPool, name_ru: &str) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/admin/fields",
        serde_json::json!({
            "name_ru": name_ru,
            "description_ru": "Описание"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

async fn create_project(
    pool: &PgPool,
    name_ru: &str,
    lab_id: i64,
    field_id: i64,
) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/admin/projects",
        serde_json::json!({
            "name_ru": name_ru,
            "description_ru": "Описание",
            "lab_id": lab_id,
            "field_id": field_id
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Labs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn lab_detail_by_slug(pool: PgPool) {
    let lab = create_lab(&pool, "Лаборатория данных", None).await;
    let slug = lab["slug"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/labs/{slug}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["lab"]["name"], "Лаборатория данных");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_lab_slug_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/labs/no-such-lab").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn lab_list_localizes_names(pool: PgPool) {
    create_lab(&pool, "Лаборатория данных", Some("Data Lab")).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/labs?lang=en").await).await;
    assert_eq!(json["labs"][0]["name"], "Data Lab");

    // Kazakh translation is absent: display falls back to Russian.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/labs?lang=kk").await).await;
    assert_eq!(json["labs"][0]["name"], "Лаборатория данных");
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn project_detail_by_slug_triple(pool: PgPool) {
    let lab = create_lab(&pool, "Лаборатория данных", None).await;
    let field = create_field(&pool, "Машинное обучение").await;
    let project = create_project(
        &pool,
        "Прогнозная модель",
        lab["id"].as_i64().unwrap(),
        field["id"].as_i64().unwrap(),
    )
    .await;

    let uri = format!(
        "/how/{}/{}/{}",
        lab["slug"].as_str().unwrap(),
        field["slug"].as_str().unwrap(),
        project["slug"].as_str().unwrap()
    );
    let app = common::build_test_app(pool);
    let response = get(app, &uri).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["project"]["name"], "Прогнозная модель");
    assert!(json["related_projects"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn mismatched_slug_combination_returns_404(pool: PgPool) {
    let lab = create_lab(&pool, "Лаборатория данных", None).await;
    let field = create_field(&pool, "Машинное обучение").await;
    let other_field = create_field(&pool, "Робототехника").await;
    let project = create_project(
        &pool,
        "Прогнозная модель",
        lab["id"].as_i64().unwrap(),
        field["id"].as_i64().unwrap(),
    )
    .await;

    // Existing slugs, but the field doesn't match the project's relation.
    let uri = format!(
        "/how/{}/{}/{}",
        lab["slug"].as_str().unwrap(),
        other_field["slug"].as_str().unwrap(),
        project["slug"].as_str().unwrap()
    );
    let app = common::build_test_app(pool);
    let response = get(app, &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn lab_projects_pages_filter_correctly(pool: PgPool) {
    let lab = create_lab(&pool, "Лаборатория данных", None).await;
    let field = create_field(&pool, "Машинное обучение").await;
    let other_field = create_field(&pool, "Робототехника").await;
    let lab_id = lab["id"].as_i64().unwrap();
    create_project(&pool, "Проект МО", lab_id, field["id"].as_i64().unwrap()).await;
    create_project(
        &pool,
        "Проект робот",
        lab_id,
        other_field["id"].as_i64().unwrap(),
    )
    .await;

    let lab_slug = lab["slug"].as_str().unwrap();

    // All projects of the lab.
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/labs/{lab_slug}/all")).await).await;
    assert_eq!(json["projects"].as_array().unwrap().len(), 2);

    // Narrowed to one research field.
    let field_slug = field["slug"].as_str().unwrap();
    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/labs/{lab_slug}/{field_slug}")).await).await;
    let projects = json["projects"].as_array().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["name"], "Проект МО");
}

// ---------------------------------------------------------------------------
// News
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn news_listed_newest_first(pool: PgPool) {
    for (title, date) in [
        ("Старая новость", "2024-01-10"),
        ("Свежая новость", "2025-06-01"),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            "/api/v1/admin/news",
            serde_json::json!({
                "title_ru": title,
                "content_ru": "Текст",
                "publish_date": date
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/news").await).await;
    let news = json["news_list"].as_array().unwrap();
    assert_eq!(news.len(), 2);
    assert_eq!(news[0]["title"], "Свежая новость");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn news_detail_by_slug_and_missing_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/admin/news",
        serde_json::json!({
            "title_ru": "Открытие лаборатории",
            "content_ru": "Подробности"
        }),
    )
    .await;
    let created = body_json(response).await;
    let slug = created["slug"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/news/{slug}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["news_item"]["title"], "Открытие лаборатории");

    let app = common::build_test_app(pool);
    let response = get(app, "/news/no-such-news").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Team
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn team_member_profile_and_missing_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/admin/team-members",
        serde_json::json!({
            "name_ru": "Иван Иванов",
            "position_ru": "Научный сотрудник",
            "description_ru": "Описание"
        }),
    )
    .await;
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/team/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["member"]["name"], "Иван Иванов");

    let app = common::build_test_app(pool);
    let response = get(app, "/team/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn updated_translation_is_served(pool: PgPool) {
    let lab = create_lab(&pool, "Лаборатория данных", None).await;
    let id = lab["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/admin/labs/{id}"),
        serde_json::json!({ "name_en": "Data Lab" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/labs?lang=en").await).await;
    assert_eq!(json["labs"][0]["name"], "Data Lab");
}
