//! Integration tests for the site settings singleton.

use institut_db::models::site_settings::{CreateSiteSettings, UpdateSiteSettings};
use institut_db::repositories::SiteSettingsRepo;
use sqlx::PgPool;

fn new_settings(title: &str) -> CreateSiteSettings {
    CreateSiteSettings {
        hero_title_home: title.to_string(),
        hero_subtitle_home: "Подзаголовок".to_string(),
        about_text_intro: "Кто мы такие".to_string(),
        about_image: None,
        address: "Алматы, пр. аль-Фараби 71".to_string(),
        phone: "+7 727 000 0000".to_string(),
        email: "info@institute.kz".to_string(),
        hero_image_home: None,
        hero_image_about: None,
        hero_image_labs: None,
        hero_image_contacts: None,
        hero_image_news: None,
        hero_image_all_projects: None,
        hero_image_projects_field: None,
        hero_image_project_detail: None,
        hero_image_lab_detail: None,
        hero_image_news_detail: None,
        hero_image_team_detail: None,
        contact_hero_title: "Контакты".to_string(),
        contact_hero_subtitle: "Свяжитесь с нами".to_string(),
    }
}

#[sqlx::test]
async fn settings_absent_until_created(pool: PgPool) {
    assert!(SiteSettingsRepo::get(&pool).await.unwrap().is_none());
}

#[sqlx::test]
async fn first_create_returns_the_row(pool: PgPool) {
    let created = SiteSettingsRepo::create(&pool, &new_settings("Первый заголовок"))
        .await
        .unwrap();
    assert!(created.is_some());
    assert_eq!(created.unwrap().id, 1);
}

#[sqlx::test]
async fn second_create_is_a_noop(pool: PgPool) {
    SiteSettingsRepo::create(&pool, &new_settings("Первый заголовок"))
        .await
        .unwrap();

    let second = SiteSettingsRepo::create(&pool, &new_settings("Второй заголовок"))
        .await
        .unwrap();
    assert!(second.is_none());

    // The first row remains unchanged.
    let current = SiteSettingsRepo::get(&pool).await.unwrap().unwrap();
    assert_eq!(current.hero_title_home, "Первый заголовок");
}

#[sqlx::test]
async fn update_applies_only_provided_fields(pool: PgPool) {
    SiteSettingsRepo::create(&pool, &new_settings("Заголовок")).await.unwrap();

    let updated = SiteSettingsRepo::update(
        &pool,
        &UpdateSiteSettings {
            hero_title_home: None,
            hero_subtitle_home: None,
            about_text_intro: None,
            about_image: None,
            address: None,
            phone: Some("+7 727 111 1111".to_string()),
            email: None,
            hero_image_home: None,
            hero_image_about: None,
            hero_image_labs: None,
            hero_image_contacts: None,
            hero_image_news: None,
            hero_image_all_projects: None,
            hero_image_projects_field: None,
            hero_image_project_detail: None,
            hero_image_lab_detail: None,
            hero_image_news_detail: None,
            hero_image_team_detail: None,
            contact_hero_title: None,
            contact_hero_subtitle: None,
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.phone, "+7 727 111 1111");
    assert_eq!(updated.hero_title_home, "Заголовок");
}

#[sqlx::test]
async fn update_before_create_returns_none(pool: PgPool) {
    let result = SiteSettingsRepo::update(
        &pool,
        &UpdateSiteSettings {
            hero_title_home: Some("x".to_string()),
            hero_subtitle_home: None,
            about_text_intro: None,
            about_image: None,
            address: None,
            phone: None,
            email: None,
            hero_image_home: None,
            hero_image_about: None,
            hero_image_labs: None,
            hero_image_contacts: None,
            hero_image_news: None,
            hero_image_all_projects: None,
            hero_image_projects_field: None,
            hero_image_project_detail: None,
            hero_image_lab_detail: None,
            hero_image_news_detail: None,
            hero_image_team_detail: None,
            contact_hero_title: None,
            contact_hero_subtitle: None,
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());
}
