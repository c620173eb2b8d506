//! Integration tests for append-only form submission tables.

use institut_db::models::submission::CreateApplication;
use institut_db::repositories::{ApplicationRepo, MailingRepo};
use sqlx::PgPool;

#[sqlx::test]
async fn application_insert_and_list(pool: PgPool) {
    let input = CreateApplication {
        full_name: "Иван Иванов".to_string(),
        email: "ivan@example.com".to_string(),
        phone: "+7 700 000 0000".to_string(),
        topic: "Сотрудничество".to_string(),
        message: "Здравствуйте!".to_string(),
    };
    let created = ApplicationRepo::create(&pool, &input).await.unwrap();
    assert_eq!(created.full_name, "Иван Иванов");

    let all = ApplicationRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 1);
}

#[sqlx::test]
async fn applications_are_not_deduplicated(pool: PgPool) {
    let input = CreateApplication {
        full_name: "".to_string(),
        email: "".to_string(),
        phone: "".to_string(),
        topic: "".to_string(),
        message: "".to_string(),
    };
    // Presence-only handling: empty fields are stored as-is, twice.
    ApplicationRepo::create(&pool, &input).await.unwrap();
    ApplicationRepo::create(&pool, &input).await.unwrap();
    assert_eq!(ApplicationRepo::list(&pool).await.unwrap().len(), 2);
}

#[sqlx::test]
async fn mailing_signup_is_deduplicated_by_email(pool: PgPool) {
    let first = MailingRepo::create(&pool, "news@example.com").await.unwrap();
    assert!(first.is_some());

    let second = MailingRepo::create(&pool, "news@example.com").await.unwrap();
    assert!(second.is_none());

    assert_eq!(MailingRepo::list(&pool).await.unwrap().len(), 1);
}

#[sqlx::test]
async fn different_emails_both_subscribe(pool: PgPool) {
    MailingRepo::create(&pool, "a@example.com").await.unwrap();
    MailingRepo::create(&pool, "b@example.com").await.unwrap();
    assert_eq!(MailingRepo::list(&pool).await.unwrap().len(), 2);

    assert!(MailingRepo::exists_by_email(&pool, "a@example.com").await.unwrap());
    assert!(!MailingRepo::exists_by_email(&pool, "c@example.com").await.unwrap());
}
