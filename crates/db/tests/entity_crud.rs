//! Integration tests for entity CRUD operations.
//!
//! Exercises the repository layer against a real database:
//! - Slug derivation from Russian names
//! - Slug uniqueness violations
//! - Slug-path lookups (lab / field / project)
//! - Many-to-many membership
//! - ON DELETE SET NULL on optional relations

use institut_db::models::field::CreateField;
use institut_db::models::lab::{CreateLab, UpdateLab};
use institut_db::models::project::CreateProject;
use institut_db::models::team_member::CreateTeamMember;
use institut_db::repositories::{FieldRepo, LabRepo, ProjectRepo, TeamMemberRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_lab(name_ru: &str) -> CreateLab {
    CreateLab {
        name_ru: name_ru.to_string(),
        name_en: None,
        name_kk: None,
        description_ru: "Описание".to_string(),
        description_en: None,
        description_kk: None,
        image: None,
        slug: None,
    }
}

fn new_field(name_ru: &str) -> CreateField {
    CreateField {
        name_ru: name_ru.to_string(),
        name_en: None,
        name_kk: None,
        description_ru: "Описание".to_string(),
        description_en: None,
        description_kk: None,
        image: None,
        hero_image: None,
        slug: None,
    }
}

fn new_project(name_ru: &str, lab_id: Option<i64>, field_id: Option<i64>) -> CreateProject {
    CreateProject {
        name_ru: name_ru.to_string(),
        name_en: None,
        name_kk: None,
        description_ru: "Краткое описание".to_string(),
        description_en: None,
        description_kk: None,
        content_ru: None,
        content_en: None,
        content_kk: None,
        application_area_ru: None,
        application_area_en: None,
        application_area_kk: None,
        superiority_ru: None,
        superiority_en: None,
        superiority_kk: None,
        client_name_ru: None,
        client_name_en: None,
        client_name_kk: None,
        technologies_ru: None,
        technologies_en: None,
        technologies_kk: None,
        author_ru: None,
        author_en: None,
        author_kk: None,
        lab_id,
        field_id,
        author_member_id: None,
        slug: None,
        date: None,
        project_url: None,
        year_completed: None,
        main_image: None,
        pdf_file: None,
        youtube_url: None,
    }
}

fn new_member(name_ru: &str) -> CreateTeamMember {
    CreateTeamMember {
        name_ru: name_ru.to_string(),
        name_en: None,
        name_kk: None,
        position_ru: "Научный сотрудник".to_string(),
        position_en: None,
        position_kk: None,
        description_ru: "Описание".to_string(),
        description_en: None,
        description_kk: None,
        photo: None,
        linkedin_url: None,
        twitter_url: None,
        is_featured: None,
        orcid_id: None,
        scopus_id: None,
        publications_url: None,
        email: None,
    }
}

// ---------------------------------------------------------------------------
// Slug derivation
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn russian_lab_name_yields_nonempty_url_safe_slug(pool: PgPool) {
    let lab = LabRepo::create(&pool, &new_lab("Лаборатория Искусственного Интеллекта"))
        .await
        .unwrap();

    assert!(!lab.slug.is_empty());
    assert_eq!(lab.slug, "лаборатория-искусственного-интеллекта");
    assert!(institut_core::slug::validate_slug(&lab.slug).is_ok());
}

#[sqlx::test]
async fn explicit_slug_is_kept(pool: PgPool) {
    let mut input = new_lab("Лаборатория");
    input.slug = Some("custom-slug".to_string());
    let lab = LabRepo::create(&pool, &input).await.unwrap();
    assert_eq!(lab.slug, "custom-slug");
}

#[sqlx::test]
async fn duplicate_slug_is_a_unique_violation(pool: PgPool) {
    LabRepo::create(&pool, &new_lab("Одно название")).await.unwrap();
    let err = LabRepo::create(&pool, &new_lab("Одно название"))
        .await
        .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_labs_slug"));
        }
        other => panic!("expected unique violation, got {other:?}"),
    }
}

#[sqlx::test]
async fn update_does_not_regenerate_slug(pool: PgPool) {
    let lab = LabRepo::create(&pool, &new_lab("Старое название")).await.unwrap();
    let updated = LabRepo::update(
        &pool,
        lab.id,
        &UpdateLab {
            name_ru: Some("Новое название".to_string()),
            name_en: None,
            name_kk: None,
            description_ru: None,
            description_en: None,
            description_kk: None,
            image: None,
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.name_ru, "Новое название");
    assert_eq!(updated.slug, lab.slug);
}

// ---------------------------------------------------------------------------
// Slug-path lookups
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn project_detail_found_by_slug_triple(pool: PgPool) {
    let lab = LabRepo::create(&pool, &new_lab("Лаборатория данных")).await.unwrap();
    let field = FieldRepo::create(&pool, &new_field("Машинное обучение"))
        .await
        .unwrap();
    let project = ProjectRepo::create(
        &pool,
        &new_project("Прогнозная модель", Some(lab.id), Some(field.id)),
    )
    .await
    .unwrap();

    let found = ProjectRepo::find_detail(&pool, &lab.slug, &field.slug, &project.slug)
        .await
        .unwrap();
    assert_eq!(found.unwrap().id, project.id);
}

#[sqlx::test]
async fn project_detail_requires_all_three_slugs_to_match(pool: PgPool) {
    let lab = LabRepo::create(&pool, &new_lab("Лаборатория данных")).await.unwrap();
    let field = FieldRepo::create(&pool, &new_field("Машинное обучение"))
        .await
        .unwrap();
    let other_field = FieldRepo::create(&pool, &new_field("Робототехника"))
        .await
        .unwrap();
    let project = ProjectRepo::create(
        &pool,
        &new_project("Прогнозная модель", Some(lab.id), Some(field.id)),
    )
    .await
    .unwrap();

    let found = ProjectRepo::find_detail(&pool, &lab.slug, &other_field.slug, &project.slug)
        .await
        .unwrap();
    assert!(found.is_none());
}

#[sqlx::test]
async fn related_projects_exclude_the_current_one(pool: PgPool) {
    let lab = LabRepo::create(&pool, &new_lab("Лаборатория данных")).await.unwrap();
    let p1 = ProjectRepo::create(&pool, &new_project("Проект один", Some(lab.id), None))
        .await
        .unwrap();
    ProjectRepo::create(&pool, &new_project("Проект два", Some(lab.id), None))
        .await
        .unwrap();

    let related = ProjectRepo::related(&pool, lab.id, &p1.slug, 4).await.unwrap();
    assert_eq!(related.len(), 1);
    assert_eq!(related[0].name_ru, "Проект два");
}

// ---------------------------------------------------------------------------
// Relations
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn lab_fields_membership_roundtrip(pool: PgPool) {
    let lab = LabRepo::create(&pool, &new_lab("Лаборатория")).await.unwrap();
    let f1 = FieldRepo::create(&pool, &new_field("Направление А")).await.unwrap();
    let f2 = FieldRepo::create(&pool, &new_field("Направление Б")).await.unwrap();

    LabRepo::set_fields(&pool, lab.id, &[f1.id, f2.id]).await.unwrap();
    assert_eq!(LabRepo::list_fields(&pool, lab.id).await.unwrap().len(), 2);

    // Replacing the set drops members not listed.
    LabRepo::set_fields(&pool, lab.id, &[f2.id]).await.unwrap();
    let fields = LabRepo::list_fields(&pool, lab.id).await.unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].id, f2.id);
}

#[sqlx::test]
async fn project_team_membership(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Проект", None, None))
        .await
        .unwrap();
    let member = TeamMemberRepo::create(&pool, &new_member("Иван Иванов"))
        .await
        .unwrap();

    ProjectRepo::set_team(&pool, project.id, &[member.id]).await.unwrap();
    let team = ProjectRepo::list_team(&pool, project.id).await.unwrap();
    assert_eq!(team.len(), 1);
    assert_eq!(team[0].id, member.id);
}

#[sqlx::test]
async fn featured_members_are_filtered(pool: PgPool) {
    let mut featured = new_member("Анна Петрова");
    featured.is_featured = Some(true);
    TeamMemberRepo::create(&pool, &featured).await.unwrap();
    TeamMemberRepo::create(&pool, &new_member("Иван Иванов"))
        .await
        .unwrap();

    let featured = TeamMemberRepo::list_featured(&pool).await.unwrap();
    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0].name_ru, "Анна Петрова");
    assert_eq!(TeamMemberRepo::list(&pool).await.unwrap().len(), 2);
}

#[sqlx::test]
async fn deleting_lab_nulls_project_reference(pool: PgPool) {
    let lab = LabRepo::create(&pool, &new_lab("Лаборатория")).await.unwrap();
    let project = ProjectRepo::create(&pool, &new_project("Проект", Some(lab.id), None))
        .await
        .unwrap();

    assert!(LabRepo::delete(&pool, lab.id).await.unwrap());

    let reloaded = ProjectRepo::find_by_id(&pool, project.id).await.unwrap().unwrap();
    assert_eq!(reloaded.lab_id, None);
}
