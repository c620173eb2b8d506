//! Localized view models for the public pages.
//!
//! Public endpoints resolve translated column triples into single display
//! strings for the requested language (falling back to Russian) before
//! serializing the page context. Admin endpoints return full rows instead.

use institut_core::lang::{resolve, Lang};
use institut_core::types::{DateOnly, DbId};
use institut_db::models::announcement::Announcement;
use institut_db::models::field::Field;
use institut_db::models::lab::Lab;
use institut_db::models::management::Management;
use institut_db::models::mission_item::MissionItem;
use institut_db::models::news_item::NewsItem;
use institut_db::models::partner::Partner;
use institut_db::models::project::Project;
use institut_db::models::success_fact::SuccessFact;
use institut_db::models::team_member::TeamMember;
use serde::Serialize;

/// Resolve an optional-source triple; `None` when even the source is empty.
fn resolve_opt(
    lang: Lang,
    ru: Option<&str>,
    en: Option<&str>,
    kk: Option<&str>,
) -> Option<String> {
    let text = resolve(lang, ru.unwrap_or_default(), en, kk);
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// A lab card (list pages, footer).
#[derive(Debug, Serialize)]
pub struct LabView {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub slug: String,
}

impl LabView {
    pub fn from_model(lab: &Lab, lang: Lang) -> Self {
        Self {
            id: lab.id,
            name: resolve(lang, &lab.name_ru, lab.name_en.as_deref(), lab.name_kk.as_deref())
                .to_string(),
            description: resolve(
                lang,
                &lab.description_ru,
                lab.description_en.as_deref(),
                lab.description_kk.as_deref(),
            )
            .to_string(),
            image: lab.image.clone(),
            slug: lab.slug.clone(),
        }
    }
}

/// A research field card.
#[derive(Debug, Serialize)]
pub struct FieldView {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub hero_image: Option<String>,
    pub slug: String,
}

impl FieldView {
    pub fn from_model(field: &Field, lang: Lang) -> Self {
        Self {
            id: field.id,
            name: resolve(
                lang,
                &field.name_ru,
                field.name_en.as_deref(),
                field.name_kk.as_deref(),
            )
            .to_string(),
            description: resolve(
                lang,
                &field.description_ru,
                field.description_en.as_deref(),
                field.description_kk.as_deref(),
            )
            .to_string(),
            image: field.image.clone(),
            hero_image: field.hero_image.clone(),
            slug: field.slug.clone(),
        }
    }
}

/// A project card (lists, showcases, related blocks).
#[derive(Debug, Serialize)]
pub struct ProjectCardView {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub slug: String,
    pub main_image: Option<String>,
    pub date: DateOnly,
    pub lab_id: Option<DbId>,
    pub field_id: Option<DbId>,
}

impl ProjectCardView {
    pub fn from_model(project: &Project, lang: Lang) -> Self {
        Self {
            id: project.id,
            name: resolve(
                lang,
                &project.name_ru,
                project.name_en.as_deref(),
                project.name_kk.as_deref(),
            )
            .to_string(),
            description: resolve(
                lang,
                &project.description_ru,
                project.description_en.as_deref(),
                project.description_kk.as_deref(),
            )
            .to_string(),
            slug: project.slug.clone(),
            main_image: project.main_image.clone(),
            date: project.date,
            lab_id: project.lab_id,
            field_id: project.field_id,
        }
    }
}

/// The full project detail context.
#[derive(Debug, Serialize)]
pub struct ProjectDetailView {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub content: Option<String>,
    pub application_area: Option<String>,
    pub superiority: Option<String>,
    pub client_name: Option<String>,
    pub technologies: Option<String>,
    pub author: Option<String>,
    pub slug: String,
    pub date: DateOnly,
    pub project_url: Option<String>,
    pub year_completed: Option<String>,
    pub main_image: Option<String>,
    pub pdf_file: Option<String>,
    pub youtube_url: Option<String>,
    pub team: Vec<TeamMemberView>,
}

impl ProjectDetailView {
    pub fn from_model(project: &Project, team: &[TeamMember], lang: Lang) -> Self {
        Self {
            id: project.id,
            name: resolve(
                lang,
                &project.name_ru,
                project.name_en.as_deref(),
                project.name_kk.as_deref(),
            )
            .to_string(),
            description: resolve(
                lang,
                &project.description_ru,
                project.description_en.as_deref(),
                project.description_kk.as_deref(),
            )
            .to_string(),
            content: resolve_opt(
                lang,
                project.content_ru.as_deref(),
                project.content_en.as_deref(),
                project.content_kk.as_deref(),
            ),
            application_area: resolve_opt(
                lang,
                project.application_area_ru.as_deref(),
                project.application_area_en.as_deref(),
                project.application_area_kk.as_deref(),
            ),
            superiority: resolve_opt(
                lang,
                project.superiority_ru.as_deref(),
                project.superiority_en.as_deref(),
                project.superiority_kk.as_deref(),
            ),
            client_name: resolve_opt(
                lang,
                project.client_name_ru.as_deref(),
                project.client_name_en.as_deref(),
                project.client_name_kk.as_deref(),
            ),
            technologies: resolve_opt(
                lang,
                project.technologies_ru.as_deref(),
                project.technologies_en.as_deref(),
                project.technologies_kk.as_deref(),
            ),
            author: resolve_opt(
                lang,
                project.author_ru.as_deref(),
                project.author_en.as_deref(),
                project.author_kk.as_deref(),
            ),
            slug: project.slug.clone(),
            date: project.date,
            project_url: project.project_url.clone(),
            year_completed: project.year_completed.clone(),
            main_image: project.main_image.clone(),
            pdf_file: project.pdf_file.clone(),
            youtube_url: project.youtube_url.clone(),
            team: team
                .iter()
                .map(|m| TeamMemberView::from_model(m, lang))
                .collect(),
        }
    }
}

/// A team member profile.
#[derive(Debug, Serialize)]
pub struct TeamMemberView {
    pub id: DbId,
    pub name: String,
    pub position: String,
    pub description: String,
    pub photo: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub is_featured: bool,
    pub orcid_id: Option<String>,
    pub scopus_id: Option<String>,
    pub publications_url: Option<String>,
    pub email: Option<String>,
}

impl TeamMemberView {
    pub fn from_model(member: &TeamMember, lang: Lang) -> Self {
        Self {
            id: member.id,
            name: resolve(
                lang,
                &member.name_ru,
                member.name_en.as_deref(),
                member.name_kk.as_deref(),
            )
            .to_string(),
            position: resolve(
                lang,
                &member.position_ru,
                member.position_en.as_deref(),
                member.position_kk.as_deref(),
            )
            .to_string(),
            description: resolve(
                lang,
                &member.description_ru,
                member.description_en.as_deref(),
                member.description_kk.as_deref(),
            )
            .to_string(),
            photo: member.photo.clone(),
            linkedin_url: member.linkedin_url.clone(),
            twitter_url: member.twitter_url.clone(),
            is_featured: member.is_featured,
            orcid_id: member.orcid_id.clone(),
            scopus_id: member.scopus_id.clone(),
            publications_url: member.publications_url.clone(),
            email: member.email.clone(),
        }
    }
}

/// A leadership profile.
#[derive(Debug, Serialize)]
pub struct ManagementView {
    pub id: DbId,
    pub name: String,
    pub position: String,
    pub biography: Option<String>,
    pub photo: Option<String>,
    pub linkedin_url: Option<String>,
    pub orcid_id: Option<String>,
    pub scopus_id: Option<String>,
    pub publications_url: Option<String>,
    pub email: Option<String>,
}

impl ManagementView {
    pub fn from_model(entry: &Management, lang: Lang) -> Self {
        Self {
            id: entry.id,
            name: resolve(
                lang,
                &entry.name_ru,
                entry.name_en.as_deref(),
                entry.name_kk.as_deref(),
            )
            .to_string(),
            position: resolve(
                lang,
                &entry.position_ru,
                entry.position_en.as_deref(),
                entry.position_kk.as_deref(),
            )
            .to_string(),
            biography: resolve_opt(
                lang,
                entry.biography_ru.as_deref(),
                entry.biography_en.as_deref(),
                entry.biography_kk.as_deref(),
            ),
            photo: entry.photo.clone(),
            linkedin_url: entry.linkedin_url.clone(),
            orcid_id: entry.orcid_id.clone(),
            scopus_id: entry.scopus_id.clone(),
            publications_url: entry.publications_url.clone(),
            email: entry.email.clone(),
        }
    }
}

/// A news card for list pages.
#[derive(Debug, Serialize)]
pub struct NewsCardView {
    pub id: DbId,
    pub title: String,
    pub excerpt: Option<String>,
    pub slug: String,
    pub image: Option<String>,
    pub publish_date: DateOnly,
}

impl NewsCardView {
    pub fn from_model(item: &NewsItem, lang: Lang) -> Self {
        Self {
            id: item.id,
            title: resolve(
                lang,
                &item.title_ru,
                item.title_en.as_deref(),
                item.title_kk.as_deref(),
            )
            .to_string(),
            excerpt: resolve_opt(
                lang,
                item.excerpt_ru.as_deref(),
                item.excerpt_en.as_deref(),
                item.excerpt_kk.as_deref(),
            ),
            slug: item.slug.clone(),
            image: item.image.clone(),
            publish_date: item.publish_date,
        }
    }
}

/// The full news article context.
#[derive(Debug, Serialize)]
pub struct NewsDetailView {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub slug: String,
    pub image: Option<String>,
    pub publish_date: DateOnly,
}

impl NewsDetailView {
    pub fn from_model(item: &NewsItem, lang: Lang) -> Self {
        Self {
            id: item.id,
            title: resolve(
                lang,
                &item.title_ru,
                item.title_en.as_deref(),
                item.title_kk.as_deref(),
            )
            .to_string(),
            content: resolve(
                lang,
                &item.content_ru,
                item.content_en.as_deref(),
                item.content_kk.as_deref(),
            )
            .to_string(),
            excerpt: resolve_opt(
                lang,
                item.excerpt_ru.as_deref(),
                item.excerpt_en.as_deref(),
                item.excerpt_kk.as_deref(),
            ),
            slug: item.slug.clone(),
            image: item.image.clone(),
            publish_date: item.publish_date,
        }
    }
}

/// An announcement line (home page block).
#[derive(Debug, Serialize)]
pub struct AnnouncementView {
    pub id: DbId,
    pub title: String,
    pub event_date: DateOnly,
}

impl AnnouncementView {
    pub fn from_model(item: &Announcement, lang: Lang) -> Self {
        Self {
            id: item.id,
            title: resolve(
                lang,
                &item.title_ru,
                item.title_en.as_deref(),
                item.title_kk.as_deref(),
            )
            .to_string(),
            event_date: item.event_date,
        }
    }
}

/// A partner logo entry.
#[derive(Debug, Serialize)]
pub struct PartnerView {
    pub id: DbId,
    pub name: String,
    pub logo: Option<String>,
    pub website_url: Option<String>,
}

impl PartnerView {
    pub fn from_model(partner: &Partner, lang: Lang) -> Self {
        Self {
            id: partner.id,
            name: resolve(
                lang,
                &partner.name_ru,
                partner.name_en.as_deref(),
                partner.name_kk.as_deref(),
            )
            .to_string(),
            logo: partner.logo.clone(),
            website_url: partner.website_url.clone(),
        }
    }
}

/// A mission / goals / strategy block item.
#[derive(Debug, Serialize)]
pub struct MissionItemView {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub icon_class: String,
}

impl MissionItemView {
    pub fn from_model(item: &MissionItem, lang: Lang) -> Self {
        Self {
            id: item.id,
            name: resolve(
                lang,
                &item.name_ru,
                item.name_en.as_deref(),
                item.name_kk.as_deref(),
            )
            .to_string(),
            description: resolve(
                lang,
                &item.description_ru,
                item.description_en.as_deref(),
                item.description_kk.as_deref(),
            )
            .to_string(),
            icon_class: item.icon_class.clone(),
        }
    }
}

/// An achievements counter entry.
#[derive(Debug, Serialize)]
pub struct SuccessFactView {
    pub id: DbId,
    pub title: String,
    pub value: String,
    pub long_description: Option<String>,
    pub image: Option<String>,
    pub icon_class: String,
}

impl SuccessFactView {
    pub fn from_model(fact: &SuccessFact, lang: Lang) -> Self {
        Self {
            id: fact.id,
            title: resolve(
                lang,
                &fact.title_ru,
                fact.title_en.as_deref(),
                fact.title_kk.as_deref(),
            )
            .to_string(),
            value: resolve(
                lang,
                &fact.value_ru,
                fact.value_en.as_deref(),
                fact.value_kk.as_deref(),
            )
            .to_string(),
            long_description: resolve_opt(
                lang,
                fact.long_description_ru.as_deref(),
                fact.long_description_en.as_deref(),
                fact.long_description_kk.as_deref(),
            ),
            image: fact.image.clone(),
            icon_class: fact.icon_class.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_lab() -> Lab {
        Lab {
            id: 1,
            name_ru: "Лаборатория данных".to_string(),
            name_en: Some("Data Lab".to_string()),
            name_kk: None,
            description_ru: "Описание".to_string(),
            description_en: None,
            description_kk: None,
            image: None,
            slug: "лаборатория-данных".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn lab_view_uses_requested_language() {
        let view = LabView::from_model(&sample_lab(), Lang::En);
        assert_eq!(view.name, "Data Lab");
    }

    #[test]
    fn lab_view_falls_back_to_russian() {
        let view = LabView::from_model(&sample_lab(), Lang::Kk);
        assert_eq!(view.name, "Лаборатория данных");
        // Description has no translations at all.
        let view = LabView::from_model(&sample_lab(), Lang::En);
        assert_eq!(view.description, "Описание");
    }

    #[test]
    fn resolve_opt_is_none_for_empty_source() {
        assert_eq!(resolve_opt(Lang::En, None, None, None), None);
        assert_eq!(resolve_opt(Lang::Ru, Some("  "), None, None), None);
        assert_eq!(
            resolve_opt(Lang::En, Some("текст"), None, None).as_deref(),
            Some("текст")
        );
    }
}
