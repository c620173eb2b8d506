//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Slug-bearing repositories
//! derive the slug from the Russian name/title at creation time; slug
//! uniqueness is enforced by `uq_*` constraints in the schema.

pub mod announcement_repo;
pub mod application_repo;
pub mod field_repo;
pub mod lab_repo;
pub mod mailing_repo;
pub mod management_repo;
pub mod mission_item_repo;
pub mod news_item_repo;
pub mod partner_repo;
pub mod project_repo;
pub mod site_settings_repo;
pub mod success_fact_repo;
pub mod team_member_repo;

pub use announcement_repo::AnnouncementRepo;
pub use application_repo::ApplicationRepo;
pub use field_repo::FieldRepo;
pub use lab_repo::LabRepo;
pub use mailing_repo::MailingRepo;
pub use management_repo::ManagementRepo;
pub use mission_item_repo::MissionItemRepo;
pub use news_item_repo::NewsItemRepo;
pub use partner_repo::PartnerRepo;
pub use project_repo::ProjectRepo;
pub use site_settings_repo::SiteSettingsRepo;
pub use success_fact_repo::SuccessFactRepo;
pub use team_member_repo::TeamMemberRepo;
