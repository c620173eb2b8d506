//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Translated attributes appear as `<field>_ru` / `<field>_en` /
//! `<field>_kk` triples; the `_ru` column is the source language.

pub mod announcement;
pub mod field;
pub mod lab;
pub mod management;
pub mod mission_item;
pub mod news_item;
pub mod partner;
pub mod project;
pub mod site_settings;
pub mod submission;
pub mod success_fact;
pub mod team_member;
