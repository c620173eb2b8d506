//! Shared query parameter types for API handlers.

use institut_core::lang::Lang;
use institut_core::types::DbId;
use serde::Deserialize;

/// Language selection for public pages (`?lang=ru|en|kk`, default `ru`).
#[derive(Debug, Default, Deserialize)]
pub struct LangParams {
    #[serde(default)]
    pub lang: Lang,
}

/// Case-insensitive substring search over admin list endpoints (`?q=`).
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Admin project list filters (`?q=`, `?lab_id=`, `?field_id=`).
#[derive(Debug, Default, Deserialize)]
pub struct ProjectFilterParams {
    pub q: Option<String>,
    pub lab_id: Option<DbId>,
    pub field_id: Option<DbId>,
}

/// Whether a name matches an optional search needle (case-insensitive).
pub fn matches_search(name: &str, q: &Option<String>) -> bool {
    match q {
        Some(needle) => name.to_lowercase().contains(&needle.to_lowercase()),
        None => true,
    }
}
