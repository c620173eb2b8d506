//! Site languages and translation fallback.
//!
//! Translated attributes are stored as suffixed columns (`name_ru`,
//! `name_en`, `name_kk`). Russian is the source language: it is always
//! present, slugs derive from it, and display text falls back to it when a
//! translation is missing.

use serde::Deserialize;

/// A language the site content can be served in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// Russian, the source language.
    #[default]
    Ru,
    En,
    Kk,
}

/// Languages auto-translation targets (everything except the source).
pub const TARGET_LANGS: &[Lang] = &[Lang::En, Lang::Kk];

impl Lang {
    /// Two-letter code used in URLs and by the translation provider.
    pub fn code(self) -> &'static str {
        match self {
            Lang::Ru => "ru",
            Lang::En => "en",
            Lang::Kk => "kk",
        }
    }
}

/// Resolve a translated field triple into display text for `lang`.
///
/// Missing or empty translations fall back to the Russian source value.
pub fn resolve<'a>(lang: Lang, ru: &'a str, en: Option<&'a str>, kk: Option<&'a str>) -> &'a str {
    let translated = match lang {
        Lang::Ru => None,
        Lang::En => en,
        Lang::Kk => kk,
    };
    match translated {
        Some(text) if !text.trim().is_empty() => text,
        _ => ru,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_source_language_returns_ru() {
        assert_eq!(resolve(Lang::Ru, "Привет", Some("Hello"), None), "Привет");
    }

    #[test]
    fn resolve_returns_translation_when_present() {
        assert_eq!(resolve(Lang::En, "Привет", Some("Hello"), None), "Hello");
        assert_eq!(resolve(Lang::Kk, "Привет", None, Some("Сәлем")), "Сәлем");
    }

    #[test]
    fn resolve_falls_back_to_ru_when_missing() {
        assert_eq!(resolve(Lang::En, "Привет", None, None), "Привет");
    }

    #[test]
    fn resolve_falls_back_to_ru_when_blank() {
        assert_eq!(resolve(Lang::En, "Привет", Some("  "), None), "Привет");
    }

    #[test]
    fn default_lang_is_russian() {
        assert_eq!(Lang::default(), Lang::Ru);
    }
}
