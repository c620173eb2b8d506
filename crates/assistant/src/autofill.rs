//! Auto-translation hook for content writes.
//!
//! When an entity is created or updated with a Russian value but no English
//! or Kazakh value for a translatable field, the missing targets are filled
//! by the translation service. Every failure is swallowed: a content save
//! must never fail because the translation service is down.

use institut_core::lang::{Lang, TARGET_LANGS};

use crate::translate::TranslateApi;

/// One translatable field of an entity being saved: the Russian source and
/// mutable slots for the target languages.
pub struct FieldTriple<'a> {
    pub ru: Option<&'a str>,
    pub en: &'a mut Option<String>,
    pub kk: &'a mut Option<String>,
}

impl<'a> FieldTriple<'a> {
    pub fn new(
        ru: Option<&'a str>,
        en: &'a mut Option<String>,
        kk: &'a mut Option<String>,
    ) -> Self {
        Self { ru, en, kk }
    }

    fn slot(&mut self, lang: Lang) -> &mut Option<String> {
        match lang {
            Lang::En => self.en,
            Lang::Kk => self.kk,
            // The source language has no slot; TARGET_LANGS never contains it.
            Lang::Ru => unreachable!("source language is not a translation target"),
        }
    }
}

/// Fill missing target-language values from the Russian source.
///
/// Fields with no Russian value, and targets that already hold text, are
/// left untouched. Translation failures are logged at debug level and
/// otherwise ignored.
pub async fn fill_missing_translations(api: &TranslateApi, fields: &mut [FieldTriple<'_>]) {
    for field in fields {
        let Some(source) = field.ru else {
            continue;
        };
        if source.trim().is_empty() {
            continue;
        }

        for &lang in TARGET_LANGS {
            let slot = field.slot(lang);
            if slot.as_deref().is_some_and(|s| !s.trim().is_empty()) {
                continue;
            }
            match api.translate(source, Lang::Ru, lang).await {
                Ok(translated) => *slot = Some(translated),
                Err(err) => {
                    tracing::debug!(lang = lang.code(), error = %err, "auto-translation skipped");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::TranslateApi;
    use std::time::Duration;

    fn unreachable_api() -> TranslateApi {
        TranslateApi::new("http://127.0.0.1:9".to_string(), Duration::from_secs(1))
    }

    #[tokio::test]
    async fn failures_leave_targets_untouched() {
        let api = unreachable_api();
        let mut en = None;
        let mut kk = None;
        let mut fields = [FieldTriple::new(Some("Привет"), &mut en, &mut kk)];

        fill_missing_translations(&api, &mut fields).await;

        assert!(en.is_none());
        assert!(kk.is_none());
    }

    #[tokio::test]
    async fn existing_translations_are_not_overwritten() {
        let api = unreachable_api();
        let mut en = Some("Hello".to_string());
        let mut kk = Some("Сәлем".to_string());
        let mut fields = [FieldTriple::new(Some("Привет"), &mut en, &mut kk)];

        fill_missing_translations(&api, &mut fields).await;

        assert_eq!(en.as_deref(), Some("Hello"));
        assert_eq!(kk.as_deref(), Some("Сәлем"));
    }

    #[tokio::test]
    async fn missing_source_is_skipped() {
        let api = unreachable_api();
        let mut en = None;
        let mut kk = None;
        let mut fields = [FieldTriple::new(None, &mut en, &mut kk)];

        fill_missing_translations(&api, &mut fields).await;

        assert!(en.is_none());
        assert!(kk.is_none());
    }
}
