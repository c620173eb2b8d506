//! Slug generation and validation.
//!
//! Slugs are derived once from the Russian name or title at creation time
//! and are unique per entity type (a DB constraint enforces uniqueness).
//! Generation is Unicode-aware: Cyrillic names produce Cyrillic slugs, so
//! `Лаборатория ИИ` becomes `лаборатория-ии` rather than an empty string.

use crate::error::CoreError;

/// Generate a URL-safe slug from a display name.
///
/// Converts to lowercase, keeps alphanumeric characters (any script),
/// replaces everything else with hyphens, collapses consecutive hyphens,
/// and trims leading/trailing hyphens.
pub fn generate_slug(name: &str) -> String {
    let slug: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();

    // Collapse consecutive hyphens.
    let mut result = String::with_capacity(slug.len());
    let mut prev_hyphen = false;
    for c in slug.chars() {
        if c == '-' {
            if !prev_hyphen {
                result.push('-');
            }
            prev_hyphen = true;
        } else {
            result.push(c);
            prev_hyphen = false;
        }
    }

    result.trim_matches('-').to_string()
}

/// Validate a slug (non-empty, only lowercase alphanumerics and hyphens).
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("Slug must not be empty".into()));
    }
    if !slug
        .chars()
        .all(|c| (c.is_alphanumeric() && !c.is_uppercase()) || c == '-')
    {
        return Err(CoreError::Validation(
            "Slug must contain only lowercase alphanumeric characters and hyphens".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- generate_slug -------------------------------------------------------

    #[test]
    fn slug_basic_name() {
        assert_eq!(generate_slug("Quantum Computing Lab"), "quantum-computing-lab");
    }

    #[test]
    fn slug_cyrillic_name() {
        assert_eq!(
            generate_slug("Лаборатория Искусственного Интеллекта"),
            "лаборатория-искусственного-интеллекта"
        );
    }

    #[test]
    fn slug_mixed_script_and_digits() {
        assert_eq!(generate_slug("Web 3.0 (тест)"), "web-3-0-тест");
    }

    #[test]
    fn slug_collapses_consecutive_hyphens() {
        assert_eq!(generate_slug("foo---bar"), "foo-bar");
    }

    #[test]
    fn slug_trims_leading_trailing_hyphens() {
        assert_eq!(generate_slug("--hello--"), "hello");
    }

    #[test]
    fn slug_punctuation_only_is_empty() {
        assert_eq!(generate_slug("!!! ???"), "");
    }

    #[test]
    fn cyrillic_slug_is_non_empty() {
        assert!(!generate_slug("Новая лаборатория").is_empty());
    }

    // -- validate_slug -------------------------------------------------------

    #[test]
    fn slug_valid_ascii() {
        assert!(validate_slug("quantum-lab").is_ok());
    }

    #[test]
    fn slug_valid_cyrillic() {
        assert!(validate_slug("лаборатория-ии").is_ok());
    }

    #[test]
    fn slug_empty_rejected() {
        assert!(validate_slug("").is_err());
    }

    #[test]
    fn slug_uppercase_rejected() {
        assert!(validate_slug("Quantum-Lab").is_err());
    }

    #[test]
    fn slug_spaces_rejected() {
        assert!(validate_slug("quantum lab").is_err());
    }
}
