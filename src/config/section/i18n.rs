//! `[i18n]` section configuration.
//!
//! Even single-language sites set this: the default locale ends up in the
//! `lang` attribute of every page.
//!
//! # Example
//!
//! ```toml
//! [i18n]
//! default_locale = "en"
//! locales = ["en", "zh-Hans"]
//! ```

use crate::config::ConfigDiagnostics;
use macros::Config;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "i18n")]
pub struct I18nConfig {
    /// Locale used when no locale prefix is present (BCP 47 tag).
    pub default_locale: String,

    /// All locales the site is built for, in display order.
    pub locales: Vec<String>,

    /// Directory holding translation files, relative to the site root.
    pub path: PathBuf,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".into(),
            locales: vec!["en".into()],
            path: "i18n".into(),
        }
    }
}

impl I18nConfig {
    /// Validate locale settings.
    ///
    /// # Checks
    /// - `default_locale` and every locale are non-empty tags
    /// - `locales` has no duplicates
    /// - `default_locale` is one of `locales`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.default_locale.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.default_locale,
                "default locale must not be empty",
                "use a BCP 47 tag, e.g. \"en\"",
            );
        }

        if self.locales.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.locales,
                "at least one locale is required",
                format!("set {} = [\"{}\"]", Self::FIELDS.locales, self.default_locale),
            );
            return;
        }

        let mut seen = FxHashSet::default();
        for locale in &self.locales {
            if locale.trim().is_empty() {
                diag.error(Self::FIELDS.locales, "locale tags must not be empty");
            } else if !seen.insert(locale.as_str()) {
                diag.error(
                    Self::FIELDS.locales,
                    format!("locale `{locale}` is listed more than once"),
                );
            }
        }

        if !self.default_locale.trim().is_empty() && !self.contains(&self.default_locale) {
            diag.referential(
                Self::FIELDS.default_locale,
                format!(
                    "default locale `{}` is not one of {:?}",
                    self.default_locale, self.locales
                ),
                format!(
                    "add `{}` to {} or pick one of the listed locales",
                    self.default_locale,
                    Self::FIELDS.locales
                ),
            );
        }
    }

    /// Whether `locale` is one of the configured locales.
    pub fn contains(&self, locale: &str) -> bool {
        self.locales.iter().any(|l| l == locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::config::types::error::ViolationKind;

    fn check(config: &I18nConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        diag
    }

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.i18n.default_locale, "en");
        assert_eq!(config.i18n.locales, vec!["en".to_string()]);
        assert!(check(&config.i18n).is_empty());
    }

    #[test]
    fn test_custom_locales() {
        let config =
            test_parse_config("[i18n]\ndefault_locale = \"zh-Hans\"\nlocales = [\"en\", \"zh-Hans\"]");
        assert!(config.i18n.contains("zh-Hans"));
        assert_eq!(config.i18n.locales.len(), 2);
        assert!(check(&config.i18n).is_empty());
    }

    #[test]
    fn test_default_locale_outside_locales() {
        let config = test_parse_config("[i18n]\ndefault_locale = \"fr\"\nlocales = [\"en\"]");
        let diag = check(&config.i18n);
        assert_eq!(diag.len(), 1);
        let err = &diag.errors()[0];
        assert_eq!(err.kind, ViolationKind::Referential);
        assert_eq!(err.field.as_str(), "i18n.default_locale");
    }

    #[test]
    fn test_empty_and_duplicate_locales() {
        let empty = I18nConfig {
            locales: Vec::new(),
            ..I18nConfig::default()
        };
        assert_eq!(check(&empty).len(), 1);

        let duplicated = I18nConfig {
            locales: vec!["en".into(), "en".into()],
            ..I18nConfig::default()
        };
        let diag = check(&duplicated);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("more than once"));
    }
}
