//! `[theme_config.prism]` code highlighting configuration.
//!
//! # Example
//!
//! ```toml
//! [theme_config.prism]
//! theme = "github"
//! dark_theme = "dracula"
//! additional_languages = ["java", "powershell"]
//! ```

use crate::config::ConfigDiagnostics;
use macros::Config;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Highlighter language identifiers: `java`, `c-like`, `objectivec`, ...
static LANGUAGE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9+#_-]*$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme_config.prism")]
pub struct PrismConfig {
    /// Theme used in light mode.
    pub theme: PrismTheme,

    /// Theme used in dark mode.
    pub dark_theme: PrismTheme,

    /// Languages loaded on top of the highlighter's default bundle.
    pub additional_languages: BTreeSet<String>,
}

impl Default for PrismConfig {
    fn default() -> Self {
        Self {
            theme: PrismTheme::Github,
            dark_theme: PrismTheme::Dracula,
            additional_languages: BTreeSet::new(),
        }
    }
}

impl PrismConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for lang in &self.additional_languages {
            if !LANGUAGE_ID.is_match(lang) {
                diag.error_with_hint(
                    Self::FIELDS.additional_languages,
                    format!("`{lang}` is not a language identifier"),
                    "use lowercase identifiers such as \"java\" or \"powershell\"",
                );
            }
        }
        if self.theme == self.dark_theme {
            diag.warn(
                Self::FIELDS.dark_theme,
                format!("light and dark mode both use the `{}` theme", self.theme.name()),
            );
        }
    }
}

/// Bundled highlighter themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PrismTheme {
    Dracula,
    DuotoneDark,
    DuotoneLight,
    Github,
    GruvboxMaterialDark,
    GruvboxMaterialLight,
    JettwaveDark,
    JettwaveLight,
    NightOwl,
    NightOwlLight,
    OceanicNext,
    Okaidia,
    OneDark,
    OneLight,
    Palenight,
    ShadesOfPurple,
    Synthwave84,
    Ultramin,
    VsDark,
    VsLight,
}

impl PrismTheme {
    /// Name as written in the config file.
    pub fn name(self) -> String {
        toml::Value::try_from(self)
            .ok()
            .and_then(|v| v.as_str().map(str::to_owned))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        let prism = &config.theme_config.prism;
        assert_eq!(prism.theme, PrismTheme::Github);
        assert_eq!(prism.dark_theme, PrismTheme::Dracula);
        assert!(prism.additional_languages.is_empty());
    }

    #[test]
    fn test_custom_themes_and_languages() {
        let config = test_parse_config(
            r#"[theme_config.prism]
theme = "vsLight"
dark_theme = "nightOwl"
additional_languages = ["java", "javascript", "typescript", "python", "powershell", "java"]"#,
        );
        let prism = &config.theme_config.prism;
        assert_eq!(prism.theme, PrismTheme::VsLight);
        assert_eq!(prism.dark_theme, PrismTheme::NightOwl);
        // Set semantics: the duplicate collapses.
        assert_eq!(prism.additional_languages.len(), 5);
        assert!(prism.additional_languages.contains("powershell"));

        let mut diag = ConfigDiagnostics::new();
        prism.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let result: Result<PrismConfig, _> = toml::from_str("theme = \"solarized\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_language_identifier() {
        let config = test_parse_config(
            "[theme_config.prism]\nadditional_languages = [\"Java\", \"power shell\", \"c++\"]",
        );
        let mut diag = ConfigDiagnostics::new();
        config.theme_config.prism.validate(&mut diag);
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_theme_name() {
        assert_eq!(PrismTheme::Github.name(), "github");
        assert_eq!(PrismTheme::NightOwlLight.name(), "nightOwlLight");
        assert_eq!(PrismTheme::Synthwave84.name(), "synthwave84");
    }
}
