//! `[[presets]]` entries: named bundles of docs, blog and theme options.
//!
//! # Example
//!
//! ```toml
//! [[presets]]
//! name = "classic"
//! docs = false
//!
//! [presets.blog]
//! show_reading_time = true
//!
//! [presets.theme]
//! custom_css = "./src/css/custom.css"
//! ```

pub mod blog;
mod docs;
mod theme;
mod toggle;

pub use blog::{BlogOptions, FeedOptions};
pub use docs::DocsOptions;
pub use theme::ThemeOptions;
pub use toggle::Toggle;

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Known preset bundles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetName {
    #[default]
    Classic,
}

impl fmt::Display for PresetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classic => f.write_str("classic"),
        }
    }
}

/// One `[[presets]]` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub name: PresetName,
    #[serde(default)]
    pub docs: Toggle<DocsOptions>,
    #[serde(default)]
    pub blog: Toggle<BlogOptions>,
    #[serde(default)]
    pub theme: ThemeOptions,
}

impl Preset {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(docs) = self.docs.enabled() {
            docs.validate(diag);
        }
        if let Some(blog) = self.blog.enabled() {
            blog.validate(diag);
        }
        self.theme.validate(diag);

        if let (Some(docs), Some(blog)) = (self.docs.enabled(), self.blog.enabled()) {
            let docs_base = docs.route_base_path.trim_matches('/');
            if docs_base == blog.route_base() {
                diag.referential(
                    BlogOptions::FIELDS.route_base_path,
                    format!("docs and blog are both served under `/{docs_base}`"),
                    "give `presets.docs.route_base_path` and `presets.blog.route_base_path` distinct values",
                );
            }
        }
    }
}

/// Validate every preset entry plus the cross-entry rules.
pub fn validate_presets(presets: &[Preset], diag: &mut ConfigDiagnostics) {
    let classic = presets
        .iter()
        .filter(|p| p.name == PresetName::Classic)
        .count();
    if classic > 1 {
        diag.referential(
            FieldPath::new("presets"),
            format!("`classic` preset declared {classic} times"),
            "merge the entries into a single [[presets]] table",
        );
    }
    for preset in presets {
        preset.validate(diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::config::types::error::ViolationKind;

    #[test]
    fn test_classic_blog_only() {
        let config = test_parse_config(
            r#"[[presets]]
name = "classic"
docs = false

[presets.blog]
show_reading_time = true

[presets.theme]
custom_css = "./src/css/custom.css""#,
        );
        let preset = &config.presets[0];
        assert_eq!(preset.name, PresetName::Classic);
        assert!(preset.docs.enabled().is_none());
        assert!(preset.blog.enabled().unwrap().show_reading_time);
        assert_eq!(preset.theme.custom_css.len(), 1);

        let mut diag = ConfigDiagnostics::new();
        validate_presets(&config.presets, &mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_unknown_preset_rejected() {
        let result: Result<Preset, _> = toml::from_str("name = \"minimal\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_classic() {
        let config = test_parse_config(
            "[[presets]]\nname = \"classic\"\n\n[[presets]]\nname = \"classic\"\ndocs = false",
        );
        let mut diag = ConfigDiagnostics::new();
        validate_presets(&config.presets, &mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].kind, ViolationKind::Referential);
    }

    #[test]
    fn test_route_collision() {
        let config = test_parse_config(
            r#"[[presets]]
name = "classic"

[presets.docs]
route_base_path = "notes"

[presets.blog]
route_base_path = "/notes/""#,
        );
        let mut diag = ConfigDiagnostics::new();
        validate_presets(&config.presets, &mut diag);
        assert_eq!(diag.len(), 1);
    }
}
