//! `[presets.theme]` options.
//!
//! # Example
//!
//! ```toml
//! [presets.theme]
//! custom_css = "./src/css/custom.css"
//! # or several stylesheets, loaded in order
//! custom_css = ["./src/css/custom.css", "./src/css/print.css"]
//! ```

use crate::config::ConfigDiagnostics;
use crate::config::util::check_relative_path;
use macros::Config;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "presets.theme")]
pub struct ThemeOptions {
    /// Stylesheets appended after the theme's own CSS.
    #[serde(deserialize_with = "one_or_many")]
    #[config(default = "[\"./src/css/custom.css\"]")]
    pub custom_css: Vec<PathBuf>,
}

impl ThemeOptions {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for path in &self.custom_css {
            check_relative_path(path, Self::FIELDS.custom_css, diag);
        }
    }
}

/// Single path or list of paths.
#[derive(Deserialize)]
#[serde(untagged)]
enum PathEntries {
    One(PathBuf),
    Many(Vec<PathBuf>),
}

fn one_or_many<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<PathBuf>, D::Error> {
    Ok(match PathEntries::deserialize(deserializer)? {
        PathEntries::One(path) => vec![path],
        PathEntries::Many(paths) => paths,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_single_path() {
        let theme: ThemeOptions = toml::from_str("custom_css = \"./src/css/custom.css\"").unwrap();
        assert_eq!(theme.custom_css, vec![PathBuf::from("./src/css/custom.css")]);
    }

    #[test]
    fn test_path_list() {
        let theme: ThemeOptions =
            toml::from_str("custom_css = [\"src/css/a.css\", \"src/css/b.css\"]").unwrap();
        assert_eq!(theme.custom_css.len(), 2);
        assert_eq!(theme.custom_css[1], Path::new("src/css/b.css"));
    }

    #[test]
    fn test_default_is_empty() {
        let theme: ThemeOptions = toml::from_str("").unwrap();
        assert!(theme.custom_css.is_empty());
    }

    #[test]
    fn test_absolute_path_rejected() {
        let theme: ThemeOptions = toml::from_str("custom_css = \"/etc/custom.css\"").unwrap();
        let mut diag = ConfigDiagnostics::new();
        theme.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_template_lists_stylesheet() {
        let template = ThemeOptions::template_with_header();
        assert!(template.contains("[presets.theme]"));
        assert!(template.contains("custom_css = [\"./src/css/custom.css\"]"));
    }
}
