//! Configuration file generation.
//!
//! Creates quire.toml and ignore files for new sites.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::{BlogOptions, FeedOptions, SiteConfig, ThemeOptions};

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Generate quire.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# quire configuration file (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# The URL and copyright below are placeholders.\n\n");

    // top-level keys, then [future], [i18n] and [theme_config.*]
    out.push_str(&SiteConfig::template_with_header());
    out.push('\n');

    // [[presets]] entry with the blog enabled and docs disabled
    out.push_str("[[presets]]\nname = \"classic\"\ndocs = false\n\n");

    out.push_str(&BlogOptions::template_with_header());
    out.push('\n');

    out.push_str(&FeedOptions::template_with_header());
    out.push('\n');

    out.push_str(&ThemeOptions::template_with_header());

    out
}

/// Write the default configuration to `root/file_name`.
pub fn write_config(root: &Path, file_name: &Path) -> Result<()> {
    let path = root.join(file_name);
    fs::write(&path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))
}

/// Write .gitignore and .ignore files with standard patterns
///
/// Existing ignore files are left untouched.
pub fn write_ignore_files(root: &Path) -> Result<()> {
    let content = ["/build/", "/node_modules/", ".DS_Store"].join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}
