//! `quire check`: print what the validated configuration resolves to.

use crate::config::SiteConfig;
use crate::log;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;

/// Print a summary of the loaded config, or the full config as JSON.
pub fn check_config(config: &SiteConfig, json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(config).context("Failed to serialize config")?;
        println!("{out}");
        return Ok(());
    }

    log!("check"; "{} is valid", config.root_relative(&config.config_path).display());
    for (label, value) in summary(config) {
        println!("  {:<12} {}", label.dimmed(), value);
    }
    Ok(())
}

/// Key facts about the site, in display order.
fn summary(config: &SiteConfig) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("title", config.title.clone()),
        (
            "url",
            format!("{}{}", config.url.trim_end_matches('/'), config.normalized_base_url()),
        ),
        (
            "locales",
            format!(
                "{} (default {})",
                config.i18n.locales.join(", "),
                config.i18n.default_locale
            ),
        ),
    ];

    match config.blog() {
        Some(blog) => {
            rows.push(("blog", config.route(blog.route_base())));
            let feeds = blog.feed().map_or_else(
                || "disabled".to_string(),
                |feed| {
                    feed.types
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ")
                },
            );
            rows.push(("feeds", feeds));
            if let Some(edit) = config.edit_url_for(&blog.path) {
                rows.push(("edit", edit));
            }
        }
        None => rows.push(("blog", "disabled".to_string())),
    }
    if let Some(docs) = config.docs() {
        rows.push(("docs", config.route(&docs.route_base_path)));
    }

    rows.push((
        "links",
        format!(
            "broken links: {}, broken markdown links: {}",
            config.on_broken_links, config.on_broken_markdown_links
        ),
    ));
    rows.push((
        "navbar",
        crate::utils::plural_count(config.theme_config.navbar.items.len(), "item"),
    ));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_summary_blog_site() {
        let config = test_parse_config(
            r#"base_url = "/articles/"

[[presets]]
name = "classic"
docs = false

[presets.blog.feed_options]
type = ["atom", "json"]"#,
        );
        let rows = summary(&config);
        let get = |key: &str| {
            rows.iter()
                .find(|(label, _)| *label == key)
                .map(|(_, v)| v.clone())
                .unwrap()
        };
        assert_eq!(get("url"), "https://example.com/articles/");
        assert_eq!(get("blog"), "/articles/blog");
        assert_eq!(get("feeds"), "atom, json");
        assert_eq!(get("navbar"), "0 items");
        assert!(rows.iter().all(|(label, _)| *label != "docs"));
    }

    #[test]
    fn test_summary_without_presets() {
        let config = test_parse_config("");
        let rows = summary(&config);
        assert!(rows.contains(&("blog", "disabled".to_string())));
    }

    #[test]
    fn test_json_output_shape() {
        let config = test_parse_config(
            "[[presets]]\nname = \"classic\"\ndocs = false\n\n[presets.blog]\nfeed_options = false",
        );
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["title"], "Test");
        assert_eq!(value["presets"][0]["docs"], false);
        assert_eq!(value["presets"][0]["blog"]["feed_options"], false);
        assert!(value.get("config_path").is_none());
    }
}
