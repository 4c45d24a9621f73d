//! `[presets.blog]` options.
//!
//! # Example
//!
//! ```toml
//! [presets.blog]
//! show_reading_time = true
//! edit_url = "https://github.com/example/site/tree/main/"
//! on_inline_tags = "warn"
//! on_untruncated_blog_posts = "throw"
//!
//! [presets.blog.feed_options]
//! type = ["rss", "atom"]
//! xslt = true
//! ```

use crate::config::ConfigDiagnostics;
use crate::config::section::ReportingSeverity;
use crate::config::util::{check_http_url, check_relative_path};
use super::Toggle;
use macros::Config;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "presets.blog")]
pub struct BlogOptions {
    /// Posts directory, relative to the site root.
    pub path: PathBuf,

    /// URL segment the blog is served under. Empty serves it at the site root.
    pub route_base_path: String,

    /// Title of the blog index page.
    pub blog_title: String,

    /// Meta description of the blog index page.
    pub blog_description: String,

    /// Posts per index page.
    pub post_count_per_page: usize,

    /// Show the estimated reading time on each post.
    pub show_reading_time: bool,

    /// Base URL for "edit this page" links. Remove to hide them.
    pub edit_url: Option<String>,

    /// Tag definitions file, relative to `path`.
    pub tags: PathBuf,

    /// Author definitions file, relative to `path`.
    pub authors_map_path: PathBuf,

    /// Posts using tags missing from the tags file.
    pub on_inline_tags: ReportingSeverity,

    /// Posts declaring authors inline instead of by key.
    pub on_inline_authors: ReportingSeverity,

    /// Posts without a truncate marker.
    pub on_untruncated_blog_posts: ReportingSeverity,

    /// Syndication feeds, or `false` to disable them.
    #[config(skip)]
    pub feed_options: Toggle<FeedOptions>,
}

impl Default for BlogOptions {
    fn default() -> Self {
        Self {
            path: "blog".into(),
            route_base_path: "blog".into(),
            blog_title: "Blog".into(),
            blog_description: "Blog".into(),
            post_count_per_page: 10,
            show_reading_time: true,
            edit_url: None,
            tags: "tags.yml".into(),
            authors_map_path: "authors.yml".into(),
            on_inline_tags: ReportingSeverity::Warn,
            on_inline_authors: ReportingSeverity::Warn,
            on_untruncated_blog_posts: ReportingSeverity::Warn,
            feed_options: Toggle::default(),
        }
    }
}

impl BlogOptions {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        check_relative_path(&self.path, Self::FIELDS.path, diag);
        check_relative_path(&self.tags, Self::FIELDS.tags, diag);
        check_relative_path(&self.authors_map_path, Self::FIELDS.authors_map_path, diag);

        if self.route_base_path.contains(|c: char| c.is_whitespace() || c == '?' || c == '#') {
            diag.error_with_hint(
                Self::FIELDS.route_base_path,
                format!("`{}` is not a route segment", self.route_base_path),
                "use a plain path such as \"blog\"",
            );
        }
        if self.post_count_per_page == 0 {
            diag.error(
                Self::FIELDS.post_count_per_page,
                "must show at least one post per page",
            );
        }
        if let Some(edit_url) = &self.edit_url {
            check_http_url(edit_url, Self::FIELDS.edit_url, diag);
        }
        if let Some(feed) = self.feed_options.enabled() {
            feed.validate(diag);
        }
    }

    /// Route base with surrounding slashes removed (`""` for a root blog).
    pub fn route_base(&self) -> &str {
        self.route_base_path.trim_matches('/')
    }

    pub fn feed(&self) -> Option<&FeedOptions> {
        self.feed_options.enabled()
    }
}

/// Syndication feed options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "presets.blog.feed_options")]
pub struct FeedOptions {
    /// Feed formats to generate: rss | atom | json.
    #[serde(rename = "type")]
    #[config(name = "type")]
    pub types: BTreeSet<FeedFormat>,

    /// Style feeds with an XSLT stylesheet.
    pub xslt: bool,

    /// Feed title (defaults to the site title).
    pub title: Option<String>,

    /// Feed description.
    pub description: Option<String>,

    /// Feed copyright notice.
    pub copyright: Option<String>,

    /// Maximum number of posts per feed.
    #[config(default = "20")]
    pub limit: Option<usize>,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            types: BTreeSet::from([FeedFormat::Rss, FeedFormat::Atom]),
            xslt: false,
            title: None,
            description: None,
            copyright: None,
            limit: Some(20),
        }
    }
}

impl FeedOptions {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.types.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.types,
                "at least one feed format is required",
                "use `type = [\"rss\", \"atom\"]`, or `feed_options = false` to disable feeds",
            );
        }
        if self.limit == Some(0) {
            diag.warn(Self::FIELDS.limit, "a limit of 0 produces empty feeds");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedFormat {
    Rss,
    Atom,
    Json,
}

impl fmt::Display for FeedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Rss => "rss",
            Self::Atom => "atom",
            Self::Json => "json",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> BlogOptions {
        toml::from_str(content).unwrap()
    }

    #[test]
    fn test_defaults() {
        let blog = parse("");
        assert_eq!(blog.route_base(), "blog");
        assert_eq!(blog.post_count_per_page, 10);
        assert_eq!(blog.on_untruncated_blog_posts, ReportingSeverity::Warn);
        let feed = blog.feed().unwrap();
        assert!(feed.types.contains(&FeedFormat::Rss));
        assert!(feed.types.contains(&FeedFormat::Atom));

        let mut diag = ConfigDiagnostics::new();
        blog.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_feed_types_preserved_in_any_order() {
        let a = parse("[feed_options]\ntype = [\"rss\", \"atom\"]\nxslt = true");
        let b = parse("[feed_options]\ntype = [\"atom\", \"rss\"]\nxslt = true");
        let feed = a.feed().unwrap();
        assert_eq!(feed.types, BTreeSet::from([FeedFormat::Rss, FeedFormat::Atom]));
        assert!(feed.xslt);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_feed_types_rejected() {
        let blog = parse("[feed_options]\ntype = []");
        let mut diag = ConfigDiagnostics::new();
        blog.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(
            diag.errors()[0].field.as_str(),
            "presets.blog.feed_options.type"
        );
    }

    #[test]
    fn test_feed_disabled() {
        let blog = parse("feed_options = false");
        assert!(blog.feed().is_none());

        // Empty format set only matters while feeds are enabled.
        let mut diag = ConfigDiagnostics::new();
        blog.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_unknown_feed_format_rejected() {
        let result: Result<BlogOptions, _> = toml::from_str("[feed_options]\ntype = [\"rdf\"]");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_values() {
        let blog = parse(
            r#"path = "/var/blog"
post_count_per_page = 0
edit_url = "github.com/example"
route_base_path = "my blog""#,
        );
        let mut diag = ConfigDiagnostics::new();
        blog.validate(&mut diag);
        assert_eq!(diag.len(), 4);
    }

    #[test]
    fn test_root_route_base() {
        let blog = parse("route_base_path = \"/\"");
        assert_eq!(blog.route_base(), "");
    }

    #[test]
    fn test_policy_rejects_unknown_value() {
        let result: Result<BlogOptions, _> = toml::from_str("on_inline_tags = \"error\"");
        assert!(result.is_err());
    }
}
