//! `[theme_config.navbar]` configuration.
//!
//! # Example
//!
//! ```toml
//! [theme_config.navbar]
//! title = "Tech Articles"
//! logo = { alt = "logo", src = "img/logo.svg" }
//!
//! [[theme_config.navbar.items]]
//! to = "/blog"
//! label = "Articles"
//! position = "left"
//!
//! [[theme_config.navbar.items]]
//! href = "https://github.com/example"
//! label = "GitHub"
//! ```

use super::link::{LinkShapeError, LinkTarget, validate_link};
use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme_config.navbar")]
pub struct NavbarConfig {
    /// Text shown next to the logo.
    pub title: String,

    /// Navbar logo image.
    pub logo: Option<Logo>,

    /// Hide the navbar while scrolling down.
    pub hide_on_scroll: bool,

    /// Navbar entries, in display order.
    pub items: Vec<NavItem>,
}

impl NavbarConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(logo) = &self.logo {
            logo.validate(diag);
        }
        for item in &self.items {
            validate_link(item.label(), &item.target(), Self::FIELDS.items, diag);
        }
    }

    /// Site routes the navbar links to.
    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|item| match item {
            NavItem::Internal { to, .. } => Some(to.as_str()),
            NavItem::External { .. } => None,
        })
    }
}

/// Navbar logo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logo {
    /// Alternative text for the image.
    #[serde(default)]
    pub alt: String,
    /// Image URL or path relative to a static directory.
    pub src: String,
    /// Image used in dark mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_dark: Option<String>,
    /// Where clicking the logo leads (defaults to the site root).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl Logo {
    fn validate(&self, diag: &mut ConfigDiagnostics) {
        let field = NavbarConfig::FIELDS.logo;
        if self.src.trim().is_empty() {
            diag.error(field, "logo `src` must not be empty");
        }
        if self.alt.trim().is_empty() {
            diag.warn(field, "logo has no `alt` text");
        }
    }
}

/// Horizontal placement of a navbar item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavPosition {
    #[default]
    Left,
    Right,
}

/// Raw navbar item as written in TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawNavItem {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default)]
    pub position: NavPosition,
}

/// A navbar entry: a site route or an external link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNavItem", into = "RawNavItem")]
pub enum NavItem {
    Internal {
        to: String,
        label: String,
        position: NavPosition,
    },
    External {
        href: String,
        label: String,
        position: NavPosition,
    },
}

impl NavItem {
    pub fn label(&self) -> &str {
        match self {
            Self::Internal { label, .. } | Self::External { label, .. } => label,
        }
    }

    pub const fn position(&self) -> NavPosition {
        match self {
            Self::Internal { position, .. } | Self::External { position, .. } => *position,
        }
    }

    pub fn target(&self) -> LinkTarget {
        match self {
            Self::Internal { to, .. } => LinkTarget::Route(to.clone()),
            Self::External { href, .. } => LinkTarget::External(href.clone()),
        }
    }
}

impl TryFrom<RawNavItem> for NavItem {
    type Error = LinkShapeError;

    fn try_from(raw: RawNavItem) -> Result<Self, Self::Error> {
        let RawNavItem {
            label,
            to,
            href,
            position,
        } = raw;
        Ok(match LinkTarget::from_raw(to, href)? {
            LinkTarget::Route(to) => Self::Internal {
                to,
                label,
                position,
            },
            LinkTarget::External(href) => Self::External {
                href,
                label,
                position,
            },
        })
    }
}

impl From<NavItem> for RawNavItem {
    fn from(item: NavItem) -> Self {
        let position = item.position();
        let label = item.label().to_string();
        let (to, href) = item.target().into_raw();
        Self {
            label,
            to,
            href,
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SiteConfig, test_parse_config};

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        let navbar = &config.theme_config.navbar;
        assert!(navbar.title.is_empty());
        assert!(navbar.logo.is_none());
        assert!(navbar.items.is_empty());
    }

    #[test]
    fn test_items_both_variants() {
        let config = test_parse_config(
            r#"[theme_config.navbar]
title = "Tech Articles"
logo = { alt = "logo", src = "https://avatars.example.com/u/1" }

[[theme_config.navbar.items]]
to = "/blog"
label = "Articles"
position = "left"

[[theme_config.navbar.items]]
href = "https://github.com/example"
label = "GitHub"
position = "right""#,
        );
        let navbar = &config.theme_config.navbar;
        assert_eq!(navbar.items.len(), 2);
        assert_eq!(
            navbar.items[0],
            NavItem::Internal {
                to: "/blog".into(),
                label: "Articles".into(),
                position: NavPosition::Left,
            }
        );
        assert!(matches!(navbar.items[1], NavItem::External { .. }));
        assert_eq!(navbar.items[1].position(), NavPosition::Right);
        assert_eq!(navbar.routes().collect::<Vec<_>>(), vec!["/blog"]);

        let mut diag = ConfigDiagnostics::new();
        navbar.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_item_with_both_targets_rejected() {
        let content = r#"title = "T"
url = "https://x.example.com"

[[theme_config.navbar.items]]
to = "/blog"
href = "https://github.com"
label = "Both""#;
        let err = SiteConfig::from_str(content).unwrap_err();
        assert!(err.to_string().contains("both `to` and `href`"));
    }

    #[test]
    fn test_item_with_neither_target_rejected() {
        let content = r#"title = "T"
url = "https://x.example.com"

[[theme_config.navbar.items]]
label = "Nothing""#;
        let err = SiteConfig::from_str(content).unwrap_err();
        assert!(err.to_string().contains("neither `to` nor `href`"));
    }

    #[test]
    fn test_position_defaults_to_left() {
        let config = test_parse_config(
            "[[theme_config.navbar.items]]\nhref = \"https://github.com\"\nlabel = \"GitHub\"",
        );
        assert_eq!(
            config.theme_config.navbar.items[0].position(),
            NavPosition::Left
        );
    }

    #[test]
    fn test_serialize_keeps_single_target() {
        let item = NavItem::External {
            href: "https://github.com".into(),
            label: "GitHub".into(),
            position: NavPosition::Right,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["href"], "https://github.com");
        assert!(json.get("to").is_none());
    }
}
