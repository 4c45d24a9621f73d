//! `[theme_config.footer]` configuration.

use super::link::{FooterLink, validate_link};
use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme_config.footer")]
pub struct FooterConfig {
    /// Color scheme: light | dark.
    pub style: FooterStyle,

    /// Link columns, in display order.
    pub links: Vec<FooterLinkGroup>,

    /// Copyright line (may contain inline HTML).
    pub copyright: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    #[default]
    Light,
    Dark,
}

/// One titled column of footer links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterLinkGroup {
    pub title: Option<String>,
    pub items: Vec<FooterLink>,
}

impl FooterConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for group in &self.links {
            if group.items.is_empty() {
                diag.warn(
                    Self::FIELDS.links,
                    format!(
                        "link group {} has no items",
                        group.title.as_deref().unwrap_or("(untitled)")
                    ),
                );
            }
            for link in &group.items {
                validate_link(link.label(), &link.target(), Self::FIELDS.links, diag);
            }
        }
    }

    /// Site routes the footer links to.
    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.links
            .iter()
            .flat_map(|group| &group.items)
            .filter_map(|link| match link {
                FooterLink::Internal { to, .. } => Some(to.as_str()),
                FooterLink::External { .. } => None,
            })
    }
}
