//! Link items shared by the navbar and the footer.
//!
//! An item points either at a site route (`to`) or at an external URL
//! (`href`), never both. The raw shape is checked during deserialization,
//! so a parsed config only ever holds one of the two variants.

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::LinkKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a raw link item was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LinkShapeError {
    #[error("link item sets both `to` and `href`, use `to` for site routes or `href` for external URLs")]
    Both,
    #[error("link item sets neither `to` nor `href`")]
    Neither,
}

/// Where a link item points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Site route, resolved against `base_url`.
    Route(String),
    /// Absolute URL, left untouched.
    External(String),
}

impl LinkTarget {
    /// Pick the target from the raw optional fields.
    pub fn from_raw(to: Option<String>, href: Option<String>) -> Result<Self, LinkShapeError> {
        match (to, href) {
            (Some(to), None) => Ok(Self::Route(to)),
            (None, Some(href)) => Ok(Self::External(href)),
            (Some(_), Some(_)) => Err(LinkShapeError::Both),
            (None, None) => Err(LinkShapeError::Neither),
        }
    }

    /// Split back into `(to, href)` for serialization.
    pub fn into_raw(self) -> (Option<String>, Option<String>) {
        match self {
            Self::Route(to) => (Some(to), None),
            Self::External(href) => (None, Some(href)),
        }
    }
}

/// Validate one link item's label and target.
pub fn validate_link(
    label: &str,
    target: &LinkTarget,
    field: FieldPath,
    diag: &mut ConfigDiagnostics,
) {
    if label.trim().is_empty() {
        diag.error(field, "link label must not be empty");
    }

    match target {
        LinkTarget::Route(to) => match LinkKind::parse(to) {
            LinkKind::External(_) => diag.error_with_hint(
                field,
                format!("`to = \"{to}\"` is an external URL"),
                "use `href` for external links",
            ),
            LinkKind::SiteRoot(_) => {}
            _ => diag.error_with_hint(
                field,
                format!("`to = \"{to}\"` is not a site route"),
                "routes start with `/`, e.g. \"/blog\"",
            ),
        },
        LinkTarget::External(href) => {
            if !matches!(LinkKind::parse(href), LinkKind::External(_)) {
                diag.error_with_hint(
                    field,
                    format!("`href = \"{href}\"` is not an absolute URL"),
                    "use `to` for site routes",
                );
            } else if url::Url::parse(href).is_err() {
                diag.error(field, format!("`href = \"{href}\"` is not a valid URL"));
            }
        }
    }
}

/// Raw footer link as written in TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawFooterLink {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// A footer link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFooterLink", into = "RawFooterLink")]
pub enum FooterLink {
    Internal { label: String, to: String },
    External { label: String, href: String },
}

impl FooterLink {
    pub fn label(&self) -> &str {
        match self {
            Self::Internal { label, .. } | Self::External { label, .. } => label,
        }
    }

    pub fn target(&self) -> LinkTarget {
        match self {
            Self::Internal { to, .. } => LinkTarget::Route(to.clone()),
            Self::External { href, .. } => LinkTarget::External(href.clone()),
        }
    }
}

impl TryFrom<RawFooterLink> for FooterLink {
    type Error = LinkShapeError;

    fn try_from(raw: RawFooterLink) -> Result<Self, Self::Error> {
        let label = raw.label;
        Ok(match LinkTarget::from_raw(raw.to, raw.href)? {
            LinkTarget::Route(to) => Self::Internal { label, to },
            LinkTarget::External(href) => Self::External { label, href },
        })
    }
}

impl From<FooterLink> for RawFooterLink {
    fn from(link: FooterLink) -> Self {
        match link {
            FooterLink::Internal { label, to } => Self {
                label,
                to: Some(to),
                href: None,
            },
            FooterLink::External { label, href } => Self {
                label,
                to: None,
                href: Some(href),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw() {
        assert_eq!(
            LinkTarget::from_raw(Some("/blog".into()), None),
            Ok(LinkTarget::Route("/blog".into()))
        );
        assert_eq!(
            LinkTarget::from_raw(None, Some("https://github.com".into())),
            Ok(LinkTarget::External("https://github.com".into()))
        );
        assert_eq!(
            LinkTarget::from_raw(Some("/blog".into()), Some("https://github.com".into())),
            Err(LinkShapeError::Both)
        );
        assert_eq!(LinkTarget::from_raw(None, None), Err(LinkShapeError::Neither));
    }

    #[test]
    fn test_validate_link() {
        let field = FieldPath::new("theme_config.footer.links");
        let mut diag = ConfigDiagnostics::new();

        validate_link("Blog", &LinkTarget::Route("/blog".into()), field, &mut diag);
        validate_link(
            "GitHub",
            &LinkTarget::External("https://github.com/quire".into()),
            field,
            &mut diag,
        );
        validate_link(
            "Mail",
            &LinkTarget::External("mailto:me@example.com".into()),
            field,
            &mut diag,
        );
        assert!(diag.is_empty());

        validate_link("", &LinkTarget::Route("/blog".into()), field, &mut diag);
        validate_link(
            "Oops",
            &LinkTarget::Route("https://github.com".into()),
            field,
            &mut diag,
        );
        validate_link("Rel", &LinkTarget::Route("blog".into()), field, &mut diag);
        validate_link("Ext", &LinkTarget::External("/blog".into()), field, &mut diag);
        assert_eq!(diag.len(), 4);
    }

    #[test]
    fn test_footer_link_shape() {
        #[derive(Deserialize)]
        struct Wrapper {
            link: FooterLink,
        }

        let ok: Wrapper = toml::from_str("link = { label = \"Blog\", to = \"/blog\" }").unwrap();
        assert_eq!(ok.link.label(), "Blog");
        assert_eq!(ok.link.target(), LinkTarget::Route("/blog".into()));

        let both: Result<Wrapper, _> =
            toml::from_str("link = { label = \"X\", to = \"/x\", href = \"https://x.io\" }");
        assert!(both.is_err());

        let neither: Result<Wrapper, _> = toml::from_str("link = { label = \"X\" }");
        assert!(neither.is_err());
    }
}
