//! Link classification utilities.
//!
//! Used by the config checks (navbar/footer targets, social card image) and
//! by `quire validate` when it walks the links of every post.

/// Syntactic classification of links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// External link with URL scheme (https://, mailto:, tel:, etc.)
    External(&'a str),
    /// Pure fragment/anchor link (#section). Value is anchor without `#`.
    Fragment(&'a str),
    /// Site-root-relative path (/blog, /blog/tags/rust).
    SiteRoot(&'a str),
    /// File-relative path (./other-post.md, ../img/diagram.png).
    FileRelative(&'a str),
}

impl<'a> LinkKind<'a> {
    /// Parse a link string into its syntactic kind.
    #[inline]
    pub fn parse(link: &'a str) -> Self {
        if is_external_link(link) {
            Self::External(link)
        } else if let Some(anchor) = link.strip_prefix('#') {
            Self::Fragment(anchor)
        } else if let Some(anchor) = link.strip_prefix("./#") {
            // ./#fragment is the current page anchor
            Self::Fragment(anchor)
        } else if link.starts_with('/') {
            Self::SiteRoot(link)
        } else {
            Self::FileRelative(link)
        }
    }

    /// Whether a file-relative link points at a Markdown source
    /// (`./intro.md`, `../2024-01-01-post.mdx#setup`).
    pub fn is_markdown_source(&self) -> bool {
        match self {
            Self::FileRelative(link) => {
                let path = strip_query_fragment(link);
                path.ends_with(".md") || path.ends_with(".mdx")
            }
            _ => false,
        }
    }
}

/// Check whether a link carries a URL scheme (`https:`, `mailto:`, ...).
///
/// A scheme is `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )` before the
/// first `:`, so `C:/path` style strings also count as external.
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Drop `?query` and `#fragment` from a link.
///
/// ```ignore
/// strip_query_fragment("/blog?page=2#top") -> "/blog"
/// strip_query_fragment("./post.md#setup")  -> "./post.md"
/// ```
pub fn strip_query_fragment(link: &str) -> &str {
    let end = link.find(['?', '#']).unwrap_or(link.len());
    &link[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_external() {
        assert!(matches!(
            LinkKind::parse("https://github.com/example"),
            LinkKind::External("https://github.com/example")
        ));
        assert!(matches!(
            LinkKind::parse("mailto:user@example.com"),
            LinkKind::External(_)
        ));
    }

    #[test]
    fn test_parse_fragment() {
        assert!(matches!(
            LinkKind::parse("#section"),
            LinkKind::Fragment("section")
        ));
        assert!(matches!(LinkKind::parse("#"), LinkKind::Fragment("")));
        assert!(matches!(
            LinkKind::parse("./#setup"),
            LinkKind::Fragment("setup")
        ));
    }

    #[test]
    fn test_parse_site_root_and_relative() {
        assert!(matches!(
            LinkKind::parse("/blog/tags/rust"),
            LinkKind::SiteRoot("/blog/tags/rust")
        ));
        assert!(matches!(
            LinkKind::parse("../img/diagram.png"),
            LinkKind::FileRelative("../img/diagram.png")
        ));
        assert!(matches!(
            LinkKind::parse("post.md"),
            LinkKind::FileRelative("post.md")
        ));
    }

    #[test]
    fn test_markdown_source() {
        assert!(LinkKind::parse("./intro.md").is_markdown_source());
        assert!(LinkKind::parse("../2024-01-01-post.mdx#setup").is_markdown_source());
        assert!(!LinkKind::parse("./diagram.png").is_markdown_source());
        assert!(!LinkKind::parse("/blog/post.md").is_markdown_source());
        assert!(!LinkKind::parse("https://example.com/readme.md").is_markdown_source());
    }

    #[test]
    fn test_strip_query_fragment() {
        assert_eq!(strip_query_fragment("/blog?page=2#top"), "/blog");
        assert_eq!(strip_query_fragment("./post.md#setup"), "./post.md");
        assert_eq!(strip_query_fragment("/about"), "/about");
        assert_eq!(strip_query_fragment("#only"), "");
    }
}
