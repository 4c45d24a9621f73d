//! Blog post scanning: front matter, links and truncation markers.

use super::meta::{FrontMatter, parse_front_matter, split_front_matter};
use super::routes::{collect_files, is_partial, join_route};
use crate::utils::to_slash;
use anyhow::{Context, Result};
use pulldown_cmark::{Event, Options, Parser, Tag};
use rayon::prelude::*;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// `<!-- truncate -->` (Markdown) or `{/* truncate */}` (MDX).
static TRUNCATE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<!--[ \t\r\n]*truncate[ \t\r\n]*-->|\{/\*[ \t\r\n]*truncate[ \t\r\n]*\*/\}")
        .unwrap()
});

/// Date prefix in a post path: `2024-01-01-hello`, `2024/01/01/hello`,
/// `2024-01-01-hello/index`.
static DATED_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<folder>.*?)(?P<y>[0-9]{4})[-/](?P<m>[0-9]{2})[-/](?P<d>[0-9]{2})[-/]?(?P<text>.*?)(?:/index)?$",
    )
    .unwrap()
});

/// A link extracted from a post body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedLink {
    pub dest: String,
    /// `![alt](src)` rather than `[text](href)`.
    pub image: bool,
}

/// Result of scanning a single post.
#[derive(Debug)]
pub struct ScannedPost {
    /// Absolute path of the source file.
    pub file: PathBuf,
    /// Source path relative to the site root, slash separated.
    pub source: String,
    /// Route below the site's `base_url`, e.g. `/blog/2024/01/01/hello`.
    pub route: String,
    pub front: FrontMatter,
    pub links: Vec<ScannedLink>,
    pub truncated: bool,
}

impl ScannedPost {
    /// Directory containing the source file.
    pub fn dir(&self) -> &Path {
        self.file.parent().unwrap_or(Path::new(""))
    }
}

/// Every `.md` / `.mdx` file below the blog directory, sorted. Files and
/// directories starting with `_` are partials, not posts.
pub fn collect_posts(blog_dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<_> = collect_files(blog_dir)
        .into_iter()
        .filter(|p| p.extension().is_some_and(|e| e == "md" || e == "mdx"))
        .filter(|p| p.strip_prefix(blog_dir).is_ok_and(|rel| !is_partial(rel)))
        .collect();
    files.sort();
    files
}

/// Scan all posts in parallel. Fails on the first unreadable file or
/// malformed front matter.
pub fn scan_posts(
    files: &[PathBuf],
    root: &Path,
    blog_dir: &Path,
    route_base: &str,
) -> Result<Vec<ScannedPost>> {
    files
        .par_iter()
        .map(|file| scan_post(file, root, blog_dir, route_base))
        .collect()
}

fn scan_post(file: &Path, root: &Path, blog_dir: &Path, route_base: &str) -> Result<ScannedPost> {
    let content =
        fs::read_to_string(file).with_context(|| format!("Failed to read '{}'", file.display()))?;
    let source = to_slash(file.strip_prefix(root).unwrap_or(file));

    let (front, body) = split_front_matter(&content);
    let front = parse_front_matter(front.unwrap_or_default())
        .with_context(|| format!("Invalid front matter in '{source}'"))?;

    let rel = file.strip_prefix(blog_dir).unwrap_or(file);
    let route = match &front.slug {
        Some(slug) => join_route(route_base, slug),
        None => post_route(route_base, rel),
    };

    Ok(ScannedPost {
        file: file.to_path_buf(),
        source,
        route,
        links: extract_links(body),
        truncated: TRUNCATE_MARKER.is_match(body),
        front,
    })
}

/// Route of a post from its path inside the blog directory.
///
/// ```ignore
/// post_route("blog", "2024-01-01-hello.md")       -> "/blog/2024/01/01/hello"
/// post_route("blog", "2024-01-01-hello/index.md") -> "/blog/2024/01/01/hello"
/// post_route("blog", "notes/intro.md")            -> "/blog/notes/intro"
/// ```
pub fn post_route(route_base: &str, rel: &Path) -> String {
    let path = to_slash(&rel.with_extension(""));
    if let Some(caps) = DATED_PATH.captures(&path) {
        let rest = format!(
            "{}{}/{}/{}/{}",
            &caps["folder"], &caps["y"], &caps["m"], &caps["d"], &caps["text"]
        );
        return join_route(route_base, &rest);
    }
    let path = path.strip_suffix("/index").unwrap_or(&path);
    let path = if path == "index" { "" } else { path };
    join_route(route_base, path)
}

/// Link and image destinations in a Markdown body.
pub fn extract_links(body: &str) -> Vec<ScannedLink> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    Parser::new_ext(body, options)
        .filter_map(|event| match event {
            Event::Start(Tag::Link { dest_url, .. }) => Some(ScannedLink {
                dest: dest_url.into_string(),
                image: false,
            }),
            Event::Start(Tag::Image { dest_url, .. }) => Some(ScannedLink {
                dest: dest_url.into_string(),
                image: true,
            }),
            _ => None,
        })
        .filter(|link| !link.dest.is_empty())
        .collect()
}
