//! `quire validate`: enforce the site's reporting policies.
//!
//! Scans the blog, builds the table of known routes, collects every
//! [`Finding`] and then applies the configured [`ReportingSeverity`]:
//!
//! - `ignore`: dropped (listed under `--verbose`)
//! - `warn`: logged and returned in [`Outcome::warnings`]
//! - `throw`: reported, then the run fails
//!
//! Missing resources are always fatal: files named in the config are
//! checked up front by [`SiteConfig::check_resources`], images and author
//! keys referenced from posts become [`Check::MissingResource`] findings.

mod meta;
mod report;
mod routes;
mod scan;

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Result, bail};

use crate::cli::ValidateArgs;
use crate::config::{BlogOptions, ConfigError, ReportingSeverity, SiteConfig};
use crate::core::{LinkKind, strip_query_fragment};
use crate::utils::{clean_path, plural_count};
use crate::{debug, debug_do, log};

use meta::{AuthorRef, TagDefinition, TagRef, load_author_keys, load_tags, slugify};
use routes::{RouteTable, join_route, resolve_relative};
use scan::{ScannedPost, collect_posts, scan_posts};

pub use report::{Check, Finding};
use report::ValidationReport;

/// Result of a successful run.
#[derive(Debug, Default)]
pub struct Outcome {
    /// Findings reported at `warn`.
    pub warnings: Vec<Finding>,
    /// Number of blog posts scanned.
    pub posts: usize,
}

/// Run every policy check against the site at `config.root`.
pub fn validate_site(config: &SiteConfig, args: &ValidateArgs) -> Result<Outcome> {
    config
        .check_resources()
        .into_result()
        .map_err(ConfigError::Diagnostics)?;

    let (findings, posts) = collect_findings(config)?;
    log!(
        "validate";
        "checked {}, {}",
        plural_count(posts, "post"),
        plural_count(findings.len(), "finding")
    );

    let (warnings, report) = apply_policies(config, findings, args.warn_only);
    if !report.is_empty() {
        report.print();
        bail!(
            "validation failed: {}",
            plural_count(report.error_count(), "error")
        );
    }

    Ok(Outcome { warnings, posts })
}

/// Sort findings by their effective severity.
fn apply_policies(
    config: &SiteConfig,
    findings: Vec<Finding>,
    warn_only: bool,
) -> (Vec<Finding>, ValidationReport) {
    let blog = config.blog();
    let mut warnings = Vec::new();
    let mut report = ValidationReport::default();

    for finding in findings {
        let mut severity = finding.check.severity(config, blog);
        if warn_only && finding.check != Check::MissingResource {
            severity = severity.relaxed();
        }
        match severity {
            ReportingSeverity::Ignore => debug!("validate"; "ignored {finding}"),
            ReportingSeverity::Warn => {
                log!("warning"; "{finding}");
                warnings.push(finding);
            }
            ReportingSeverity::Throw => report.add(finding),
        }
    }
    (warnings, report)
}

/// Everything the checks found, plus the number of posts scanned.
fn collect_findings(config: &SiteConfig) -> Result<(Vec<Finding>, usize)> {
    let source = config_source(config);
    let mut findings = Vec::new();
    let mut table = RouteTable::new(&config.normalized_base_url());

    table.add_pages(&config.root_join("src/pages"));
    table.add_static_files(&config.root, &config.static_directories);

    if let Some(docs) = config.docs() {
        table.add_docs(
            &config.root_join(&docs.path),
            docs.route_base_path.trim_matches('/'),
        );
    }

    let mut posts = Vec::new();
    if let Some(blog) = config.blog() {
        let site = BlogSite::load(config, blog, &config.root_join(&blog.path))?;
        site.add_routes(&mut table);
        site.check_posts(blog, &mut findings);
        posts = site.posts;
    }
    debug!("validate"; "{} known routes", table.len());
    debug_do! {
        for route in table.sorted() {
            debug!("route"; "{route}");
        }
    }

    for post in &posts {
        check_post_links(post, &table, &mut findings);
    }
    for to in config.theme_config.routes() {
        if !table.contains(to) {
            findings.push(Finding::new(Check::BrokenLink, &source, to, "no page at this route"));
        }
    }

    Ok((findings, posts.len()))
}

/// Scanned blog content with its tags and authors files.
struct BlogSite {
    route_base: String,
    per_page: usize,
    posts: Vec<ScannedPost>,
    tags: Option<BTreeMap<String, TagDefinition>>,
    authors: Option<Vec<String>>,
}

impl BlogSite {
    fn load(config: &SiteConfig, blog: &BlogOptions, blog_dir: &Path) -> Result<Self> {
        let route_base = blog.route_base().to_string();
        let files = collect_posts(blog_dir);
        log!("validate"; "scanning {}", plural_count(files.len(), "post"));

        Ok(Self {
            posts: scan_posts(&files, &config.root, blog_dir, &route_base)?,
            tags: load_tags(&blog_dir.join(&blog.tags))?,
            authors: load_author_keys(&blog_dir.join(&blog.authors_map_path))?,
            per_page: blog.post_count_per_page.max(1),
            route_base,
        })
    }

    /// Blog index, archive, tag pages, pagination and post routes.
    fn add_routes(&self, table: &mut RouteTable) {
        let base = self.route_base.as_str();
        table.insert(&join_route(base, ""));
        table.insert(&join_route(base, "archive"));
        table.insert(&join_route(base, "tags"));

        let tag_route =
            |segment: &str| join_route(base, &format!("tags/{}", segment.trim_matches('/')));
        if let Some(tags) = &self.tags {
            for (key, def) in tags {
                let segment = match (&def.permalink, &def.label) {
                    (Some(permalink), _) => permalink.clone(),
                    (None, Some(label)) => slugify(label),
                    (None, None) => slugify(key),
                };
                table.insert(&tag_route(segment.as_str()));
            }
        }
        for post in &self.posts {
            table.insert(&post.route);
            for tag in &post.front.tags {
                let segment = match tag {
                    TagRef::Inline { permalink: Some(permalink), .. } => permalink.clone(),
                    TagRef::Inline { label, .. } => slugify(label),
                    TagRef::Key(key) => match self.tags.as_ref().and_then(|t| t.get(key)) {
                        Some(_) => continue,
                        None => slugify(key),
                    },
                };
                table.insert(&tag_route(segment.as_str()));
            }
        }

        let pages = self.posts.len().div_ceil(self.per_page);
        for page in 2..=pages {
            table.insert(&join_route(base, &format!("page/{page}")));
        }
    }

    /// Tag, author and truncation checks.
    fn check_posts(&self, blog: &BlogOptions, findings: &mut Vec<Finding>) {
        for post in &self.posts {
            self.check_post(post, blog, findings);
        }
    }

    fn check_post(&self, post: &ScannedPost, blog: &BlogOptions, findings: &mut Vec<Finding>) {
        if let Some(tags) = &self.tags {
            for tag in &post.front.tags {
                match tag {
                    TagRef::Key(key) if !tags.contains_key(key) => findings.push(Finding::new(
                        Check::InlineTag,
                        &post.source,
                        key,
                        format!("not declared in {}", blog.tags.display()),
                    )),
                    TagRef::Inline { label, .. } => findings.push(Finding::new(
                        Check::InlineTag,
                        &post.source,
                        label,
                        "defined inline",
                    )),
                    TagRef::Key(_) => {}
                }
            }
        }

        for author in post.front.authors() {
            match (&author, self.authors.as_deref()) {
                (AuthorRef::Inline(_), _) => findings.push(Finding::new(
                    Check::InlineAuthor,
                    &post.source,
                    author.name(),
                    "defined inline",
                )),
                (AuthorRef::Key(key), Some(keys)) if !keys.contains(key) => {
                    findings.push(Finding::new(
                        Check::MissingResource,
                        &post.source,
                        key,
                        format!("not in {}", blog.authors_map_path.display()),
                    ));
                }
                (AuthorRef::Key(key), None) => findings.push(Finding::new(
                    Check::MissingResource,
                    &post.source,
                    key,
                    format!("{} does not exist", blog.authors_map_path.display()),
                )),
                (AuthorRef::Key(_), Some(_)) => {}
            }
        }

        if !post.truncated {
            findings.push(Finding::new(
                Check::UntruncatedPost,
                &post.source,
                &post.route,
                "no truncate marker",
            ));
        }
    }
}

/// Links and images in a post body.
fn check_post_links(post: &ScannedPost, table: &RouteTable, findings: &mut Vec<Finding>) {
    for link in &post.links {
        let kind = LinkKind::parse(&link.dest);
        match kind {
            LinkKind::External(_) | LinkKind::Fragment(_) => {}
            LinkKind::SiteRoot(path) => {
                if !table.contains(path) {
                    let check = if link.image {
                        Check::MissingResource
                    } else {
                        Check::BrokenLink
                    };
                    findings.push(Finding::new(check, &post.source, path, "no page at this route"));
                }
            }
            LinkKind::FileRelative(raw) => {
                let path = strip_query_fragment(raw);
                if path.is_empty() {
                    continue;
                }
                let on_disk = clean_path(&post.dir().join(path));
                if kind.is_markdown_source() {
                    if !on_disk.is_file() {
                        findings.push(Finding::new(
                            Check::BrokenMarkdownLink,
                            &post.source,
                            raw,
                            "file not found",
                        ));
                    }
                } else if link.image {
                    if !on_disk.exists() {
                        findings.push(Finding::new(
                            Check::MissingResource,
                            &post.source,
                            raw,
                            "file not found",
                        ));
                    }
                } else if !on_disk.exists() && !table.contains(&resolve_relative(&post.route, path))
                {
                    findings.push(Finding::new(
                        Check::BrokenLink,
                        &post.source,
                        raw,
                        "no page at this route",
                    ));
                }
            }
        }
    }
}

/// Config file name as shown in reports.
fn config_source(config: &SiteConfig) -> String {
    config
        .config_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "quire.toml".to_string())
}
