//! Known site routes, used to decide whether an internal link is broken.
//!
//! Routes are stored without `base_url`, without a trailing slash, and with
//! a leading slash: `/`, `/blog`, `/blog/tags/rust`, `/img/logo.svg`.

use crate::core::strip_query_fragment;
use crate::utils::to_slash;
use jwalk::WalkDir;
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};

/// Source extensions that become pages under `src/pages`.
const PAGE_EXTENSIONS: &[&str] = &["md", "mdx", "js", "jsx", "ts", "tsx", "html"];

#[derive(Debug, Default)]
pub struct RouteTable {
    routes: FxHashSet<String>,
    /// `base_url` without its trailing slash (`""` for `/`).
    base_prefix: String,
}

impl RouteTable {
    pub fn new(base_url: &str) -> Self {
        let mut table = Self {
            routes: FxHashSet::default(),
            base_prefix: base_url.trim_end_matches('/').to_string(),
        };
        table.insert("/");
        table
    }

    pub fn insert(&mut self, route: &str) {
        self.routes.insert(normalize_route(route));
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether a site-root link resolves to a known route.
    ///
    /// Query and fragment are ignored; links may or may not carry `base_url`.
    pub fn contains(&self, link: &str) -> bool {
        let path = strip_query_fragment(link);
        let path = match path.strip_prefix(self.base_prefix.as_str()) {
            Some(rest) if !self.base_prefix.is_empty() && (rest.is_empty() || rest.starts_with('/')) => {
                rest
            }
            _ => path,
        };
        self.routes.contains(&normalize_route(path))
    }

    /// Routes in sorted order (for `--verbose` output and tests).
    pub fn sorted(&self) -> Vec<&str> {
        let mut routes: Vec<_> = self.routes.iter().map(String::as_str).collect();
        routes.sort_unstable();
        routes
    }

    /// Add every file below each static directory as `/relative/path`.
    pub fn add_static_files(&mut self, root: &Path, static_dirs: &[PathBuf]) {
        for dir in static_dirs {
            let dir = root.join(dir);
            for file in collect_files(&dir) {
                if let Ok(rel) = file.strip_prefix(&dir) {
                    self.insert(&to_slash(rel));
                }
            }
        }
    }

    /// Add pages from `src/pages`: `index` maps to its directory, files and
    /// directories starting with `_` are skipped.
    pub fn add_pages(&mut self, pages_dir: &Path) {
        for file in collect_files(pages_dir) {
            let Ok(rel) = file.strip_prefix(pages_dir) else {
                continue;
            };
            let hidden = is_partial(rel);
            let is_page = rel
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| PAGE_EXTENSIONS.contains(&e));
            if !hidden && is_page {
                self.insert(&document_route("", rel));
            }
        }
    }

    /// Add docs pages below `route_base`, skipping `_` partials.
    pub fn add_docs(&mut self, docs_dir: &Path, route_base: &str) {
        self.insert(route_base);
        for file in collect_files(docs_dir) {
            if let Ok(rel) = file.strip_prefix(docs_dir)
                && !is_partial(rel)
                && rel
                    .extension()
                    .is_some_and(|e| e == "md" || e == "mdx")
            {
                self.insert(&document_route(route_base, rel));
            }
        }
    }
}

/// Whether any component of `rel` starts with `_` (partials and drafts,
/// never published on their own).
pub fn is_partial(rel: &Path) -> bool {
    rel.components()
        .any(|c| c.as_os_str().to_string_lossy().starts_with('_'))
}

/// Route of a source document: extension dropped, `index` / `README`
/// collapsed into the parent directory.
///
/// ```ignore
/// document_route("docs", "guide/index.md") -> "/docs/guide"
/// document_route("", "about.tsx")          -> "/about"
/// ```
pub fn document_route(base: &str, rel: &Path) -> String {
    let without_ext = rel.with_extension("");
    let mut path = to_slash(&without_ext);
    for suffix in ["index", "README"] {
        if path == suffix {
            path.clear();
        } else if let Some(parent) = path.strip_suffix(&format!("/{suffix}")) {
            path = parent.to_string();
        }
    }
    join_route(base, &path)
}

/// Join route segments into `/a/b` form.
pub fn join_route(base: &str, rest: &str) -> String {
    normalize_route(&format!("/{}/{}", base.trim_matches('/'), rest.trim_matches('/')))
}

/// Resolve a relative link against the route of the page containing it.
///
/// ```ignore
/// resolve_relative("/blog/2024/01/01/a", "b")        -> "/blog/2024/01/01/b"
/// resolve_relative("/blog/2024/01/01/a", "../../x") -> "/blog/2024/x"
/// ```
pub fn resolve_relative(from: &str, link: &str) -> String {
    let mut segments: Vec<_> = from.split('/').filter(|s| !s.is_empty()).collect();
    segments.pop();
    for part in link.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            part => segments.push(part),
        }
    }
    format!("/{}", segments.join("/"))
}

/// Collapse repeated slashes, drop the trailing slash, keep a leading one.
pub fn normalize_route(route: &str) -> String {
    let segments: Vec<_> = route.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}

/// Every regular file below `dir` (empty when `dir` does not exist).
pub fn collect_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .collect()
}
