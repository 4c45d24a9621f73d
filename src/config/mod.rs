//! Site configuration management for `quire.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── future     # [future]
//! │   ├── i18n       # [i18n]
//! │   ├── policy     # ignore / warn / throw
//! │   ├── preset/    # [[presets]] docs, blog, theme options
//! │   └── theme/     # [theme_config] navbar, footer, prism
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! ├── util.rs        # URL and path checks
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The configuration is loaded once in `main` and handed to each command by
//! reference. Nothing mutates it after [`SiteConfig::load`] returns.

pub mod section;
pub mod types;
mod util;

use util::{extract_url_path, find_config_file, normalize_base_url};

pub use section::{
    BlogOptions, DocsOptions, FeedOptions, FutureConfig, I18nConfig, NavbarConfig, Preset,
    PresetName, ReportingSeverity, ThemeConfig, ThemeOptions,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{cli::Cli, core::LinkKind, log};
use anyhow::{Result, bail};
use macros::Config;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

/// Deployment identifiers: GitHub organization / repository names.
static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._-]+$").unwrap());

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing quire.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "")]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    #[config(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    #[config(skip)]
    pub root: PathBuf,

    /// Site name, shown in the browser tab and the navbar.
    #[config(default = "My Blog")]
    pub title: String,

    /// One-line site description.
    pub tagline: String,

    /// Favicon, relative to a static directory.
    pub favicon: Option<PathBuf>,

    /// Production URL, without the path (use `base_url` for that).
    #[config(default = "https://example.com")]
    pub url: String,

    /// Path the site is served under, starting and ending with `/`.
    pub base_url: String,

    /// GitHub organization or user name (deployment only).
    pub organization_name: Option<String>,

    /// GitHub repository name (deployment only).
    pub project_name: Option<String>,

    /// Branch the built site is pushed to.
    pub deployment_branch: Option<String>,

    /// Append (`true`) or strip (`false`) trailing slashes on routes.
    pub trailing_slash: Option<bool>,

    /// Ask search engines not to index the site.
    pub no_index: bool,

    /// Directories copied verbatim to the site root.
    pub static_directories: Vec<PathBuf>,

    /// Links to routes that do not exist: ignore | warn | throw.
    pub on_broken_links: ReportingSeverity,

    /// Relative Markdown links to missing files: ignore | warn | throw.
    pub on_broken_markdown_links: ReportingSeverity,

    /// Preset bundles, see `[[presets]]`.
    #[config(skip)]
    pub presets: Vec<Preset>,

    /// Opt-in flags for upcoming behavior.
    #[config(sub)]
    pub future: FutureConfig,

    /// Locales.
    #[config(sub)]
    pub i18n: I18nConfig,

    /// Presentation layer parameters.
    #[config(sub)]
    pub theme_config: ThemeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            title: String::new(),
            tagline: String::new(),
            favicon: None,
            url: String::new(),
            base_url: "/".into(),
            organization_name: None,
            project_name: None,
            deployment_branch: None,
            trailing_slash: None,
            no_index: false,
            static_directories: vec![PathBuf::from("static")],
            on_broken_links: ReportingSeverity::Throw,
            on_broken_markdown_links: ReportingSeverity::Warn,
            presets: Vec::new(),
            future: FutureConfig::default(),
            i18n: I18nConfig::default(),
            theme_config: ThemeConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Locate, read, parse and validate the configuration.
    ///
    /// Searches upward from cwd for the config file; its parent directory
    /// becomes the site root.
    pub fn load(cli: &Cli) -> Result<Self> {
        let Some(config_path) = find_config_file(&cli.config) else {
            bail!(ConfigError::NotFound(cli.config.clone()));
        };

        let mut config = Self::from_path(&config_path, cli.strict)?;
        config.config_path = crate::utils::normalize_path(&config_path);
        config.root = config
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        crate::debug!("config"; "loaded {}", config.config_path.display());

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    ///
    /// Unknown fields are reported and skipped, or rejected when `strict`.
    fn from_path(path: &Path, strict: bool) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            if strict {
                bail!(ConfigError::UnknownFields(ignored));
            }
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Get path relative to the site root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // presets
    // ========================================================================

    /// The `classic` preset, if declared.
    pub fn classic(&self) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == PresetName::Classic)
    }

    /// Blog options of the classic preset, unless the blog is disabled.
    pub fn blog(&self) -> Option<&BlogOptions> {
        self.classic().and_then(|p| p.blog.enabled())
    }

    /// Docs options of the classic preset, unless docs are disabled.
    pub fn docs(&self) -> Option<&DocsOptions> {
        self.classic().and_then(|p| p.docs.enabled())
    }

    /// Custom stylesheets, relative to the site root.
    pub fn custom_css(&self) -> &[PathBuf] {
        self.classic().map_or(&[], |p| p.theme.custom_css.as_slice())
    }

    // ========================================================================
    // routes
    // ========================================================================

    /// Base URL in normalized form. Falls back to `/` when malformed
    /// (which [`SiteConfig::validate`] rejects).
    pub fn normalized_base_url(&self) -> String {
        normalize_base_url(&self.base_url).unwrap_or_else(|| "/".to_string())
    }

    /// Public route for a site path, honoring `base_url` and `trailing_slash`.
    ///
    /// ```ignore
    /// // base_url = "/articles/"
    /// config.route("/blog/hello") -> "/articles/blog/hello"
    /// config.route("")            -> "/articles/"
    /// ```
    pub fn route(&self, path: &str) -> String {
        let base = self.normalized_base_url();
        let path = path.trim_start_matches('/');
        let route = format!("{base}{path}");
        if path.is_empty() {
            return route;
        }
        match self.trailing_slash {
            Some(true) if !route.ends_with('/') => format!("{route}/"),
            Some(false) => route.trim_end_matches('/').to_string(),
            _ => route,
        }
    }

    /// "Edit this page" link for a blog post source file.
    ///
    /// `source` may be absolute or relative to the site root.
    pub fn edit_url_for(&self, source: &Path) -> Option<String> {
        let edit_url = self.blog()?.edit_url.as_deref()?;
        let relative = crate::utils::to_slash(&self.root_relative(source));
        Some(format!("{}/{}", edit_url.trim_end_matches('/'), relative))
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the whole configuration.
    ///
    /// Collects all violations and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnose();
        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Check that the files this configuration points at exist under `root`.
    ///
    /// Not part of [`SiteConfig::validate`]: `quire check` works on a config
    /// alone, `quire validate` runs this before scanning content.
    pub fn check_resources(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        let in_static = |path: &str| {
            let path = path.trim_start_matches('/');
            self.static_directories
                .iter()
                .any(|dir| self.root_join(dir).join(path).is_file())
        };

        if let Some(favicon) = &self.favicon
            && !in_static(favicon.to_string_lossy().as_ref())
        {
            diag.missing(
                Self::FIELDS.favicon,
                format!("`{}` not found in any static directory", favicon.display()),
            );
        }
        for css in self.custom_css() {
            if !self.root_join(css).is_file() {
                diag.missing(
                    ThemeOptions::FIELDS.custom_css,
                    format!("stylesheet `{}` not found", css.display()),
                );
            }
        }

        let theme = &self.theme_config;
        let local = |image: &&String| !matches!(LinkKind::parse(image), LinkKind::External(_));
        if let Some(image) = theme.image.as_ref().filter(local)
            && !in_static(image.as_str())
        {
            diag.missing(
                ThemeConfig::FIELDS.image,
                format!("`{image}` not found in any static directory"),
            );
        }
        if let Some(logo) = &theme.navbar.logo {
            for src in std::iter::once(&logo.src)
                .chain(logo.src_dark.as_ref())
                .filter(local)
            {
                if !in_static(src.as_str()) {
                    diag.missing(
                        NavbarConfig::FIELDS.logo,
                        format!("`{src}` not found in any static directory"),
                    );
                }
            }
        }

        if let Some(blog) = self.blog()
            && !self.root_join(&blog.path).is_dir()
        {
            diag.missing(
                BlogOptions::FIELDS.path,
                format!("blog directory `{}` does not exist", blog.path.display()),
            );
        }
        if let Some(docs) = self.docs()
            && !self.root_join(&docs.path).is_dir()
        {
            diag.missing(
                DocsOptions::FIELDS.path,
                format!("docs directory `{}` does not exist", docs.path.display()),
            );
        }

        diag
    }

    /// Run every check without printing or failing.
    pub fn diagnose(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.validate_site(&mut diag);
        self.future.validate(&mut diag);
        self.i18n.validate(&mut diag);
        section::preset::validate_presets(&self.presets, &mut diag);
        self.theme_config.validate(&mut diag);

        diag
    }

    /// Top-level keys.
    fn validate_site(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.title,
                "site title must not be empty",
                "set `title = \"My Blog\"`",
            );
        }

        util::check_http_url(&self.url, Self::FIELDS.url, diag);
        if let Some(path) = extract_url_path(&self.url)
            && !path.is_empty()
        {
            diag.referential(
                Self::FIELDS.url,
                format!("URL contains the path `/{path}/`"),
                format!("move the path to `base_url = \"/{path}/\"`"),
            );
        }

        if normalize_base_url(&self.base_url).is_none() {
            diag.error_with_hint(
                Self::FIELDS.base_url,
                format!("`{}` must start and end with `/`", self.base_url),
                "use `/` or a path such as `/my-project/`",
            );
        }

        if let Some(favicon) = &self.favicon {
            util::check_relative_path(favicon, Self::FIELDS.favicon, diag);
        }
        if self.static_directories.is_empty() {
            diag.warn(
                Self::FIELDS.static_directories,
                "no static directories, the favicon and images cannot resolve",
            );
        }
        for dir in &self.static_directories {
            util::check_relative_path(dir, Self::FIELDS.static_directories, diag);
        }

        for (field, value) in [
            (Self::FIELDS.organization_name, &self.organization_name),
            (Self::FIELDS.project_name, &self.project_name),
        ] {
            if let Some(value) = value
                && !IDENTIFIER.is_match(value)
            {
                diag.error_with_hint(
                    field,
                    format!("`{value}` is not a valid identifier"),
                    "use letters, digits, `.`, `_` or `-`",
                );
            }
        }

        if self.presets.is_empty() {
            diag.warn(
                FieldPath::new("presets"),
                "no preset declared, nothing will be generated",
            );
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with the minimal required top-level fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("title = \"Test\"\nurl = \"https://example.com\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
