//! Configuration utility functions.

use super::{ConfigDiagnostics, FieldPath};
use std::path::{Component, Path, PathBuf};

/// Extract path component from a URL string
///
/// Returns `None` if the URL is invalid
///
/// # Examples
/// ```ignore
/// extract_url_path("https://example.github.io/my-project/") -> Some("my-project")
/// extract_url_path("https://example.com")                   -> Some("")
/// extract_url_path("invalid")                               -> None
/// ```
pub fn extract_url_path(url_str: &str) -> Option<String> {
    let parsed = url::Url::parse(url_str).ok()?;
    Some(parsed.path().trim_matches('/').to_string())
}

/// Normalize a base URL, returning `None` if it is not of the form `/…/`.
///
/// Repeated slashes are collapsed, so `/a//b/` becomes `/a/b/`.
///
/// ```ignore
/// normalize_base_url("/")        -> Some("/")
/// normalize_base_url("/blog/")   -> Some("/blog/")
/// normalize_base_url("docs")     -> None
/// normalize_base_url("/docs")    -> None
/// ```
pub fn normalize_base_url(base: &str) -> Option<String> {
    if !base.starts_with('/') || !base.ends_with('/') || base.contains(char::is_whitespace) {
        return None;
    }
    let segments: Vec<_> = base.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        Some("/".to_string())
    } else {
        Some(format!("/{}/", segments.join("/")))
    }
}

/// Report an error unless `value` is an absolute `http(s)` URL with a host.
pub fn check_http_url(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(value) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com",
                );
            } else if parsed.host_str().is_none_or(str::is_empty) {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL '{value}': {e}"),
                "use format like https://example.com",
            );
        }
    }
}

/// Report an error unless `path` is relative and stays inside its root.
///
/// Accepts `img/favicon.ico` and `./src/css/custom.css`, rejects
/// `/etc/passwd` and `../outside.css`.
pub fn check_relative_path(path: &Path, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if path.as_os_str().is_empty() {
        diag.error(field, "path must not be empty");
    } else if path.has_root() {
        diag.error_with_hint(
            field,
            format!("path '{}' must be relative", path.display()),
            "paths are resolved against the site root, e.g. \"img/favicon.ico\"",
        );
    } else if path.components().any(|c| matches!(c, Component::ParentDir)) {
        diag.error_with_hint(
            field,
            format!("path '{}' escapes the site root", path.display()),
            "remove `..` segments",
        );
    }
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/blog/2024-01-01-hello/  ← cwd
/// /home/user/site/quire.toml              ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.exists())
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::error::ViolationKind;

    #[test]
    fn test_extract_url_path() {
        assert_eq!(
            extract_url_path("https://example.github.io/my-project/"),
            Some("my-project".to_string())
        );
        assert_eq!(extract_url_path("https://example.com"), Some(String::new()));
        assert_eq!(
            extract_url_path("https://example.com/"),
            Some(String::new())
        );
        assert_eq!(
            extract_url_path("https://example.com:8080/path?query=1#frag"),
            Some("path".to_string())
        );
        assert_eq!(extract_url_path("invalid-url"), None);
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url("/").as_deref(), Some("/"));
        assert_eq!(normalize_base_url("/blog/").as_deref(), Some("/blog/"));
        assert_eq!(normalize_base_url("/a//b/").as_deref(), Some("/a/b/"));
        assert_eq!(normalize_base_url("//").as_deref(), Some("/"));

        assert_eq!(normalize_base_url("docs"), None);
        assert_eq!(normalize_base_url("/docs"), None);
        assert_eq!(normalize_base_url("docs/"), None);
        assert_eq!(normalize_base_url(""), None);
        assert_eq!(normalize_base_url("/my blog/"), None);
    }

    #[test]
    fn test_check_http_url() {
        let mut diag = ConfigDiagnostics::new();
        let field = FieldPath::new("url");

        check_http_url("https://x.example.com", field, &mut diag);
        check_http_url("http://localhost:3000/", field, &mut diag);
        assert!(diag.is_empty());

        check_http_url("ftp://example.com", field, &mut diag);
        check_http_url("example.com", field, &mut diag);
        check_http_url("not a url", field, &mut diag);
        assert_eq!(diag.len(), 3);
        assert!(diag.errors().iter().all(|e| e.kind == ViolationKind::Schema));
    }

    #[test]
    fn test_check_relative_path() {
        let mut diag = ConfigDiagnostics::new();
        let field = FieldPath::new("favicon");

        check_relative_path(Path::new("img/favicon.ico"), field, &mut diag);
        check_relative_path(Path::new("./src/css/custom.css"), field, &mut diag);
        assert!(diag.is_empty());

        check_relative_path(Path::new("/etc/favicon.ico"), field, &mut diag);
        check_relative_path(Path::new("../favicon.ico"), field, &mut diag);
        check_relative_path(Path::new(""), field, &mut diag);
        assert_eq!(diag.len(), 3);
    }
}
