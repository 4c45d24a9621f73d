//! Target checks and starter content for new sites.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Initialization mode determines validation rules.
#[derive(Debug, Clone, Copy)]
pub enum InitMode {
    /// `quire init` - initialize in current directory (must be empty)
    CurrentDir,
    /// `quire init <name>` - create new subdirectory (must not exist)
    NewDir,
}

/// Directories every site starts with.
const SITE_DIRS: &[&str] = &["blog", "src/css", "src/pages", "static/img"];

/// Starter files, relative to the site root.
const STARTER_FILES: &[(&str, &str)] = &[
    ("blog/welcome.md", WELCOME_POST),
    ("blog/tags.yml", TAGS),
    ("blog/authors.yml", AUTHORS),
    ("src/css/custom.css", CUSTOM_CSS),
    ("static/img/.gitkeep", ""),
];

const WELCOME_POST: &str = r#"---
title: Welcome
authors: [quire]
tags: [welcome]
---

This text is the post summary shown on the blog index.

<!-- truncate -->

Edit `blog/welcome.md` to get started, or browse the [archive](/blog/archive).
"#;

const TAGS: &str = r#"welcome:
  label: Welcome
  permalink: /welcome
  description: First steps with the blog
"#;

const AUTHORS: &str = r#"quire:
  name: Site Author
  title: Maintainer
"#;

const CUSTOM_CSS: &str = r#"/* Site-wide overrides, loaded after the theme stylesheet. */
:root {
  --ifm-color-primary: #2e8555;
}
"#;

/// Check the target directory before anything is written.
///
/// - `CurrentDir`: directory must be empty (or not exist)
/// - `NewDir`: directory must not exist
pub fn validate_target(root: &Path, mode: InitMode) -> Result<()> {
    match mode {
        InitMode::CurrentDir if !is_empty(root)? => bail!(
            "Current directory is not empty.\n\
             Use `quire init <name>` to create in a new subdirectory."
        ),
        InitMode::NewDir if root.exists() => bail!(
            "Directory '{}' already exists.\n\
             Choose a different name or remove the existing directory.",
            root.display()
        ),
        _ => Ok(()),
    }
}

fn is_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    let mut entries = fs::read_dir(path)
        .with_context(|| format!("Failed to read directory '{}'", path.display()))?;
    Ok(entries.next().is_none())
}

/// Create the directory layout and starter content under `root`.
pub fn create_site(root: &Path) -> Result<()> {
    for dir in SITE_DIRS {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory '{}'", path.display()))?;
    }

    for (file, content) in STARTER_FILES {
        let path = root.join(file);
        if !path.exists() {
            fs::write(&path, content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_dir_current_mode() {
        let temp = TempDir::new().unwrap();
        assert!(validate_target(temp.path(), InitMode::CurrentDir).is_ok());
    }

    #[test]
    fn test_non_empty_dir_current_mode() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("notes.txt"), "content").unwrap();
        assert!(validate_target(temp.path(), InitMode::CurrentDir).is_err());
    }

    #[test]
    fn test_new_dir_mode() {
        let temp = TempDir::new().unwrap();
        assert!(validate_target(temp.path(), InitMode::NewDir).is_err());
        assert!(validate_target(&temp.path().join("my-blog"), InitMode::NewDir).is_ok());
    }

    #[test]
    fn test_create_site() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("my-blog");
        create_site(&root).unwrap();

        assert!(root.join("src/pages").is_dir());
        let post = fs::read_to_string(root.join("blog/welcome.md")).unwrap();
        assert!(post.contains("<!-- truncate -->"));
        assert!(root.join("src/css/custom.css").is_file());
    }

    #[test]
    fn test_existing_files_kept() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("src/css")).unwrap();
        fs::write(temp.path().join("src/css/custom.css"), "body {}").unwrap();

        create_site(temp.path()).unwrap();
        let css = fs::read_to_string(temp.path().join("src/css/custom.css")).unwrap();
        assert_eq!(css, "body {}");
    }
}
