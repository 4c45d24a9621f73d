//! Site initialization module.
//!
//! Creates a new site with a commented default configuration.
//!
//! # Module Structure
//!
//! - [`scaffold`]: target directory checks, directory layout, starter posts
//! - [`config`]: configuration and ignore file generation

mod config;
mod scaffold;

use crate::{cli::Cli, log};
use anyhow::{Context, Result};
use std::path::Path;

use config::generate_config_template;
pub use scaffold::InitMode;

/// Create a new site.
///
/// # Steps
/// 1. Validate target directory
/// 2. Create directory layout and starter content
/// 3. Write configuration and ignore files
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_site(cli: &Cli, name: Option<&Path>, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template());
        return Ok(());
    }

    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let (root, mode) = match name {
        Some(name) => (cwd.join(name), InitMode::NewDir),
        None => (cwd, InitMode::CurrentDir),
    };

    init_at(&root, mode, &cli.config)?;

    log!("init"; "site initialized in {}", root.display());
    Ok(())
}

fn init_at(root: &Path, mode: InitMode, config_file: &Path) -> Result<()> {
    scaffold::validate_target(root, mode)?;
    scaffold::create_site(root)?;
    config::write_config(root, config_file)?;
    config::write_ignore_files(root)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_init_produces_valid_site() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("blog-site");
        init_at(&root, InitMode::NewDir, Path::new("quire.toml")).unwrap();

        let content = fs::read_to_string(root.join("quire.toml")).unwrap();
        let config = SiteConfig::from_str(&content).unwrap();
        assert!(config.diagnose().is_empty());
        assert!(root.join(".gitignore").exists());
    }

    #[test]
    fn test_init_site_passes_validate() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("site");
        init_at(&root, InitMode::NewDir, Path::new("quire.toml")).unwrap();

        let content = fs::read_to_string(root.join("quire.toml")).unwrap();
        let mut config = SiteConfig::from_str(&content).unwrap();
        config.config_path = root.join("quire.toml");
        config.root = root;

        let args = crate::cli::ValidateArgs { warn_only: false };
        let outcome = crate::cli::validate::validate_site(&config, &args).unwrap();
        assert_eq!(outcome.posts, 1);
        assert!(outcome.warnings.is_empty(), "{:?}", outcome.warnings);
    }

    #[test]
    fn test_init_refuses_existing_dir() {
        let temp = TempDir::new().unwrap();
        assert!(init_at(temp.path(), InitMode::NewDir, Path::new("quire.toml")).is_err());
    }
}
