//! quire - site configuration loader and checker for blog-preset static sites.

mod cli;
mod config;
mod core;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;
use utils::plural_count;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    // init writes the config, so there is nothing to load yet
    if let Commands::Init { name, dry } = &cli.command {
        return cli::init::new_site(&cli, name.as_deref(), *dry);
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { .. } => Ok(()),
        Commands::Check { json } => cli::check::check_config(&config, *json),
        Commands::Validate { args } => {
            let outcome = cli::validate::validate_site(&config, args)?;
            let posts = plural_count(outcome.posts, "post");
            if outcome.warnings.is_empty() {
                log!("validate"; "{posts} checked, all checks passed");
            } else {
                log!(
                    "validate";
                    "{posts} checked, passed with {}",
                    plural_count(outcome.warnings.len(), "warning")
                );
            }
            Ok(())
        }
    }
}
