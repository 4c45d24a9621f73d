//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// quire site configuration tool
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: quire.toml)
    #[arg(short = 'C', long, global = true, default_value = "quire.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Reject unknown config fields instead of ignoring them
    #[arg(long, global = true)]
    pub strict: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create a new site with a commented default config
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config template to stdout without creating files
        #[arg(long)]
        dry: bool,
    },

    /// Load and validate the config, then print a summary
    #[command(visible_alias = "c")]
    Check {
        /// Print the validated config as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check posts for broken links, inline tags/authors and missing truncation
    #[command(visible_alias = "v")]
    Validate {
        #[command(flatten)]
        args: ValidateArgs,
    },
}

/// Validate command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Treat `throw` policies as `warn` (report but never fail)
    #[arg(long, short = 'w')]
    pub warn_only: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["quire", "check", "--json", "--strict", "-C", "site.toml"])
            .unwrap();
        assert!(cli.strict);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        assert!(matches!(cli.command, Commands::Check { json: true }));
    }

    #[test]
    fn test_verbose_short_flag() {
        let cli = Cli::try_parse_from(["quire", "-v", "check"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Check { json: false }));

        let cli = Cli::try_parse_from(["quire", "validate", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_validate_warn_only() {
        let cli = Cli::try_parse_from(["quire", "v", "-w"]).unwrap();
        let Commands::Validate { args } = cli.command else {
            panic!("expected validate");
        };
        assert!(args.warn_only);
    }

    #[test]
    fn test_init_name() {
        let cli = Cli::try_parse_from(["quire", "init", "my-blog", "--dry"]).unwrap();
        let Commands::Init { name, dry } = cli.command else {
            panic!("expected init");
        };
        assert_eq!(name, Some(PathBuf::from("my-blog")));
        assert!(dry);
    }
}
