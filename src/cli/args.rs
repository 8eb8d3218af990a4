//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::{PlateConfig, Verbosity};

/// Plate - scaffold files from local templates.
#[derive(Debug, Parser)]
#[command(name = "plate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .plate.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Template root directory
    #[arg(long, global = true, env = "PLATE_TEMPLATES_DIR")]
    pub templates_dir: Option<PathBuf>,

    /// Output root directory
    #[arg(long, global = true, env = "PLATE_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Suffix that marks manifest files (e.g. .plate.json)
    #[arg(long, global = true)]
    pub manifest_suffix: Option<String>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only show errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Apply command-line overrides on top of file configuration.
    pub fn apply_overrides(&self, config: &mut PlateConfig) {
        if let Some(dir) = &self.templates_dir {
            config.templates.local_dir = dir.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.generated.output_dir = dir.clone();
        }
        if let Some(suffix) = &self.manifest_suffix {
            config.templates.manifest_extension = suffix.clone();
        }
        if self.debug {
            config.verbosity = Verbosity::Debug;
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a template into a new file
    New(NewArgs),

    /// List available templates
    List(ListArgs),

    /// Create the template directory and a default config
    Init(InitArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `new` command.
#[derive(Debug, Clone, clap::Args)]
pub struct NewArgs {
    /// Template slug (path under the template root, without extension)
    pub slug: String,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_new_with_slug() {
        let cli = Cli::try_parse_from(["plate", "new", "rust/lib"]).unwrap();
        match cli.command {
            Commands::New(args) => assert_eq!(args.slug, "rust/lib"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn new_requires_slug() {
        assert!(Cli::try_parse_from(["plate", "new"]).is_err());
    }

    #[test]
    fn command_is_required() {
        assert!(Cli::try_parse_from(["plate"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["plate", "list", "--templates-dir", "tpl", "--debug"]).unwrap();
        assert_eq!(cli.templates_dir, Some(PathBuf::from("tpl")));
        assert!(cli.debug);
    }

    #[test]
    fn overrides_replace_config_values() {
        let cli = Cli::try_parse_from([
            "plate",
            "--templates-dir",
            "tpl",
            "--output-dir",
            "gen",
            "--manifest-suffix",
            ".meta.json",
            "--debug",
            "list",
        ])
        .unwrap();

        let mut config = PlateConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.templates.local_dir, PathBuf::from("tpl"));
        assert_eq!(config.generated.output_dir, PathBuf::from("gen"));
        assert_eq!(config.templates.manifest_extension, ".meta.json");
        assert_eq!(config.verbosity, Verbosity::Debug);
    }

    #[test]
    fn no_overrides_keep_config() {
        let cli = Cli::try_parse_from(["plate", "init"]).unwrap();
        let mut config = PlateConfig::default();
        config.verbosity = Verbosity::Silent;
        cli.apply_overrides(&mut config);
        assert_eq!(config.verbosity, Verbosity::Silent);
    }
}
