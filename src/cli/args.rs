//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// ConfigSite CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: configsite.toml)
    #[arg(short = 'C', long, default_value = "configsite.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a starter configsite.toml
    #[command(visible_alias = "i")]
    Init,

    /// Build the site into the output directory
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Build the site, then serve it locally
    #[command(visible_alias = "s")]
    Serve {
        #[command(flatten)]
        build_args: BuildArgs,

        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<std::net::IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the route table as JSON
    #[command(visible_alias = "r")]
    Routes {
        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },
}

/// Shared build arguments for Build and Serve commands
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Clean output directory completely before building
    #[arg(short, long)]
    pub clean: bool,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init)
    }

    /// Commands that run fine on defaults when no config file exists.
    pub const fn allows_missing_config(&self) -> bool {
        matches!(self.command, Commands::Init | Commands::Routes { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_build() {
        let cli = Cli::try_parse_from(["configsite", "build", "--clean"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Build {
                build_args: BuildArgs { clean: true, .. }
            }
        ));
    }

    #[test]
    fn test_cli_parses_serve_overrides() {
        let cli = Cli::try_parse_from(["configsite", "serve", "-p", "8080"]).unwrap();
        match cli.command {
            Commands::Serve { port, .. } => assert_eq!(port, Some(8080)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_aliases() {
        assert!(Cli::try_parse_from(["configsite", "b"]).is_ok());
        assert!(Cli::try_parse_from(["configsite", "s"]).is_ok());
        assert!(Cli::try_parse_from(["configsite", "r"]).is_ok());
        assert!(Cli::try_parse_from(["configsite", "i"]).is_ok());
    }

    #[test]
    fn test_allows_missing_config() {
        let init = Cli::try_parse_from(["configsite", "init"]).unwrap();
        assert!(init.allows_missing_config());

        let build = Cli::try_parse_from(["configsite", "build"]).unwrap();
        assert!(!build.allows_missing_config());
    }
}
