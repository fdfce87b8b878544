//! ConfigSite - a two-page website shipped as one binary.

#![allow(dead_code)]

mod cli;
mod config;
mod core;
mod dom;
mod embed;
mod logger;
mod page;
mod router;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{SiteConfig, init_config};

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = init_config(SiteConfig::load(&cli)?);

    match &cli.command {
        Commands::Init => cli::init::init_site(&config),
        Commands::Build { .. } => cli::build::build_site(&config),
        Commands::Serve { .. } => serve(&config),
        Commands::Routes { pretty } => cli::routes::run_routes(*pretty, &config),
    }
}

/// Build the site, then serve it until Ctrl+C.
fn serve(config: &SiteConfig) -> Result<()> {
    cli::build::build_site(config)?;

    let server = cli::serve::bind_server(config)?;
    server.run()
}
