//! relfind - Find the latest upstream release of a project from its source URL

mod cli;
mod commands;
mod core;
mod providers;
mod utils;

use cli::{Cli, Commands};
use colored::Colorize;
use crate::core::Config;
use providers::Registry;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Initialize logger, RUST_LOG still takes precedence
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let registry = Registry::from_config(&config)?;

    match cli.command {
        Commands::Latest { queries } => commands::run_latest(&registry, queries, cli.json),
        Commands::Releases { query } => commands::run_releases(&registry, &query, cli.json),
        Commands::Providers => commands::run_providers(&registry, cli.json),
    }
}
