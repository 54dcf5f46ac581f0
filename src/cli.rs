//! CLI argument parsing for relfind

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "relfind")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Find the latest upstream release of a project from its source URL", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to config.toml (defaults to the user config directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the latest release for each source URL
    #[command(visible_alias = "l")]
    Latest {
        /// Source URLs or references (e.g., https://gitlab.com/owner/repo.git)
        queries: Vec<String>,
    },

    /// List every release of a project in upstream order
    #[command(visible_alias = "r")]
    Releases {
        /// Source URL or reference
        query: String,
    },

    /// List registered providers in match order
    Providers,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
