//! Providers command implementation

use crate::providers::Registry;
use anyhow::Result;
use colored::Colorize;

/// List registered providers in match order
pub fn run(registry: &Registry, json: bool) -> Result<()> {
    let names = registry.names();

    if json {
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }

    println!("{}", "Providers (in match order)".bold());
    for (i, name) in names.iter().enumerate() {
        println!("  {}. {}", i + 1, name.green());
    }

    Ok(())
}
