//! Releases command implementation

use super::latest::published_display;
use crate::core::Status;
use crate::providers::Registry;
use anyhow::Result;
use colored::Colorize;

/// List every release of the project behind `query`, in upstream order
pub fn run(registry: &Registry, query: &str, json: bool) -> Result<()> {
    let (provider, id) = registry
        .resolve(query)
        .ok_or_else(|| anyhow::anyhow!("No provider recognizes '{}'", query))?;

    let releases = match provider.releases(&id) {
        Ok(releases) => releases,
        Err(failure) => {
            anyhow::bail!("{} {}: {}", provider.name(), id, Status::from(failure))
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&releases)?);
        return Ok(());
    }

    if releases.is_empty() {
        println!("{}", format!("No releases found for {}", id).yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!("Releases of {} ({})", id, provider.name()).bold()
    );
    println!();
    println!(
        "{:<20} {:<12} {}",
        "VERSION".bold(),
        "PUBLISHED".bold(),
        "LOCATION".bold()
    );
    println!("{}", "─".repeat(80));

    for release in &releases {
        println!(
            "{:<20} {:<12} {}",
            release.version.yellow(),
            published_display(release),
            release.location
        );
    }

    println!();
    println!("Total: {} release(s)", releases.len());

    Ok(())
}
