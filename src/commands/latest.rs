//! Latest command implementation

use crate::core::{Release, Status};
use crate::providers::Registry;
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

/// Outcome of looking up one query
#[derive(Debug, Serialize)]
pub struct Lookup {
    pub query: String,
    pub provider: Option<String>,
    pub status: Option<Status>,
    pub release: Option<Release>,
}

impl Lookup {
    /// Whether a provider answered with `Status::Ok`
    pub fn succeeded(&self) -> bool {
        self.status.is_some_and(Status::is_ok)
    }
}

/// Resolve one query to its latest release
pub fn lookup(registry: &Registry, query: &str) -> Lookup {
    let Some((provider, id)) = registry.resolve(query) else {
        log::warn!("No provider recognizes '{}'", query);
        return Lookup {
            query: query.to_string(),
            provider: None,
            status: None,
            release: None,
        };
    };

    let result = provider.latest(&id);
    Lookup {
        query: query.to_string(),
        provider: Some(provider.name().to_string()),
        status: Some(Status::of(&result)),
        release: result.ok().flatten(),
    }
}

/// Show the latest release for each query
pub fn run(registry: &Registry, queries: Vec<String>, json: bool) -> Result<()> {
    if queries.is_empty() {
        println!("{}", "No query provided".yellow());
        println!("Usage: relfind latest <source-url>...");
        return Ok(());
    }

    let lookups: Vec<Lookup> = queries.iter().map(|q| lookup(registry, q)).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&lookups)?);
    } else {
        print_table(&lookups);
    }

    let failed = lookups.iter().filter(|l| !l.succeeded()).count();
    if failed > 0 {
        anyhow::bail!("{} of {} queries failed", failed, lookups.len());
    }

    Ok(())
}

fn print_table(lookups: &[Lookup]) {
    println!(
        "{:<40} {:<8} {:<16} {:<12} {}",
        "PROJECT".bold(),
        "PROVIDER".bold(),
        "VERSION".bold(),
        "PUBLISHED".bold(),
        "LOCATION".bold()
    );
    println!("{}", "─".repeat(100));

    for lookup in lookups {
        let provider = lookup.provider.as_deref().unwrap_or("-");
        match (&lookup.release, lookup.status) {
            (Some(release), _) => println!(
                "{:<40} {:<8} {:<16} {:<12} {}",
                release.name.green(),
                provider.cyan(),
                release.version.yellow(),
                published_display(release),
                release.location
            ),
            (None, Some(Status::Ok)) => println!(
                "{:<40} {:<8} {}",
                lookup.query,
                provider.cyan(),
                "no releases".yellow()
            ),
            (None, Some(status)) => println!(
                "{:<40} {:<8} {}",
                lookup.query,
                provider.cyan(),
                status.to_string().red()
            ),
            (None, None) => println!(
                "{:<40} {:<8} {}",
                lookup.query,
                provider,
                "unsupported source".red()
            ),
        }
    }
}

/// Publish date for display, "-" when upstream gave none
pub fn published_display(release: &Release) -> String {
    if release.has_timestamp() {
        release.published.format("%Y-%m-%d").to_string()
    } else {
        "-".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;

    #[test]
    fn test_lookup_unsupported_source() {
        let registry = Registry::from_config(&Config::default()).unwrap();
        let lookup = lookup(&registry, "https://example.com/foo/bar");

        assert!(lookup.provider.is_none());
        assert!(lookup.status.is_none());
        assert!(!lookup.succeeded());
    }

    #[test]
    fn test_lookup_gitlab() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock(
                "GET",
                mockito::Matcher::Regex(r"^/api/v4/projects/foo%2[fF]bar/repository/tags$".to_string()),
            )
            .with_status(200)
            .with_body(r#"[{"name": "v1"}, {"name": "v2"}]"#)
            .create();

        let config = Config {
            gitlab_api_url: server.url(),
            ..Config::default()
        };
        let registry = Registry::from_config(&config).unwrap();
        let lookup = lookup(&registry, "https://gitlab.com/foo/bar.git");

        assert!(lookup.succeeded());
        assert_eq!(lookup.provider.as_deref(), Some("GitLab"));
        let release = lookup.release.unwrap();
        assert_eq!(release.version, "v2");
        assert_eq!(published_display(&release), "-");
    }

    #[test]
    fn test_lookup_not_found() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("GET", "/repos/foo/bar/releases/latest")
            .with_status(404)
            .create();

        let config = Config {
            github_api_url: server.url(),
            ..Config::default()
        };
        let registry = Registry::from_config(&config).unwrap();
        let lookup = lookup(&registry, "https://github.com/foo/bar");

        assert_eq!(lookup.status, Some(Status::NotFound));
        assert!(lookup.release.is_none());
        assert!(!lookup.succeeded());
    }
}
