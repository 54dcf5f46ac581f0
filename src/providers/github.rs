//! GitHub provider implementation

use super::base::Provider;
use crate::core::{parse_timestamp, Failure, Release, ReleaseSet};
use crate::utils::HttpClient;
use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;

static SOURCE_REGEX: OnceLock<Regex> = OnceLock::new();

fn source_regex() -> &'static Regex {
    SOURCE_REGEX.get_or_init(|| {
        Regex::new(r"github\.com/([^/]+/[^/.]+)").expect("GitHub source pattern is valid")
    })
}

/// GitHub provider
pub struct GitHubProvider {
    http: HttpClient,
    api_url: String,
}

impl GitHubProvider {
    /// Create a new GitHub provider
    ///
    /// `api_url` is the REST API root (e.g., "https://api.github.com").
    pub fn with_api_url(http: HttpClient, api_url: &str) -> Self {
        Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    fn releases_url(&self, id: &str) -> String {
        format!("{}/repos/{}/releases", self.api_url, id)
    }
}

impl Provider for GitHubProvider {
    fn name(&self) -> &str {
        "GitHub"
    }

    fn match_query(&self, query: &str) -> Option<String> {
        source_regex()
            .captures(query)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    fn releases(&self, id: &str) -> Result<ReleaseSet, Failure> {
        log::info!("Fetching GitHub releases for {}", id);

        let releases: Vec<GitHubRelease> = self.http.get_json(&self.releases_url(id))?;

        log::debug!("Found {} release(s) for {}", releases.len(), id);
        Ok(releases.iter().map(|r| r.convert(id)).collect())
    }

    /// GitHub lists newest first, so ask the API directly instead of taking the last entry
    fn latest(&self, id: &str) -> Result<Option<Release>, Failure> {
        log::info!("Fetching latest GitHub release for {}", id);

        let url = format!("{}/latest", self.releases_url(id));
        let release: GitHubRelease = self.http.get_json(&url)?;

        Ok(Some(release.convert(id)))
    }
}

// GitHub API response structures

/// GitHub release information
#[derive(Debug, Deserialize)]
pub struct GitHubRelease {
    /// Release tag name (e.g., "v1.0.0")
    pub tag_name: String,
    /// Publish time in RFC 3339, null for drafts
    #[serde(default)]
    pub published_at: Option<String>,
}

impl GitHubRelease {
    /// Convert this release into a release record of repository `id`
    pub fn convert(&self, id: &str) -> Release {
        let published = parse_timestamp(self.published_at.as_deref().unwrap_or_default());
        let location = format!(
            "https://github.com/{}/archive/{}.tar.gz",
            id, self.tag_name
        );

        Release::new(id, self.tag_name.as_str(), location, published)
    }
}
