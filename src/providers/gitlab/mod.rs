//! GitLab provider implementation

pub mod tag;

use super::base::Provider;
use crate::core::{Failure, ReleaseSet};
use crate::utils::HttpClient;
use regex::Regex;
use std::sync::OnceLock;
use tag::Tag;

/// Host that serves GitLab source archives
pub const SOURCE_HOST: &str = "gitlab.com";

static SOURCE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Matches `gitlab.com/<owner>/<project>`, stopping before any `.` or `/` in the project
fn source_regex() -> &'static Regex {
    SOURCE_REGEX.get_or_init(|| {
        Regex::new(r"gitlab\.com/([^/]+/[^/.]+)").expect("GitLab source pattern is valid")
    })
}

/// GitLab provider
pub struct GitLabProvider {
    http: HttpClient,
    api_url: String,
}

impl GitLabProvider {
    /// Create a new GitLab provider
    ///
    /// `api_url` is the instance root (e.g., "https://gitlab.com").
    pub fn with_api_url(http: HttpClient, api_url: &str) -> Self {
        Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the tags endpoint URL for a project
    ///
    /// Only the first `/` is encoded; identifiers never contain a second one.
    pub fn tags_url(&self, id: &str) -> String {
        format!(
            "{}/api/v4/projects/{}/repository/tags",
            self.api_url,
            id.replacen('/', "%2f", 1)
        )
    }
}

impl Provider for GitLabProvider {
    fn name(&self) -> &str {
        "GitLab"
    }

    fn match_query(&self, query: &str) -> Option<String> {
        source_regex()
            .captures(query)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    fn releases(&self, id: &str) -> Result<ReleaseSet, Failure> {
        log::info!("Fetching GitLab tags for {}", id);

        let tags: Vec<Tag> = self.http.get_json(&self.tags_url(id))?;
        let releases = tag::convert_all(&tags, id);

        log::debug!("Found {} tag(s) for {}", releases.len(), id);
        Ok(releases)
    }
}
