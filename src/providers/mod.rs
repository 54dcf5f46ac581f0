//! Release providers for relfind

pub mod base;
pub mod github;
pub mod gitlab;

// Re-export commonly used items
pub use base::Provider;
pub use github::GitHubProvider;
pub use gitlab::GitLabProvider;

use crate::core::Config;
use crate::utils::HttpClient;
use anyhow::Result;

/// Ordered collection of providers
///
/// Queries are offered to each provider in turn; the first match wins.
pub struct Registry {
    providers: Vec<Box<dyn Provider>>,
}

impl Registry {
    /// Create a registry from an explicit provider list
    pub fn new(providers: Vec<Box<dyn Provider>>) -> Self {
        Self { providers }
    }

    /// Create the default registry (GitLab, then GitHub)
    pub fn from_config(config: &Config) -> Result<Self> {
        let gitlab = GitLabProvider::with_api_url(
            HttpClient::with_timeout(config.timeout())?,
            &config.gitlab_api_url,
        );
        let github = GitHubProvider::with_api_url(
            HttpClient::with_timeout(config.timeout())?,
            &config.github_api_url,
        );

        Ok(Self::new(vec![Box::new(gitlab), Box::new(github)]))
    }

    /// Find the first provider that recognizes `query`, with the identifier it extracted
    pub fn resolve(&self, query: &str) -> Option<(&dyn Provider, String)> {
        self.providers.iter().find_map(|provider| {
            provider.match_query(query).map(|id| {
                log::debug!("{} matched '{}' as {}", provider.name(), query, id);
                (provider.as_ref(), id)
            })
        })
    }

    /// Provider names in match order
    pub fn names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }
}
