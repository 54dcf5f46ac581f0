//! Base trait for release providers

use crate::core::{Failure, Release, ReleaseSet};

/// Trait for release providers (GitLab, GitHub, etc.)
pub trait Provider {
    /// Get the provider name
    fn name(&self) -> &str;

    /// Extract a project identifier from a free-form source reference
    ///
    /// Returns `None` when this provider does not recognize the query.
    ///
    /// # Arguments
    /// * `query` - Source reference (e.g., "https://gitlab.com/owner/repo.git")
    fn match_query(&self, query: &str) -> Option<String>;

    /// Fetch every published release of a project, in upstream order
    ///
    /// # Arguments
    /// * `id` - Project identifier returned by `match_query` (e.g., "owner/repo")
    fn releases(&self, id: &str) -> Result<ReleaseSet, Failure>;

    /// Fetch the newest release of a project
    ///
    /// By default this is the last release upstream returned. The set is not
    /// re-sorted by date or version.
    fn latest(&self, id: &str) -> Result<Option<Release>, Failure> {
        Ok(self.releases(id)?.into_last())
    }
}
