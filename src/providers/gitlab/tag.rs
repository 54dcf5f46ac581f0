//! GitLab tag records and their conversion into releases

use super::SOURCE_HOST;
use crate::core::{parse_timestamp, Release, ReleaseSet};
use serde::Deserialize;

/// Commit a GitLab tag points at
#[derive(Debug, Deserialize)]
pub struct TagCommit {
    /// Authoring time in RFC 3339
    #[serde(default)]
    pub authored_date: Option<String>,
}

/// Formal release attached to a GitLab tag
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct TagRelease {
    #[serde(default)]
    pub tag_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// GitLab repository tag
#[derive(Debug, Deserialize)]
pub struct Tag {
    /// Tag label (e.g., "v1.2.3")
    pub name: String,
    /// Null or absent on some partial records
    #[serde(default)]
    pub commit: Option<TagCommit>,
    /// Absent for tags without a formal release
    #[serde(default)]
    #[allow(dead_code)]
    pub release: Option<TagRelease>,
}

impl Tag {
    /// Convert this tag into a release of project `id`
    ///
    /// The version is always the tag label, even when a formal release exists.
    /// A missing or malformed authoring date yields the zero timestamp.
    pub fn convert(&self, id: &str) -> Release {
        let authored_date = self
            .commit
            .as_ref()
            .and_then(|c| c.authored_date.as_deref());
        let published = parse_timestamp(authored_date.unwrap_or_default());
        let basename = id.split_once('/').map_or(id, |(_, project)| project);
        let location = format!(
            "https://{}/{}/-/archive/{}/{}-{}.tar.gz",
            SOURCE_HOST, id, self.name, basename, self.name
        );

        Release::new(id, self.name.as_str(), location, published)
    }
}

/// Convert tags into releases, preserving their order
pub fn convert_all(tags: &[Tag], id: &str) -> ReleaseSet {
    tags.iter().map(|tag| tag.convert(id)).collect()
}
