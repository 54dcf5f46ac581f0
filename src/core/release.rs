//! Release data structures for relfind
//!
//! This module defines the provider-agnostic records every provider produces:
//! - `Release`: one normalized upstream release
//! - `ReleaseSet`: the ordered releases returned by one query
//! - `Status` / `Failure`: the tri-state outcome of a provider query

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// A normalized upstream release
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Release {
    /// Provider-scoped project identifier (e.g., "owner/repo")
    pub name: String,
    /// Release version label (e.g., "v1.2.3")
    pub version: String,
    /// Downloadable source archive URL
    pub location: String,
    /// Publish time, the UNIX epoch when upstream gave none we could parse
    pub published: DateTime<Utc>,
}

impl Release {
    /// Create a new release record
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        location: impl Into<String>,
        published: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            location: location.into(),
            published,
        }
    }

    /// Check whether upstream supplied a usable publish time
    pub fn has_timestamp(&self) -> bool {
        self.published != DateTime::<Utc>::default()
    }
}

/// Parse an RFC 3339 timestamp, falling back to the zero timestamp
pub fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_else(|e| {
            if !raw.is_empty() {
                log::debug!("Ignoring malformed timestamp '{}': {}", raw, e);
            }
            DateTime::<Utc>::default()
        })
}

/// Releases in the order upstream returned them
///
/// The set is never re-sorted, so `last` is positional rather than chronological.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReleaseSet(Vec<Release>);

impl ReleaseSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Release> {
        self.0.iter()
    }

    /// The last release received from upstream
    pub fn last(&self) -> Option<&Release> {
        self.0.last()
    }

    /// Take ownership of the last release received from upstream
    pub fn into_last(mut self) -> Option<Release> {
        self.0.pop()
    }
}

impl FromIterator<Release> for ReleaseSet {
    fn from_iter<I: IntoIterator<Item = Release>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ReleaseSet {
    type Item = Release;
    type IntoIter = std::vec::IntoIter<Release>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ReleaseSet {
    type Item = &'a Release;
    type IntoIter = std::slice::Iter<'a, Release>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Why a provider query produced nothing
///
/// Carries no detail; the cause is logged where it happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Failure {
    /// Upstream confirmed the project does not exist
    #[error("not found")]
    NotFound,
    /// Connection failure, unexpected HTTP status, or an undecodable body
    #[error("unavailable")]
    Unavailable,
}

/// Outcome of a provider query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Ok,
    NotFound,
    Unavailable,
}

impl Status {
    /// Condense a provider result into its status
    pub fn of<T>(result: &Result<T, Failure>) -> Self {
        match result {
            Ok(_) => Self::Ok,
            Err(failure) => (*failure).into(),
        }
    }

    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }
}

impl From<Failure> for Status {
    fn from(failure: Failure) -> Self {
        match failure {
            Failure::NotFound => Self::NotFound,
            Failure::Unavailable => Self::Unavailable,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::NotFound => write!(f, "not found"),
            Self::Unavailable => write!(f, "unavailable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn release(version: &str) -> Release {
        Release::new(
            "foo/bar",
            version,
            format!("https://example.com/{}.tar.gz", version),
            DateTime::<Utc>::default(),
        )
    }

    #[test]
    fn test_parse_timestamp() {
        let parsed = parse_timestamp("2021-03-04T05:06:07+02:00");
        assert_eq!(parsed, Utc.with_ymd_and_hms(2021, 3, 4, 3, 6, 7).unwrap());
    }

    #[test]
    fn test_parse_timestamp_fallback() {
        assert_eq!(parse_timestamp(""), DateTime::<Utc>::default());
        assert_eq!(parse_timestamp("yesterday"), DateTime::<Utc>::default());
        assert_eq!(parse_timestamp("2021-03-04"), DateTime::<Utc>::default());
    }

    #[test]
    fn test_has_timestamp() {
        let mut r = release("v1");
        assert!(!r.has_timestamp());

        r.published = parse_timestamp("2020-01-01T00:00:00Z");
        assert!(r.has_timestamp());
    }

    #[test]
    fn test_release_set_keeps_order() {
        let set: ReleaseSet = ["v2", "v1", "v3"].into_iter().map(release).collect();

        let versions: Vec<_> = set.iter().map(|r| r.version.as_str()).collect();
        assert_eq!(versions, vec!["v2", "v1", "v3"]);
        assert_eq!(set.last().unwrap().version, "v3");
        assert_eq!(set.into_last().unwrap().version, "v3");
    }

    #[test]
    fn test_release_set_empty() {
        let set = ReleaseSet::default();
        assert!(set.is_empty());
        assert!(set.last().is_none());
        assert!(set.into_last().is_none());
    }

    #[test]
    fn test_status_of() {
        assert_eq!(Status::of(&Ok::<_, Failure>(())), Status::Ok);
        assert_eq!(Status::of::<()>(&Err(Failure::NotFound)), Status::NotFound);
        assert_eq!(
            Status::of::<()>(&Err(Failure::Unavailable)),
            Status::Unavailable
        );
        assert!(Status::Ok.is_ok());
        assert!(!Status::NotFound.is_ok());
    }

    #[test]
    fn test_release_json() {
        let json = serde_json::to_value(release("v1")).unwrap();
        assert_eq!(json["name"], "foo/bar");
        assert_eq!(json["version"], "v1");
        assert_eq!(json["published"], "1970-01-01T00:00:00Z");
    }
}
