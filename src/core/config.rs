//! Configuration management for relfind
//!
//! Settings are read from config.toml in the user's config directory
//! (e.g., ~/.config/relfind/config.toml) or from a path given on the command line.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default GitLab API host
pub const DEFAULT_GITLAB_API_URL: &str = "https://gitlab.com";

/// Default GitHub API host
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Settings stored in config.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,

    /// Base URL of the GitLab instance whose API is queried
    ///
    /// Archive URLs are always built against gitlab.com.
    pub gitlab_api_url: String,

    /// Base URL of the GitHub REST API
    pub github_api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            gitlab_api_url: DEFAULT_GITLAB_API_URL.to_string(),
            github_api_url: DEFAULT_GITHUB_API_URL.to_string(),
        }
    }
}

impl Config {
    /// Default location of config.toml, if a config directory exists on this platform
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("relfind").join("config.toml"))
    }

    /// Load configuration
    ///
    /// An explicit path must exist. Without one, the default location is used
    /// when present, and built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                Self::load_file(path)?
            }
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_file(&path)?,
                _ => {
                    log::debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_file(path: &Path) -> Result<Self> {
        log::debug!("Loading config from {}", path.display());

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// HTTP request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate configuration
    ///
    /// Checks that:
    /// - The timeout is non-zero
    /// - API URLs use http or https
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            anyhow::bail!("timeout_secs must be greater than zero");
        }

        for (key, url) in [
            ("gitlab_api_url", &self.gitlab_api_url),
            ("github_api_url", &self.github_api_url),
        ] {
            if !url.starts_with("https://") && !url.starts_with("http://") {
                anyhow::bail!("Invalid {}: '{}' - Expected an http(s) URL", key, url);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.gitlab_api_url, "https://gitlab.com");
        assert_eq!(config.github_api_url, "https://api.github.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(
            &config_path,
            "timeout_secs = 5\ngitlab_api_url = \"https://gitlab.example.org\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&config_path)).unwrap();
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.gitlab_api_url, "https://gitlab.example.org");
        assert_eq!(config.github_api_url, DEFAULT_GITHUB_API_URL);
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.toml");

        assert!(Config::load(Some(&config_path)).is_err());
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "timeout_secs = \"soon\"").unwrap();

        assert!(Config::load(Some(&config_path)).is_err());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let config = Config {
            timeout_secs: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_url() {
        let config = Config {
            github_api_url: "api.github.com".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
