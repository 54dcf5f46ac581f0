//! HTTP client utilities for relfind

use crate::core::Failure;
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client wrapper
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default timeout (30 seconds)
    #[cfg(test)]
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Create a new HTTP client with custom timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(format!("relfind/{}", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Send a single GET request and decode the JSON response
    ///
    /// Only HTTP 200 is a success and 404 is reported as `NotFound`. Everything
    /// else, including transport and decode errors, is `Unavailable`. The cause
    /// is logged here and never returned. No retries.
    pub fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, Failure> {
        log::debug!("GET {} (JSON)", url);

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .map_err(|e| {
                log::error!("Failed to send GET request to {}: {}", url, e);
                Failure::Unavailable
            })?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => {
                log::debug!("HTTP 404 for {}", url);
                return Err(Failure::NotFound);
            }
            status => {
                log::warn!("HTTP {} for {}", status, url);
                return Err(Failure::Unavailable);
            }
        }

        response.json::<T>().map_err(|e| {
            log::error!("Failed to parse JSON response from {}: {}", url, e);
            Failure::Unavailable
        })
    }
}
