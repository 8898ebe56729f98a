//! HTTP registry loader backed by `reqwest`.
//!
//! Each load issues one GET to the canonical host. If that fails for any
//! reason (transport, status, decode) the static mirror is tried once. When
//! both fail the caller gets the canonical host's error.

use std::error::Error as _;
use std::time::Duration;

use netregistry_core::version::validate_exact_version;
use netregistry_core::{DocumentOrigin, NetworksRegistry, RegistryError, RegistryUrls};
use reqwest::StatusCode;

/// Configuration for [`RegistryClient`].
#[derive(Debug, Clone)]
pub struct RegistryClientConfig {
    pub urls: RegistryUrls,
    /// Deadline for a single request, connect through body.
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Default for RegistryClientConfig {
    fn default() -> Self {
        Self {
            urls: RegistryUrls::default(),
            request_timeout: Duration::from_secs(30),
            user_agent: format!("netregistry/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Loads registry documents over HTTP.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    urls: RegistryUrls,
    http: reqwest::Client,
}

impl RegistryClient {
    /// Build a client, checking the library version eagerly so URL
    /// construction cannot fail later.
    pub fn new(config: RegistryClientConfig) -> Result<Self, RegistryError> {
        config.urls.validate()?;
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| RegistryError::Network {
                url: config.urls.primary_base_url.clone(),
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            urls: config.urls,
            http,
        })
    }

    /// Client for the canonical hosts with default settings.
    pub fn default_client() -> Result<Self, RegistryError> {
        Self::new(RegistryClientConfig::default())
    }

    pub fn urls(&self) -> &RegistryUrls {
        &self.urls
    }

    /// Fetch and decode the document at `url`. No fallback, no retry.
    pub async fn load_from_url(&self, url: &str) -> Result<NetworksRegistry, RegistryError> {
        tracing::debug!(url, "fetching registry");

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| network_error(url, &e))?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(RegistryError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await.map_err(|e| network_error(url, &e))?;
        tracing::debug!(url, bytes = body.len(), "registry downloaded");
        NetworksRegistry::decode(&body, DocumentOrigin::Url(url.to_string()))
    }

    /// Latest registry compatible with the configured library version:
    /// library `0.7.x` reads the newest `0.7.y` document.
    pub async fn load_latest_version(&self) -> Result<NetworksRegistry, RegistryError> {
        let primary = self.urls.latest_version_url();
        let fallback = self.urls.latest_version_fallback_url();
        self.load_with_fallback(&primary, &fallback).await
    }

    /// One exact registry version, e.g. `0.7.2` (a leading `v` is accepted).
    pub async fn load_exact_version(
        &self,
        version: &str,
    ) -> Result<NetworksRegistry, RegistryError> {
        validate_exact_version(version)?;
        let primary = self.urls.exact_version_url(version);
        let fallback = self.urls.exact_version_fallback_url(version);
        self.load_with_fallback(&primary, &fallback).await
    }

    async fn load_with_fallback(
        &self,
        primary: &str,
        fallback: &str,
    ) -> Result<NetworksRegistry, RegistryError> {
        let primary_err = match self.load_from_url(primary).await {
            Ok(registry) => return Ok(registry),
            Err(e) => e,
        };

        tracing::warn!(
            error = %primary_err,
            fallback,
            "primary registry host failed, trying fallback"
        );

        match self.load_from_url(fallback).await {
            Ok(registry) => Ok(registry),
            Err(fallback_err) => {
                tracing::debug!(error = %fallback_err, "fallback registry host failed");
                Err(primary_err)
            }
        }
    }
}

fn network_error(url: &str, err: &reqwest::Error) -> RegistryError {
    let mut reason = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        reason.push_str(": ");
        reason.push_str(&cause.to_string());
        source = cause.source();
    }
    RegistryError::Network {
        url: url.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_library_version_rejected_at_construction() {
        let config = RegistryClientConfig {
            urls: RegistryUrls::default().with_library_version("nightly"),
            ..Default::default()
        };
        assert!(matches!(
            RegistryClient::new(config),
            Err(RegistryError::InvalidVersion { .. })
        ));
    }

    #[test]
    fn default_config_targets_canonical_hosts() {
        let client = RegistryClient::default_client().unwrap();
        assert!(client
            .urls()
            .latest_version_url()
            .starts_with(netregistry_core::REGISTRY_BASE_URL));
        assert_eq!(
            RegistryClientConfig::default().request_timeout,
            Duration::from_secs(30)
        );
    }

    #[tokio::test]
    async fn malformed_exact_version_fails_before_fetching() {
        let client = RegistryClient::new(RegistryClientConfig {
            urls: RegistryUrls::default().with_base_urls("http://127.0.0.1:1", "http://127.0.0.1:1"),
            ..Default::default()
        })
        .unwrap();
        let err = client.load_exact_version("0.5-alpha").await.unwrap_err();
        assert!(matches!(err, RegistryError::InvalidVersion { .. }));
    }
}
