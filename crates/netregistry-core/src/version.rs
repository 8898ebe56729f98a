//! Versioned registry URLs.
//!
//! Registry documents are published under two hosts:
//!
//! ```text
//! {base}/TheGraphNetworksRegistry_v{major}_{minor}_x.json   latest compatible
//! {base}/TheGraphNetworksRegistry_v{major}_{minor}_{patch}.json   exact
//! ```
//!
//! A library at version `0.7.x` reads the latest `0.7.y` document even when
//! `0.8.0` has been published.

use crate::error::RegistryError;

/// Canonical registry host.
pub const REGISTRY_BASE_URL: &str = "https://networks-registry.thegraph.com";

/// Static mirror used when the canonical host fails.
pub const FALLBACK_BASE_URL: &str =
    "https://raw.githubusercontent.com/graphprotocol/networks-registry/refs/heads/main/public";

/// Version of this crate; selects the compatible registry line by default.
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");

const DOCUMENT_PREFIX: &str = "TheGraphNetworksRegistry_v";

/// Split `version` into its numeric major and minor components.
///
/// Anything after the minor component (patch, pre-release) is ignored.
pub fn major_minor(version: &str) -> Result<(u64, u64), RegistryError> {
    let mut parts = version.split('.');
    let (Some(major), Some(minor)) = (parts.next(), parts.next()) else {
        return Err(RegistryError::invalid_version(
            version,
            "version must include major and minor numbers (x.y.z)",
        ));
    };
    let parse = |part: &str, name: &str| {
        part.parse::<u64>().map_err(|_| {
            RegistryError::invalid_version(version, format!("{name} component '{part}' is not a number"))
        })
    };
    Ok((parse(major, "major")?, parse(minor, "minor")?))
}

/// Check an exact registry version: `[v]major.minor[.patch]`, all numeric.
pub fn validate_exact_version(version: &str) -> Result<(), RegistryError> {
    let bare = version.strip_prefix('v').unwrap_or(version);
    let parts: Vec<&str> = bare.split('.').collect();
    if !(2..=3).contains(&parts.len())
        || !parts.iter().all(|p| !p.is_empty() && p.parse::<u64>().is_ok())
    {
        return Err(RegistryError::invalid_version(
            version,
            "version must be in format major.minor[.patch] with valid numbers",
        ));
    }
    Ok(())
}

/// URL of the latest document compatible with `library_version`.
///
/// # Panics
///
/// Panics if `library_version` lacks a numeric `major.minor` prefix. The
/// library version is fixed when the caller is built, so a malformed value
/// is a configuration bug. Use [`major_minor`] to check untrusted input.
pub fn latest_version_url(base_url: &str, library_version: &str) -> String {
    let (major, minor) = match major_minor(library_version) {
        Ok(mm) => mm,
        Err(e) => panic!("{e}"),
    };
    format!(
        "{}/{DOCUMENT_PREFIX}{major}_{minor}_x.json",
        base_url.trim_end_matches('/')
    )
}

/// URL of one exact registry version, e.g. `0.5.0` → `..._v0_5_0.json`.
///
/// A leading `v` is accepted and dropped.
pub fn exact_version_url(base_url: &str, version: &str) -> String {
    let bare = version.strip_prefix('v').unwrap_or(version);
    format!(
        "{}/{DOCUMENT_PREFIX}{}.json",
        base_url.trim_end_matches('/'),
        bare.replace('.', "_")
    )
}

/// Primary and fallback hosts plus the library version used for
/// latest-version negotiation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryUrls {
    pub primary_base_url: String,
    pub fallback_base_url: String,
    pub library_version: String,
}

impl Default for RegistryUrls {
    fn default() -> Self {
        Self {
            primary_base_url: REGISTRY_BASE_URL.into(),
            fallback_base_url: FALLBACK_BASE_URL.into(),
            library_version: LIBRARY_VERSION.into(),
        }
    }
}

impl RegistryUrls {
    /// Override both hosts, keeping the library version.
    pub fn with_base_urls(mut self, primary: impl Into<String>, fallback: impl Into<String>) -> Self {
        self.primary_base_url = primary.into();
        self.fallback_base_url = fallback.into();
        self
    }

    /// Negotiate against a different library version.
    pub fn with_library_version(mut self, version: impl Into<String>) -> Self {
        self.library_version = version.into();
        self
    }

    /// Check that `library_version` can build latest-version URLs.
    pub fn validate(&self) -> Result<(), RegistryError> {
        major_minor(&self.library_version).map(|_| ())
    }

    /// See [`latest_version_url`] for the panic condition.
    pub fn latest_version_url(&self) -> String {
        latest_version_url(&self.primary_base_url, &self.library_version)
    }

    /// See [`latest_version_url`] for the panic condition.
    pub fn latest_version_fallback_url(&self) -> String {
        latest_version_url(&self.fallback_base_url, &self.library_version)
    }

    pub fn exact_version_url(&self, version: &str) -> String {
        exact_version_url(&self.primary_base_url, version)
    }

    pub fn exact_version_fallback_url(&self, version: &str) -> String {
        exact_version_url(&self.fallback_base_url, version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_url_uses_major_minor() {
        assert_eq!(
            latest_version_url(REGISTRY_BASE_URL, "0.7.3"),
            "https://networks-registry.thegraph.com/TheGraphNetworksRegistry_v0_7_x.json"
        );
        assert_eq!(
            latest_version_url("http://localhost:8080/", "12.4"),
            "http://localhost:8080/TheGraphNetworksRegistry_v12_4_x.json"
        );
        assert!(latest_version_url(REGISTRY_BASE_URL, "1.2.3-beta.1").contains("v1_2_x"));
    }

    #[test]
    #[should_panic(expected = "major and minor")]
    fn latest_url_panics_without_minor() {
        latest_version_url(REGISTRY_BASE_URL, "7");
    }

    #[test]
    fn major_minor_rejects_non_numeric() {
        assert_eq!(major_minor("0.5.0").unwrap(), (0, 5));
        assert!(matches!(
            major_minor("x.5"),
            Err(RegistryError::InvalidVersion { .. })
        ));
        assert!(major_minor("").is_err());
        assert!(major_minor("1.").is_err());
    }

    #[test]
    fn exact_url_replaces_every_dot() {
        assert_eq!(
            exact_version_url(REGISTRY_BASE_URL, "0.5.0"),
            "https://networks-registry.thegraph.com/TheGraphNetworksRegistry_v0_5_0.json"
        );
        assert!(exact_version_url(REGISTRY_BASE_URL, "v0.5.3").ends_with("_v0_5_3.json"));
    }

    #[test]
    fn validate_exact_version_formats() {
        for ok in ["0.5.0", "0.5", "10.5.2", "v0.5.0"] {
            assert!(validate_exact_version(ok).is_ok(), "{ok}");
        }
        for bad in ["0.5.0.1", "0.5-alpha", "0.5.", ".5.0", "latest", ""] {
            assert!(
                matches!(validate_exact_version(bad), Err(RegistryError::InvalidVersion { .. })),
                "{bad}"
            );
        }
    }

    #[test]
    fn registry_urls_default_hosts() {
        let urls = RegistryUrls::default().with_library_version("0.7.0");
        assert!(urls.latest_version_url().starts_with(REGISTRY_BASE_URL));
        assert!(urls.latest_version_fallback_url().starts_with(FALLBACK_BASE_URL));
        assert!(urls.latest_version_fallback_url().ends_with("/TheGraphNetworksRegistry_v0_7_x.json"));
        assert!(urls.exact_version_fallback_url("0.6.1").ends_with("_v0_6_1.json"));
        assert!(urls.validate().is_ok());
        assert!(urls.with_library_version("dev").validate().is_err());
    }

    #[test]
    fn crate_version_is_valid_library_version() {
        assert!(major_minor(LIBRARY_VERSION).is_ok());
    }
}
