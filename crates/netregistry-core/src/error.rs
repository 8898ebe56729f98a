//! Registry error types.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Where a registry document came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOrigin {
    /// Fetched over HTTP.
    Url(String),
    /// Read from a local file.
    File(PathBuf),
    /// Parsed from an in-memory string or byte slice.
    Memory,
}

impl fmt::Display for DocumentOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Memory => f.write_str("<memory>"),
        }
    }
}

/// Errors that can occur while building registry URLs or loading a registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Version string does not carry a numeric `major.minor` prefix.
    #[error("invalid registry version '{version}': {reason}")]
    InvalidVersion { version: String, reason: String },

    /// HTTP transport failed (connection refused, DNS, timeout, body read).
    #[error("failed to fetch registry from {url}: {reason}")]
    Network { url: String, reason: String },

    /// Server answered with anything other than `200 OK`.
    #[error("failed to fetch registry from {url}: HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// Document is not valid JSON or does not match the registry shape.
    #[error("failed to decode registry from {origin}: {source}")]
    Decode {
        origin: DocumentOrigin,
        #[source]
        source: serde_json::Error,
    },

    /// Local registry file could not be read.
    #[error("failed to read registry file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RegistryError {
    /// Returns `true` for transport and HTTP status failures.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::HttpStatus { .. })
    }

    /// Returns `true` if the document itself was malformed.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// The URL of the failed request, if the error came from a fetch.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Network { url, .. } | Self::HttpStatus { url, .. } => Some(url.as_str()),
            Self::Decode {
                origin: DocumentOrigin::Url(url),
                ..
            } => Some(url.as_str()),
            _ => None,
        }
    }

    pub(crate) fn invalid_version(version: &str, reason: impl Into<String>) -> Self {
        Self::InvalidVersion {
            version: version.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_mentions_url_and_code() {
        let err = RegistryError::HttpStatus {
            url: "https://example.com/r.json".into(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "failed to fetch registry from https://example.com/r.json: HTTP 404"
        );
        assert!(err.is_network());
        assert!(!err.is_decode());
        assert_eq!(err.url(), Some("https://example.com/r.json"));
    }

    #[test]
    fn decode_error_from_file_has_no_url() {
        let source = serde_json::from_str::<u8>("nope").unwrap_err();
        let err = RegistryError::Decode {
            origin: DocumentOrigin::File("/tmp/registry.json".into()),
            source,
        };
        assert!(err.is_decode());
        assert_eq!(err.url(), None);
        assert!(err.to_string().starts_with("failed to decode registry from /tmp/registry.json:"));
    }

    #[test]
    fn decode_origin_is_typed_not_sniffed() {
        let decode = |origin| RegistryError::Decode {
            origin,
            source: serde_json::from_str::<u8>("nope").unwrap_err(),
        };

        // A file whose name looks like a URL is still a file.
        let odd_path = decode(DocumentOrigin::File("cache/https://host/r.json".into()));
        assert_eq!(odd_path.url(), None);

        // A URL without a scheme separator is still a URL.
        let relative = decode(DocumentOrigin::Url("registry.local/r.json".into()));
        assert_eq!(relative.url(), Some("registry.local/r.json"));

        let memory = decode(DocumentOrigin::Memory);
        assert_eq!(memory.url(), None);
        assert!(memory.to_string().contains("<memory>"));
    }
}
