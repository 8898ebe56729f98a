//! netregistry-core — typed model and lookups for The Graph networks registry.
//!
//! # Overview
//!
//! The networks registry is a versioned JSON document listing every network
//! The Graph supports, with identifiers, display names and service endpoints.
//! This crate defines:
//!
//! - [`NetworksRegistry`] / [`Network`] — the document model
//! - [`kinds`] — open enumerations that tolerate values added by newer registries
//! - [`version`] — latest-compatible and exact-version document URLs
//! - lookups by graph ID (ID or alias) and CAIP-2 chain ID
//! - [`RegistryError`] — structured error type
//!
//! Fetching over HTTP lives in `netregistry-http`.
//!
//! # Example
//!
//! ```
//! use netregistry_core::NetworksRegistry;
//!
//! let json = r#"{
//!     "$schema": "https://networks-registry.thegraph.com/TheGraphNetworksRegistrySchema_v0_7.json",
//!     "version": "0.7.0",
//!     "title": "Example",
//!     "description": "Example",
//!     "updatedAt": "2025-01-01T00:00:00Z",
//!     "networks": [{
//!         "id": "mainnet", "aliases": ["eth"], "caip2Id": "eip155:1",
//!         "fullName": "Ethereum Mainnet", "shortName": "Ethereum",
//!         "networkType": "mainnet", "issuanceRewards": true, "services": {}
//!     }]
//! }"#;
//!
//! let registry: NetworksRegistry = json.parse()?;
//! assert_eq!(registry.get_network_by_graph_id("eth").unwrap().id, "mainnet");
//! assert!(registry.get_network_by_caip2_id("eip155:1").is_some());
//! # Ok::<(), netregistry_core::RegistryError>(())
//! ```

pub mod error;
pub mod kinds;
pub mod registry;
pub mod types;
pub mod version;

pub use error::{DocumentOrigin, RegistryError};
pub use kinds::{ApiUrlKind, BytesEncoding, NetworkType, Protocol, RelationKind};
pub use types::{
    ApiUrl, Firehose, Genesis, GraphNode, Icon, IndexerDocsUrl, Network, NetworksRegistry,
    Relation, Services, Web3Icons,
};
pub use version::{
    exact_version_url, latest_version_url, RegistryUrls, FALLBACK_BASE_URL, LIBRARY_VERSION,
    REGISTRY_BASE_URL,
};
