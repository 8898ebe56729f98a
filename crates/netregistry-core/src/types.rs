//! Registry document model.
//!
//! Mirrors the published `TheGraphNetworksRegistry` JSON shape. Optional
//! fields are skipped when absent so a parsed document re-serializes to
//! semantically equal JSON.

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Serialize, Serializer};

use crate::kinds::{ApiUrlKind, BytesEncoding, NetworkType, Protocol, RelationKind};

/// Top-level registry document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworksRegistry {
    /// Reference to the JSON schema this document follows.
    #[serde(rename = "$schema")]
    pub schema: String,
    pub title: String,
    pub description: String,
    /// Time of the last registry update, with the offset it was published in.
    #[serde(serialize_with = "serialize_rfc3339")]
    pub updated_at: DateTime<FixedOffset>,
    /// Semantic version of the registry document, e.g. `0.7.2`.
    pub version: String,
    /// Networks in document order. Lookups scan this front to back.
    pub networks: Vec<Network>,
}

/// RFC3339 with the original offset; a zero offset is written as `Z`.
fn serialize_rfc3339<S: Serializer>(t: &DateTime<FixedOffset>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&t.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}

/// One blockchain network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    /// Established name of the network in The Graph ecosystem, e.g. `mainnet`, `arweave-mainnet`.
    pub id: String,
    /// Alternate names, e.g. `ethereum`, `eth`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
    /// CAIP-2 chain identifier, e.g. `eip155:1`.
    pub caip2_id: String,
    /// Display name, e.g. `Ethereum Mainnet`.
    pub full_name: String,
    /// Short display name, e.g. `Ethereum`.
    pub short_name: String,
    /// Second display name, e.g. `Sepolia`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_name: Option<String>,
    pub network_type: NetworkType,
    /// Whether the network receives indexing rewards on The Graph Network.
    pub issuance_rewards: bool,
    /// Symbol of the native token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explorer_urls: Option<Vec<String>>,
    /// RPC endpoints; `{CUSTOM_API_KEY}` marks a private key placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpc_urls: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_urls: Option<Vec<ApiUrl>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexer_docs_urls: Option<Vec<IndexerDocsUrl>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genesis: Option<Genesis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firehose: Option<Firehose>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph_node: Option<GraphNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    /// Edges to other networks. Targets are not checked for existence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relations: Option<Vec<Relation>>,
    pub services: Services,
}

impl Network {
    /// Aliases as a slice; empty when the document has none.
    pub fn aliases(&self) -> &[String] {
        self.aliases.as_deref().unwrap_or_default()
    }

    /// Returns `true` if `alias` is one of this network's aliases.
    pub fn is_alias(&self, alias: &str) -> bool {
        self.aliases().iter().any(|a| a == alias)
    }

    /// Namespace part of the CAIP-2 ID (`eip155` in `eip155:1`).
    pub fn caip2_namespace(&self) -> Option<&str> {
        self.caip2_id.split_once(':').map(|(ns, _)| ns)
    }

    /// Reference part of the CAIP-2 ID (`1` in `eip155:1`).
    pub fn caip2_reference(&self) -> Option<&str> {
        self.caip2_id.split_once(':').map(|(_, r)| r)
    }

    /// Relations of the given kind, in document order.
    pub fn relations_of<'a>(&'a self, kind: &'a RelationKind) -> impl Iterator<Item = &'a Relation> {
        self.relations
            .iter()
            .flatten()
            .filter(move |r| &r.kind == kind)
    }
}

/// Explorer-style API endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiUrl {
    pub kind: ApiUrlKind,
    pub url: String,
}

/// Documentation for running indexer components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexerDocsUrl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
}

/// Genesis (or first available) block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genesis {
    /// 0x-prefixed hex or base58.
    pub hash: String,
    pub height: i64,
}

/// Firehose block information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Firehose {
    /// e.g. `sf.ethereum.type.v2.Block`
    pub block_type: String,
    /// Protobuf definitions on buf.build.
    pub buf_url: String,
    pub bytes_encoding: BytesEncoding,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evm_extended_model: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Protocol>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Icon {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web3_icons: Option<Web3Icons>,
}

/// Icon from the web3icons set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Web3Icons {
    pub name: String,
    /// All variants are available when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<String>>,
}

/// Typed edge from one network to another, by target ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    pub kind: RelationKind,
    pub network: String,
}

/// Service endpoints available for a network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Services {
    /// Firehose gRPC endpoints, e.g. `eth.firehose.pinax.network:443`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firehose: Option<Vec<String>>,
    /// Substreams gRPC endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substreams: Option<Vec<String>>,
    /// Subgraph deployment endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subgraphs: Option<Vec<String>>,
    /// Substreams-powered subgraph deployment endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sps: Option<Vec<String>>,
}

impl Services {
    /// Returns `true` if no service lists any endpoint.
    pub fn is_empty(&self) -> bool {
        [&self.firehose, &self.substreams, &self.subgraphs, &self.sps]
            .iter()
            .all(|list| list.as_ref().map_or(true, Vec::is_empty))
    }
}
