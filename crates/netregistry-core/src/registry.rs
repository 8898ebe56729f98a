//! Parsing, local loading and lookups over a [`NetworksRegistry`].
//!
//! Lookups are linear scans in document order; no index is built. The first
//! matching network wins.

use std::path::Path;
use std::str::FromStr;

use crate::error::{DocumentOrigin, RegistryError};
use crate::types::{Network, NetworksRegistry};

impl FromStr for NetworksRegistry {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}

impl NetworksRegistry {
    /// Decode a registry from JSON text.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        Self::from_slice(json.as_bytes())
    }

    /// Decode a registry from raw bytes.
    ///
    /// Only the JSON structure is checked: unknown kind values are kept and
    /// relation targets are not resolved.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, RegistryError> {
        Self::decode(bytes, DocumentOrigin::Memory)
    }

    /// Decode bytes read from `origin`, recording it in errors.
    pub fn decode(bytes: &[u8], origin: DocumentOrigin) -> Result<Self, RegistryError> {
        serde_json::from_slice(bytes).map_err(|source| RegistryError::Decode { origin, source })
    }

    /// Read and decode a registry file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "loaded registry file");
        Self::decode(&bytes, DocumentOrigin::File(path.to_path_buf()))
    }

    /// Serialize back to compact JSON.
    pub fn to_json(&self) -> Result<String, RegistryError> {
        serde_json::to_string(self).map_err(|source| RegistryError::Decode {
            origin: DocumentOrigin::Memory,
            source,
        })
    }

    /// Serialize back to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, RegistryError> {
        serde_json::to_string_pretty(self).map_err(|source| RegistryError::Decode {
            origin: DocumentOrigin::Memory,
            source,
        })
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Network> {
        self.networks.iter()
    }

    /// Find a network by ID or alias.
    ///
    /// Each network's ID is checked before its aliases; networks are visited
    /// in document order and the first match is returned.
    pub fn get_network_by_graph_id(&self, id: &str) -> Option<&Network> {
        self.find_graph_id(id, true)
    }

    /// Find a network by ID only.
    #[deprecated(note = "use `get_network_by_graph_id`, which also resolves aliases")]
    pub fn get_network_by_id(&self, id: &str) -> Option<&Network> {
        self.find_graph_id(id, false)
    }

    /// Find a network by ID or alias.
    #[deprecated(note = "use `get_network_by_graph_id`")]
    pub fn get_network_by_alias(&self, alias: &str) -> Option<&Network> {
        self.get_network_by_graph_id(alias)
    }

    /// Find a network by CAIP-2 chain ID, e.g. `eip155:1`.
    ///
    /// Matching is exact and case-sensitive. An input without a `:` logs a
    /// warning and returns `None`.
    pub fn get_network_by_caip2_id(&self, chain_id: &str) -> Option<&Network> {
        if !chain_id.contains(':') {
            tracing::warn!(
                chain_id,
                "CAIP-2 chain ID should be in the format '[namespace]:[reference]', e.g. 'eip155:1'"
            );
            return None;
        }
        self.networks.iter().find(|n| n.caip2_id == chain_id)
    }

    /// Networks of which `id` is the target of a relation, with the relation kind.
    pub fn networks_related_to<'a>(
        &'a self,
        id: &'a str,
    ) -> impl Iterator<Item = (&'a Network, &'a crate::RelationKind)> {
        self.networks.iter().flat_map(move |n| {
            n.relations
                .iter()
                .flatten()
                .filter(move |r| r.network == id)
                .map(move |r| (n, &r.kind))
        })
    }

    fn find_graph_id(&self, key: &str, include_aliases: bool) -> Option<&Network> {
        self.networks
            .iter()
            .find(|n| n.id == key || (include_aliases && n.is_alias(key)))
    }
}

impl<'a> IntoIterator for &'a NetworksRegistry {
    type Item = &'a Network;
    type IntoIter = std::slice::Iter<'a, Network>;

    fn into_iter(self) -> Self::IntoIter {
        self.networks.iter()
    }
}
