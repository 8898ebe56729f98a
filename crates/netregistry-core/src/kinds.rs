//! Open string enumerations used by the registry document.
//!
//! The registry is published independently of this crate, so every kind
//! field accepts values this version does not know about. Unknown values
//! decode into `Unknown(String)` and encode back unchanged.
//!
//! Equality and hashing go through the wire string, so a hand-built
//! `Unknown("mainnet")` is the same value as `Mainnet`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Value not known to this version of the crate, kept verbatim.
            /// Prefer `From<&str>`, which maps known wire values to their variant.
            Unknown(String),
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.as_str() == other.as_str()
            }
        }

        impl Eq for $name {}

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.as_str().hash(state);
            }
        }

        impl $name {
            /// Wire representation of this value.
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::Unknown(s) => s,
                }
            }

            /// Returns `false` for values that decoded into `Unknown`.
            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Unknown(_))
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                match s.as_str() {
                    $( $wire => Self::$variant, )+
                    _ => Self::Unknown(s),
                }
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::from(s.to_string())
            }
        }

        impl From<$name> for String {
            fn from(kind: $name) -> String {
                match kind {
                    $name::Unknown(s) => s,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.as_str())
            }
        }
    };
}

open_enum! {
    /// Whether the network is a mainnet, testnet or devnet.
    NetworkType {
        Mainnet => "mainnet",
        Testnet => "testnet",
        Devnet => "devnet",
    }
}

open_enum! {
    /// Kind of explorer-style API behind an [`ApiUrl`](crate::ApiUrl).
    ApiUrlKind {
        Etherscan => "etherscan",
        Blockscout => "blockscout",
        Ethplorer => "ethplorer",
        Subscan => "subscan",
        Other => "other",
    }
}

open_enum! {
    /// Encoding of hashes and addresses in Firehose blocks.
    BytesEncoding {
        Hex => "hex",
        /// `0x`-prefixed hex.
        PrefixedHex => "0xhex",
        Base58 => "base58",
        Base64 => "base64",
        Other => "other",
    }
}

open_enum! {
    /// Protocol name used by graph-node for this network.
    Protocol {
        Ethereum => "ethereum",
        Near => "near",
        Arweave => "arweave",
        Cosmos => "cosmos",
        Starknet => "starknet",
        Other => "other",
    }
}

open_enum! {
    /// Kind of edge between two networks.
    RelationKind {
        BeaconOf => "beaconOf",
        EvmOf => "evmOf",
        ForkedFrom => "forkedFrom",
        L2Of => "l2Of",
        ShardOf => "shardOf",
        TestnetOf => "testnetOf",
        Other => "other",
    }
}
