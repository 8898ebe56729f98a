//! netregistry-http — fetch The Graph networks registry over HTTP.
//!
//! Documents are requested from the canonical host first and, on any
//! failure, once from a static mirror. Errors always describe the canonical
//! attempt.
//!
//! # Quick start
//! ```rust,no_run
//! use netregistry_http::RegistryClient;
//!
//! # async fn run() -> Result<(), netregistry_core::RegistryError> {
//! let client = RegistryClient::default_client()?;
//! let registry = client.load_latest_version().await?;
//! if let Some(network) = registry.get_network_by_graph_id("eth") {
//!     println!("{} ({})", network.full_name, network.caip2_id);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;

pub use client::{RegistryClient, RegistryClientConfig};
