//! netregistry CLI — fetch and inspect The Graph networks registry.
//!
//! # Commands
//! ```text
//! netregistry load                              latest compatible registry (primary, then mirror)
//! netregistry load   --registry-version 0.7.2   exact registry version
//! netregistry load   --file registry.json       local copy
//! netregistry list   [--file <path> | --registry-version <v> | --url <url>]
//! netregistry show   <graph-id | caip2-id> [--json]
//! netregistry urls   [--registry-version <v>]
//! ```
//!
//! Logs go to stderr; `RUST_LOG` overrides `--log-level`.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use netregistry_core::{Network, NetworksRegistry, RegistryUrls};
use netregistry_http::{RegistryClient, RegistryClientConfig};

mod logging;

#[derive(Parser)]
#[command(
    name = "netregistry",
    about = "Fetch and inspect The Graph networks registry",
    version
)]
struct Cli {
    /// Canonical registry host
    #[arg(long, global = true, default_value = netregistry_core::REGISTRY_BASE_URL)]
    primary_url: String,

    /// Mirror tried once when the canonical host fails
    #[arg(long, global = true, default_value = netregistry_core::FALLBACK_BASE_URL)]
    fallback_url: String,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    timeout_secs: u64,

    /// Default log level when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Where to read the registry from. Defaults to the latest compatible version.
#[derive(Args, Debug)]
struct SourceArgs {
    /// Local registry JSON file
    #[arg(long, conflicts_with_all = ["registry_version", "url"])]
    file: Option<PathBuf>,

    /// Exact registry version, e.g. 0.7.2
    #[arg(long, conflicts_with = "url")]
    registry_version: Option<String>,

    /// Fetch this exact URL, without fallback
    #[arg(long)]
    url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the registry and print a summary
    Load {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// List all networks
    List {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Show one network by ID, alias or CAIP-2 chain ID
    Show {
        /// Network ID or alias (e.g. `eth`), or CAIP-2 ID (e.g. `eip155:1`)
        key: String,
        /// Treat the key as a CAIP-2 chain ID even without a ':'
        #[arg(long)]
        caip2: bool,
        /// Print the network as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the registry URLs this client would fetch
    Urls {
        /// Exact registry version instead of the latest compatible one
        #[arg(long)]
        registry_version: Option<String>,
    },
}

impl Cli {
    fn log_config(&self) -> logging::LogConfig {
        logging::LogConfig {
            level: self.log_level.clone(),
            json: self.log_json,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init_tracing(&cli.log_config());

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let urls = RegistryUrls::default().with_base_urls(&cli.primary_url, &cli.fallback_url);
    let config = RegistryClientConfig {
        urls,
        request_timeout: Duration::from_secs(cli.timeout_secs),
        ..Default::default()
    };

    match cli.command {
        Commands::Load { source } => {
            let registry = load(&config, &source).await?;
            cmd_load(&registry);
            Ok(())
        }
        Commands::List { source } => {
            let registry = load(&config, &source).await?;
            cmd_list(&registry);
            Ok(())
        }
        Commands::Show { key, caip2, json, source } => {
            let registry = load(&config, &source).await?;
            cmd_show(&registry, &key, caip2, json)
        }
        Commands::Urls { registry_version } => {
            cmd_urls(&config.urls, registry_version.as_deref());
            Ok(())
        }
    }
}

async fn load(config: &RegistryClientConfig, source: &SourceArgs) -> Result<NetworksRegistry> {
    if let Some(path) = &source.file {
        return NetworksRegistry::from_file(path)
            .with_context(|| format!("loading {}", path.display()));
    }

    let client = RegistryClient::new(config.clone())?;
    let registry = match (&source.registry_version, &source.url) {
        (_, Some(url)) => client.load_from_url(url).await?,
        (Some(version), None) => client.load_exact_version(version).await?,
        (None, None) => {
            tracing::info!(url = %client.urls().latest_version_url(), "fetching latest registry");
            client.load_latest_version().await?
        }
    };
    Ok(registry)
}

// ─── Command implementations ─────────────────────────────────────────────────

fn cmd_load(registry: &NetworksRegistry) {
    println!("Registry:  {} v{}", registry.title, registry.version);
    println!("Updated:   {}", registry.updated_at.to_rfc3339());
    println!("Networks:  {}", registry.len());
}

fn cmd_list(registry: &NetworksRegistry) {
    for network in registry {
        println!(
            "{:<28} {:<22} {:<8} {}",
            network.id, network.caip2_id, network.network_type, network.full_name
        );
    }
    println!("\n{} networks (registry v{})", registry.len(), registry.version);
}

fn cmd_show(registry: &NetworksRegistry, key: &str, caip2: bool, as_json: bool) -> Result<()> {
    let network = if caip2 || key.contains(':') {
        registry.get_network_by_caip2_id(key)
    } else {
        registry.get_network_by_graph_id(key)
    };
    let Some(network) = network else {
        bail!("no network matches '{key}'");
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(network)?);
    } else {
        print_network(network);
    }
    Ok(())
}

fn print_network(network: &Network) {
    println!("{}: {}", network.id, network.full_name);
    if !network.aliases().is_empty() {
        println!("  Aliases:   {}", network.aliases().join(", "));
    }
    println!("  Type:      {}", network.network_type);
    println!("  CAIP-2:    {}", network.caip2_id);
    println!("  Rewards:   {}", if network.issuance_rewards { "yes" } else { "no" });
    if let Some(token) = &network.native_token {
        println!("  Token:     {token}");
    }
    for relation in network.relations.iter().flatten() {
        println!("  Relation:  {} {}", relation.kind, relation.network);
    }

    let services = &network.services;
    let lists = [
        ("Firehose", &services.firehose),
        ("Substreams", &services.substreams),
        ("Subgraphs", &services.subgraphs),
        ("SpS", &services.sps),
    ];
    for (name, endpoints) in lists {
        for endpoint in endpoints.iter().flatten() {
            println!("  {name:<10} {endpoint}");
        }
    }
}

fn cmd_urls(urls: &RegistryUrls, version: Option<&str>) {
    match version {
        Some(v) => {
            println!("primary:  {}", urls.exact_version_url(v));
            println!("fallback: {}", urls.exact_version_fallback_url(v));
        }
        None => {
            println!("primary:  {}", urls.latest_version_url());
            println!("fallback: {}", urls.latest_version_fallback_url());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn file_conflicts_with_version() {
        let parsed = Cli::try_parse_from([
            "netregistry", "list", "--file", "r.json", "--registry-version", "0.7.0",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn log_flags_feed_log_config() {
        let cli = Cli::try_parse_from(["netregistry", "urls"]).unwrap();
        let config = cli.log_config();
        assert_eq!(config.level, "warn");
        assert!(!config.json);

        let cli = Cli::try_parse_from(["netregistry", "list", "--log-level", "debug", "--log-json"])
            .unwrap();
        let config = cli.log_config();
        assert_eq!(config.level, "debug");
        assert!(config.json);
    }

    #[test]
    fn show_parses_key_and_flags() {
        let cli = Cli::try_parse_from(["netregistry", "show", "eip155:1", "--json"]).unwrap();
        match cli.command {
            Commands::Show { key, json, caip2, source } => {
                assert_eq!(key, "eip155:1");
                assert!(json);
                assert!(!caip2);
                assert!(source.file.is_none());
            }
            _ => panic!("expected show"),
        }
    }
}
