//! Network command - show or change the selected cluster

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use mintkit_core::config::Config;
use mintkit_core::services::{resolve_endpoint, SettingsService};
use mintkit_core::{Cluster, LogEvent};

use super::{get_logger, get_mintkit_dir, log_event};

#[derive(Subcommand)]
pub enum NetworkCommands {
    /// Show the selected network and its endpoint
    Show,
    /// Select a network (mainnet-beta, testnet, devnet)
    Set {
        cluster: Cluster,
    },
    /// Set or clear the RPC endpoint used on mainnet-beta
    Endpoint {
        /// Endpoint URL (omit with --clear)
        url: Option<String>,
        /// Go back to the public mainnet endpoint
        #[arg(long, conflicts_with = "url")]
        clear: bool,
    },
}

pub fn run(command: Option<NetworkCommands>) -> Result<()> {
    let mintkit_dir = get_mintkit_dir()?;
    std::fs::create_dir_all(&mintkit_dir)?;
    let settings = SettingsService::new(&mintkit_dir);

    match command {
        Some(NetworkCommands::Set { cluster }) => {
            settings.set_network(cluster)?;
            log_event(
                &get_logger(),
                LogEvent::new("network_changed").with_network(cluster.as_str()),
            );
            println!("Network set to {}", cluster.to_string().green());
            if cluster.is_production() {
                println!("{}", "Balances now come from mainnet-beta.".yellow());
            }
            Ok(())
        }
        Some(NetworkCommands::Endpoint { url, clear }) => {
            if clear {
                settings.set_mainnet_endpoint(None)?;
                println!("Mainnet endpoint reset to {}", Cluster::MainnetBeta.default_endpoint());
            } else if let Some(url) = url {
                settings.set_mainnet_endpoint(Some(&url))?;
                println!("Mainnet endpoint set to {}", url.green());
            } else {
                anyhow::bail!("Provide an endpoint URL or --clear");
            }
            Ok(())
        }
        Some(NetworkCommands::Show) | None => {
            let config = Config::load(&mintkit_dir)?;
            let endpoint = resolve_endpoint(config.network, config.mainnet_endpoint.as_deref());
            println!("Network: {}", config.network.to_string().green());
            println!("Endpoint: {}", endpoint);
            Ok(())
        }
    }
}
