//! Mintkit CLI - wallet context and balances for the Mintkit token minter

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{autoconnect, balance, logs, network, status, wallets};

/// Mintkit - Solana wallet context and balances
#[derive(Parser)]
#[command(name = "mk", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Refresh and show the SOL balance of an account
    Balance {
        /// Base58 account address
        address: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or change the selected network
    Network {
        #[command(subcommand)]
        command: Option<network::NetworkCommands>,
    },

    /// Manage wallet auto-connect
    Autoconnect {
        #[command(subcommand)]
        command: Option<autoconnect::AutoConnectCommands>,
    },

    /// List wallet adapters for the selected network
    Wallets {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show network, endpoint and wallet settings
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect the diagnostic log
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Balance { address, json } => balance::run(&address, json),
        Commands::Network { command } => network::run(command),
        Commands::Autoconnect { command } => autoconnect::run(command),
        Commands::Wallets { json } => wallets::run(json),
        Commands::Status { json } => status::run(json),
        Commands::Logs { command } => logs::run(command),
    }
}
