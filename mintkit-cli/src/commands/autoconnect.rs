//! Autoconnect command - manage the wallet auto-connect preference

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use super::get_mintkit_dir;
use mintkit_core::services::SettingsService;

#[derive(Subcommand)]
pub enum AutoConnectCommands {
    /// Reconnect the last used wallet automatically
    #[command(name = "on")]
    On,
    /// Wait for an explicit wallet choice
    #[command(name = "off")]
    Off,
    /// Show the auto-connect setting
    Status,
}

pub fn run(command: Option<AutoConnectCommands>) -> Result<()> {
    let mintkit_dir = get_mintkit_dir()?;
    std::fs::create_dir_all(&mintkit_dir)?;
    let settings = SettingsService::new(&mintkit_dir);

    match command {
        Some(AutoConnectCommands::On) => {
            settings.set_auto_connect(true)?;
            println!("{}", "Auto-connect enabled".green());
        }
        Some(AutoConnectCommands::Off) => {
            settings.set_auto_connect(false)?;
            println!("{}", "Auto-connect disabled".yellow());
        }
        Some(AutoConnectCommands::Status) | None => {
            if settings.auto_connect()? {
                println!("Auto-connect is {}", "ON".green());
            } else {
                println!("Auto-connect is {}", "OFF".yellow());
            }
        }
    }

    Ok(())
}
