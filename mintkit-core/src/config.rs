//! Configuration management
//!
//! Settings live in settings.json inside the mintkit directory:
//! ```json
//! {
//!   "network": "devnet",
//!   "autoConnect": true,
//!   "mainnetEndpoint": "https://my-rpc.example.com",
//!   "balance": { "onFailure": "reset" }
//! }
//! ```
//! Fields this crate does not manage are preserved on save.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::{Cluster, FailurePolicy};

/// Environment variable overriding the selected network
pub const NETWORK_ENV: &str = "MINTKIT_NETWORK";

/// Environment variable overriding the mainnet RPC endpoint
pub const MAINNET_ENDPOINT_ENV: &str = "MINTKIT_MAINNET_RPC_URL";

const SETTINGS_FILE: &str = "settings.json";

/// Raw settings.json structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    network: Cluster,
    #[serde(default = "default_auto_connect")]
    auto_connect: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mainnet_endpoint: Option<String>,
    #[serde(default)]
    balance: BalanceSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

impl Default for SettingsFile {
    fn default() -> Self {
        Self {
            network: Cluster::default(),
            auto_connect: default_auto_connect(),
            mainnet_endpoint: None,
            balance: BalanceSettings::default(),
            other: HashMap::new(),
        }
    }
}

fn default_auto_connect() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BalanceSettings {
    #[serde(default)]
    on_failure: FailurePolicy,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Mintkit configuration (simplified view of settings)
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub network: Cluster,
    pub auto_connect: bool,
    /// Endpoint used instead of the public one when on mainnet-beta
    pub mainnet_endpoint: Option<String>,
    pub balance_failure_policy: FailurePolicy,
}

impl Config {
    /// Load config from the mintkit directory
    ///
    /// `MINTKIT_NETWORK` and `MINTKIT_MAINNET_RPC_URL` take precedence over
    /// the settings file. An unparseable settings file falls back to defaults.
    pub fn load(mintkit_dir: &Path) -> Result<Self> {
        Self::load_file(mintkit_dir)?.with_overrides(|key| std::env::var(key).ok())
    }

    /// Load only what settings.json holds, ignoring environment overrides
    ///
    /// Use this before `save` so an override never becomes a saved setting.
    pub fn load_file(mintkit_dir: &Path) -> Result<Self> {
        let raw = read_settings(mintkit_dir)?;
        Ok(Self {
            network: raw.network,
            auto_connect: raw.auto_connect,
            mainnet_endpoint: raw.mainnet_endpoint.filter(|v| !v.trim().is_empty()),
            balance_failure_policy: raw.balance.on_failure,
        })
    }

    /// Apply override values looked up by variable name
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(value) = non_empty(NETWORK_ENV) {
            self.network = value.parse()?;
        }
        if let Some(endpoint) = non_empty(MAINNET_ENDPOINT_ENV) {
            self.mainnet_endpoint = Some(endpoint);
        }
        Ok(self)
    }

    /// Save config to the mintkit directory
    /// Preserves other settings that mintkit doesn't manage
    pub fn save(&self, mintkit_dir: &Path) -> Result<()> {
        let mut settings = read_settings(mintkit_dir)?;

        settings.network = self.network;
        settings.auto_connect = self.auto_connect;
        settings.mainnet_endpoint = self.mainnet_endpoint.clone();
        settings.balance.on_failure = self.balance_failure_policy;

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(mintkit_dir.join(SETTINGS_FILE), content)?;
        Ok(())
    }
}

fn read_settings(mintkit_dir: &Path) -> Result<SettingsFile> {
    let settings_path = mintkit_dir.join(SETTINGS_FILE);
    if !settings_path.exists() {
        return Ok(SettingsFile::default());
    }
    let content = std::fs::read_to_string(&settings_path)?;
    Ok(serde_json::from_str(&content).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_settings_file() {
        let dir = tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();

        assert_eq!(config.network, Cluster::Devnet);
        assert!(config.auto_connect);
        assert_eq!(config.balance_failure_policy, FailurePolicy::Reset);
    }

    #[test]
    fn test_save_preserves_unknown_fields() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"network":"testnet","theme":"dark","balance":{"onFailure":"retain","pollSeconds":10}}"#,
        )
        .unwrap();

        let mut config = Config::load_file(dir.path()).unwrap();
        assert_eq!(config.network, Cluster::Testnet);
        assert_eq!(config.balance_failure_policy, FailurePolicy::Retain);

        config.auto_connect = false;
        config.mainnet_endpoint = Some("https://rpc.example.com".to_string());
        config.save(dir.path()).unwrap();

        let content = std::fs::read_to_string(dir.path().join("settings.json")).unwrap();
        let saved: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(saved["theme"], "dark");
        assert_eq!(saved["autoConnect"], false);
        assert_eq!(saved["mainnetEndpoint"], "https://rpc.example.com");
        assert_eq!(saved["balance"]["pollSeconds"], 10);
    }

    #[test]
    fn test_overrides_do_not_touch_the_file_view() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"network":"mainnet-beta","mainnetEndpoint":"https://rpc.example.com"}"#,
        )
        .unwrap();

        let stored = Config::load_file(dir.path()).unwrap();
        let overridden = stored
            .clone()
            .with_overrides(|key| match key {
                NETWORK_ENV => Some("testnet".to_string()),
                MAINNET_ENDPOINT_ENV => Some("https://other.example.com".to_string()),
                _ => None,
            })
            .unwrap();

        assert_eq!(overridden.network, Cluster::Testnet);
        assert_eq!(overridden.mainnet_endpoint.as_deref(), Some("https://other.example.com"));
        assert_eq!(stored.network, Cluster::MainnetBeta);
        assert_eq!(stored.mainnet_endpoint.as_deref(), Some("https://rpc.example.com"));
    }

    #[test]
    fn test_invalid_network_override_is_an_error() {
        let config = Config::default().with_overrides(|key| match key {
            NETWORK_ENV => Some("bogus".to_string()),
            _ => None,
        });
        assert!(config.is_err());

        let blank = Config::default()
            .with_overrides(|_| Some("  ".to_string()))
            .unwrap();
        assert_eq!(blank.network, Cluster::Devnet);
        assert!(blank.mainnet_endpoint.is_none());
    }

    #[test]
    fn test_corrupt_settings_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{not json").unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.network, Cluster::Devnet);
    }
}
