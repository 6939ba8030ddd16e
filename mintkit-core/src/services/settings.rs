//! Settings service - network selection and auto-connect preference
//!
//! Reads and writes the two settings the wallet context is derived from.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::Config;
use crate::domain::{Cluster, FailurePolicy};

pub struct SettingsService {
    mintkit_dir: PathBuf,
}

impl SettingsService {
    pub fn new(mintkit_dir: &Path) -> Self {
        Self {
            mintkit_dir: mintkit_dir.to_path_buf(),
        }
    }

    /// Currently selected network (env override applied)
    pub fn network(&self) -> Result<Cluster> {
        Ok(Config::load(&self.mintkit_dir)?.network)
    }

    /// Persist a new network selection
    pub fn set_network(&self, network: Cluster) -> Result<()> {
        self.update(|config| config.network = network)
    }

    pub fn auto_connect(&self) -> Result<bool> {
        Ok(Config::load(&self.mintkit_dir)?.auto_connect)
    }

    pub fn set_auto_connect(&self, enabled: bool) -> Result<()> {
        self.update(|config| config.auto_connect = enabled)
    }

    /// Persist the mainnet endpoint override (None restores the public endpoint)
    pub fn set_mainnet_endpoint(&self, endpoint: Option<&str>) -> Result<()> {
        if let Some(endpoint) = endpoint {
            crate::adapters::rpc::validate_endpoint(endpoint)?;
        }
        self.update(|config| config.mainnet_endpoint = endpoint.map(str::to_string))
    }

    pub fn set_failure_policy(&self, policy: FailurePolicy) -> Result<()> {
        self.update(|config| config.balance_failure_policy = policy)
    }

    /// Read-modify-write of the stored settings; env overrides stay out of the file
    fn update(&self, apply: impl FnOnce(&mut Config)) -> Result<()> {
        let mut config = Config::load_file(&self.mintkit_dir)?;
        apply(&mut config);
        config.save(&self.mintkit_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_network_round_trip() {
        let dir = tempdir().unwrap();
        let service = SettingsService::new(dir.path());

        assert_eq!(service.network().unwrap(), Cluster::Devnet);
        service.set_network(Cluster::MainnetBeta).unwrap();
        assert_eq!(service.network().unwrap(), Cluster::MainnetBeta);
    }

    #[test]
    fn test_auto_connect_toggle() {
        let dir = tempdir().unwrap();
        let service = SettingsService::new(dir.path());

        assert!(service.auto_connect().unwrap());
        service.set_auto_connect(false).unwrap();
        assert!(!service.auto_connect().unwrap());
    }

    #[test]
    fn test_mainnet_endpoint_is_validated() {
        let dir = tempdir().unwrap();
        let service = SettingsService::new(dir.path());

        assert!(service.set_mainnet_endpoint(Some("URL")).is_err());
        service
            .set_mainnet_endpoint(Some("https://rpc.example.com"))
            .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.mainnet_endpoint.as_deref(), Some("https://rpc.example.com"));
    }
}
