//! Browser wallet adapters

use std::sync::Arc;

use crate::domain::{Cluster, WalletKind};
use crate::ports::WalletAdapter;

/// Adapter for a wallet reached through the user's browser or extension
#[derive(Debug)]
pub struct BrowserWalletAdapter {
    kind: WalletKind,
    network: Cluster,
}

impl BrowserWalletAdapter {
    pub fn new(kind: WalletKind, network: Cluster) -> Self {
        Self { kind, network }
    }
}

impl WalletAdapter for BrowserWalletAdapter {
    fn kind(&self) -> WalletKind {
        self.kind
    }

    fn network(&self) -> Cluster {
        self.network
    }
}

/// Construct new instances of every supported wallet for `network`
pub fn standard_wallets(network: Cluster) -> Vec<Arc<dyn WalletAdapter>> {
    WalletKind::ALL
        .iter()
        .map(|&kind| Arc::new(BrowserWalletAdapter::new(kind, network)) as Arc<dyn WalletAdapter>)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_wallets_capture_network() {
        let wallets = standard_wallets(Cluster::Testnet);
        assert_eq!(wallets.len(), 5);
        assert!(wallets.iter().all(|w| w.network() == Cluster::Testnet));
        assert_eq!(wallets[0].name(), "Phantom");
        assert_eq!(wallets[4].url(), "https://tor.us");
    }
}
