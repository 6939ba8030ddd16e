//! Wallet adapter port

use crate::domain::{Cluster, WalletKind};

/// Handle to a wallet integration
///
/// Connecting, signing and disconnecting happen in the user's key-holding
/// agent; the core only needs to identify and list adapters.
pub trait WalletAdapter: Send + Sync + std::fmt::Debug {
    fn kind(&self) -> WalletKind;

    /// Display name used for selection
    fn name(&self) -> &str {
        self.kind().name()
    }

    fn url(&self) -> &str {
        self.kind().url()
    }

    /// Network the adapter was constructed for
    fn network(&self) -> Cluster;
}
