//! Wallet integration domain model

use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported wallet integrations, in presentation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WalletKind {
    Phantom,
    Solflare,
    Sollet,
    SolletExtension,
    Torus,
}

impl WalletKind {
    pub const ALL: [WalletKind; 5] = [
        WalletKind::Phantom,
        WalletKind::Solflare,
        WalletKind::Sollet,
        WalletKind::SolletExtension,
        WalletKind::Torus,
    ];

    /// Display name, also used to select a wallet
    pub fn name(&self) -> &'static str {
        match self {
            WalletKind::Phantom => "Phantom",
            WalletKind::Solflare => "Solflare",
            WalletKind::Sollet => "Sollet",
            WalletKind::SolletExtension => "Sollet (Extension)",
            WalletKind::Torus => "Torus",
        }
    }

    pub fn url(&self) -> &'static str {
        match self {
            WalletKind::Phantom => "https://phantom.app",
            WalletKind::Solflare => "https://solflare.com",
            WalletKind::Sollet => "https://www.sollet.io",
            WalletKind::SolletExtension => {
                "https://chrome.google.com/webstore/detail/sollet/fhmfendgdocmcbmfikdcogofphimnkno"
            }
            WalletKind::Torus => "https://tor.us",
        }
    }
}

impl fmt::Display for WalletKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An error raised by the wallet layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletError {
    /// Error class, e.g. "WalletNotReadyError"
    pub name: String,
    pub message: String,
}

impl WalletError {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Error for a wallet name that is not in the composed list
    pub fn not_found(wallet: &str) -> Self {
        Self::new("WalletNotFoundError", format!("no wallet named '{}'", wallet))
    }
}

impl fmt::Display for WalletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}: {}", self.name, self.message)
        }
    }
}

impl std::error::Error for WalletError {}
