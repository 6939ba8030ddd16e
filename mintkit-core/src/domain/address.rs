//! Account address domain model
//!
//! Solana addresses are Base58-encoded 32-byte Ed25519 public keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::result::{Error, Result};

/// A validated account address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountAddress(String);

impl AccountAddress {
    /// Parse and validate a Base58 address string
    pub fn parse(address: &str) -> Result<Self> {
        let address = address.trim();
        let bytes = bs58::decode(address)
            .into_vec()
            .map_err(|e| Error::invalid_address(format!("base58 decode failed: {e}")))?;

        if bytes.len() != 32 {
            return Err(Error::invalid_address(format!(
                "expected 32 bytes, got {}",
                bytes.len()
            )));
        }

        Ok(Self(address.to_string()))
    }

    /// Build an address from raw public key bytes
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        Self(bs58::encode(bytes).into_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AccountAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for AccountAddress {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<AccountAddress> for String {
    fn from(address: AccountAddress) -> Self {
        address.0
    }
}
