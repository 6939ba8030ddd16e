//! Ledger connection port
//!
//! Defines the queries the core issues against a cluster endpoint.

use async_trait::async_trait;

use crate::domain::result::Result;
use crate::domain::{AccountAddress, Commitment};

/// Connection to a ledger service
///
/// Implementations talk to a cluster endpoint (JSON-RPC over HTTP in
/// production, in-memory fakes in tests). The balance store uses this
/// trait without knowing the transport.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Endpoint this connection is bound to
    fn endpoint(&self) -> &str;

    /// Balance of `address` in lamports at the given commitment
    async fn get_balance(&self, address: &AccountAddress, commitment: Commitment) -> Result<u64>;
}
