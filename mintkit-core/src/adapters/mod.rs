//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - Solana JSON-RPC over HTTP for LedgerClient
//! - Browser wallet adapters for WalletAdapter
//! - In-memory queue for Notifier

pub mod notifier;
pub mod rpc;
pub mod wallets;

#[cfg(test)]
pub mod rpc_mock;
