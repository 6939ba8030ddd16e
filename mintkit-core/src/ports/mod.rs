//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The core domain
//! depends only on these traits, not on concrete implementations.

mod ledger;
mod notifier;
mod wallet;

pub use ledger::LedgerClient;
pub use notifier::Notifier;
pub use wallet::WalletAdapter;
