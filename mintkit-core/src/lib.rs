//! Mintkit Core - wallet context and balance logic for a Solana token minter
//!
//! This crate follows hexagonal architecture:
//!
//! - **domain**: Core entities (Cluster, BalanceRecord, AccountAddress, ...)
//! - **ports**: Trait definitions for external dependencies (LedgerClient, WalletAdapter, Notifier)
//! - **services**: Business logic orchestration (ContextComposer, BalanceStore, ...)
//! - **adapters**: Concrete implementations (JSON-RPC client, browser wallets, ...)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod log_migrations;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use config::Config;
use ports::Notifier;
use services::*;

// Re-export commonly used types at crate root
pub use domain::result::{Error, OperationResult};
pub use domain::{AccountAddress, BalanceRecord, Cluster, FailurePolicy, WalletError};
pub use services::{EntryPoint, LogEvent, LoggingService};

/// Main context for Mintkit operations
///
/// Built once at startup and passed by reference to whatever needs the
/// wallet context or the balance.
pub struct MintkitContext {
    pub config: Config,
    pub logger: Option<Arc<LoggingService>>,
    pub composer: ContextComposer,
    pub balance_store: BalanceStore,
}

impl MintkitContext {
    /// Create a new Mintkit context
    ///
    /// A log database that fails to open disables diagnostic logging rather
    /// than failing startup.
    pub fn new(
        mintkit_dir: &Path,
        entry_point: EntryPoint,
        app_version: &str,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self> {
        let config = Config::load(mintkit_dir)?;

        let logger = LoggingService::new(mintkit_dir, entry_point, app_version)
            .ok()
            .map(Arc::new);

        Self::with_logger(config, logger, notifier)
    }

    /// Create a context from an already loaded config
    pub fn with_logger(
        config: Config,
        logger: Option<Arc<LoggingService>>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self> {
        let composer = ContextComposer::new(&config, notifier, logger.clone())?;

        let mut balance_store = BalanceStore::new(config.balance_failure_policy);
        if let Some(logger) = &logger {
            balance_store = balance_store.with_logger(Arc::clone(logger));
        }

        Ok(Self {
            config,
            logger,
            composer,
            balance_store,
        })
    }

    /// Refresh the balance of `address` over the current wallet context's connection
    pub async fn refresh_balance(&self, address: &AccountAddress) -> BalanceRecord {
        let connection = self.composer.context().connection();
        self.balance_store
            .refresh_balance(address, connection.as_ref())
            .await
    }
}
