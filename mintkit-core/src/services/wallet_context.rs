//! Wallet context composer
//!
//! Builds the immutable bundle every wallet-aware caller works from: the
//! resolved endpoint and its connection, the ordered wallet adapters, the
//! auto-connect preference and the wallet error relay. A new bundle is
//! published whenever the network or auto-connect setting changes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::adapters::rpc::RpcClient;
use crate::adapters::wallets::standard_wallets;
use crate::config::Config;
use crate::domain::result::{Error, Result};
use crate::domain::{Cluster, Notification, WalletError};
use crate::ports::{LedgerClient, Notifier, WalletAdapter};
use crate::services::logging::{LogEvent, LoggingService};

/// Opens a ledger connection for an endpoint
pub type ConnectionFactory =
    Arc<dyn Fn(&str) -> Result<Arc<dyn LedgerClient>> + Send + Sync>;

/// Connection factory backed by the JSON-RPC client
pub fn rpc_connection_factory() -> ConnectionFactory {
    Arc::new(|endpoint: &str| {
        let client = RpcClient::new(endpoint)?;
        Ok(Arc::new(client) as Arc<dyn LedgerClient>)
    })
}

/// Endpoint for `network`
///
/// mainnet-beta uses the configured override when there is one; every
/// other cluster always uses its public endpoint.
pub fn resolve_endpoint(network: Cluster, mainnet_override: Option<&str>) -> String {
    match (network, mainnet_override) {
        (Cluster::MainnetBeta, Some(endpoint)) => endpoint.to_string(),
        _ => network.default_endpoint().to_string(),
    }
}

/// Forwards wallet errors to the user and the diagnostic log
#[derive(Clone)]
pub struct WalletErrorRelay {
    notifier: Arc<dyn Notifier>,
    logger: Option<Arc<LoggingService>>,
    network: Cluster,
}

impl WalletErrorRelay {
    pub fn on_error(&self, error: &WalletError) {
        self.notifier.notify(Notification::error(error.to_string()));

        if let Some(logger) = &self.logger {
            let _ = logger.log(
                LogEvent::new("wallet_error")
                    .with_network(self.network.as_str())
                    .with_error(error.to_string()),
            );
        }
    }
}

/// Immutable connection/wallet bundle
pub struct WalletContext {
    network: Cluster,
    endpoint: String,
    connection: Arc<dyn LedgerClient>,
    wallets: Vec<Arc<dyn WalletAdapter>>,
    auto_connect: bool,
    errors: WalletErrorRelay,
}

impl WalletContext {
    pub fn network(&self) -> Cluster {
        self.network
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Connection bound to `endpoint()`
    pub fn connection(&self) -> Arc<dyn LedgerClient> {
        Arc::clone(&self.connection)
    }

    pub fn wallets(&self) -> &[Arc<dyn WalletAdapter>] {
        &self.wallets
    }

    pub fn auto_connect(&self) -> bool {
        self.auto_connect
    }

    pub fn error_relay(&self) -> &WalletErrorRelay {
        &self.errors
    }

    /// Relay a wallet-layer error; never retried
    pub fn report_error(&self, error: &WalletError) {
        self.errors.on_error(error);
    }

    /// Find a wallet by display name (case-insensitive)
    ///
    /// An unknown name is reported through the error relay before returning.
    pub fn select_wallet(&self, name: &str) -> Result<Arc<dyn WalletAdapter>> {
        let found = self
            .wallets
            .iter()
            .find(|w| w.name().eq_ignore_ascii_case(name.trim()))
            .cloned();

        match found {
            Some(wallet) => Ok(wallet),
            None => {
                let error = WalletError::not_found(name);
                self.report_error(&error);
                Err(Error::Wallet(error.to_string()))
            }
        }
    }
}

/// Wallet choice modal state
#[derive(Debug, Default)]
pub struct WalletModal {
    visible: AtomicBool,
}

impl WalletModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self) {
        self.visible.store(true, Ordering::SeqCst);
    }

    pub fn close(&self) {
        self.visible.store(false, Ordering::SeqCst);
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }

    /// Select a wallet and close the modal; stays open if the name is unknown
    pub fn choose(&self, context: &WalletContext, name: &str) -> Result<Arc<dyn WalletAdapter>> {
        let wallet = context.select_wallet(name)?;
        self.close();
        Ok(wallet)
    }
}

/// Builds and republishes the wallet context
pub struct ContextComposer {
    mainnet_endpoint: Option<String>,
    notifier: Arc<dyn Notifier>,
    logger: Option<Arc<LoggingService>>,
    connection_factory: ConnectionFactory,
    current: RwLock<Arc<WalletContext>>,
}

impl ContextComposer {
    /// Compose the initial context using JSON-RPC connections
    pub fn new(
        config: &Config,
        notifier: Arc<dyn Notifier>,
        logger: Option<Arc<LoggingService>>,
    ) -> Result<Self> {
        Self::with_connection_factory(config, notifier, logger, rpc_connection_factory())
    }

    pub fn with_connection_factory(
        config: &Config,
        notifier: Arc<dyn Notifier>,
        logger: Option<Arc<LoggingService>>,
        connection_factory: ConnectionFactory,
    ) -> Result<Self> {
        let mainnet_endpoint = config.mainnet_endpoint.clone();
        let initial = Self::build(
            config.network,
            config.auto_connect,
            mainnet_endpoint.as_deref(),
            &notifier,
            &logger,
            &connection_factory,
        )?;

        Ok(Self {
            mainnet_endpoint,
            notifier,
            logger,
            connection_factory,
            current: RwLock::new(Arc::new(initial)),
        })
    }

    fn build(
        network: Cluster,
        auto_connect: bool,
        mainnet_endpoint: Option<&str>,
        notifier: &Arc<dyn Notifier>,
        logger: &Option<Arc<LoggingService>>,
        connection_factory: &ConnectionFactory,
    ) -> Result<WalletContext> {
        let endpoint = resolve_endpoint(network, mainnet_endpoint);
        let connection = connection_factory(&endpoint)?;

        Ok(WalletContext {
            network,
            endpoint,
            connection,
            wallets: standard_wallets(network),
            auto_connect,
            errors: WalletErrorRelay {
                notifier: Arc::clone(notifier),
                logger: logger.clone(),
                network,
            },
        })
    }

    /// Current context
    pub fn context(&self) -> Arc<WalletContext> {
        match self.current.read() {
            Ok(current) => Arc::clone(&current),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    fn publish(&self, context: WalletContext) -> Result<Arc<WalletContext>> {
        let context = Arc::new(context);
        let mut current = self
            .current
            .write()
            .map_err(|e| Error::Other(format!("Lock poisoned: {}", e)))?;
        *current = Arc::clone(&context);
        Ok(context)
    }

    /// Switch networks
    ///
    /// Builds a new endpoint, connection and set of wallet adapters. Selecting
    /// the network already in use returns the current context unchanged.
    pub fn set_network(&self, network: Cluster) -> Result<Arc<WalletContext>> {
        let current = self.context();
        if current.network == network {
            return Ok(current);
        }

        let context = Self::build(
            network,
            current.auto_connect,
            self.mainnet_endpoint.as_deref(),
            &self.notifier,
            &self.logger,
            &self.connection_factory,
        )?;

        if let Some(logger) = &self.logger {
            let _ = logger.log(LogEvent::new("network_changed").with_network(network.as_str()));
        }

        self.publish(context)
    }

    /// Change the auto-connect preference, keeping the wallet adapters
    pub fn set_auto_connect(&self, auto_connect: bool) -> Result<Arc<WalletContext>> {
        let current = self.context();
        if current.auto_connect == auto_connect {
            return Ok(current);
        }

        self.publish(WalletContext {
            network: current.network,
            endpoint: current.endpoint.clone(),
            connection: Arc::clone(&current.connection),
            wallets: current.wallets.clone(),
            auto_connect,
            errors: current.errors.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::notifier::MemoryNotifier;
    use crate::domain::NotificationKind;

    fn config(network: Cluster, mainnet_endpoint: Option<&str>) -> Config {
        Config {
            network,
            auto_connect: true,
            mainnet_endpoint: mainnet_endpoint.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_endpoint() {
        assert_eq!(
            resolve_endpoint(Cluster::Devnet, Some("https://rpc.example.com")),
            "https://api.devnet.solana.com"
        );
        assert_eq!(
            resolve_endpoint(Cluster::Testnet, None),
            "https://api.testnet.solana.com"
        );
        assert_eq!(
            resolve_endpoint(Cluster::MainnetBeta, Some("https://rpc.example.com")),
            "https://rpc.example.com"
        );
        assert_eq!(
            resolve_endpoint(Cluster::MainnetBeta, None),
            "https://api.mainnet-beta.solana.com"
        );
    }

    #[test]
    fn test_compose_binds_connection_to_endpoint() {
        let notifier = Arc::new(MemoryNotifier::new());
        let composer = ContextComposer::new(
            &config(Cluster::MainnetBeta, Some("https://rpc.example.com")),
            notifier,
            None,
        )
        .unwrap();

        let ctx = composer.context();
        assert_eq!(ctx.endpoint(), "https://rpc.example.com");
        assert_eq!(ctx.connection().endpoint(), "https://rpc.example.com");
        assert_eq!(ctx.wallets().len(), 5);
        assert!(ctx.auto_connect());
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let notifier = Arc::new(MemoryNotifier::new());
        let result = ContextComposer::new(
            &config(Cluster::MainnetBeta, Some("URL")),
            notifier,
            None,
        );
        assert!(matches!(result, Err(Error::InvalidEndpoint(_))));
    }

    #[test]
    fn test_network_change_rebuilds_wallets() {
        let notifier = Arc::new(MemoryNotifier::new());
        let composer = ContextComposer::new(&config(Cluster::Devnet, None), notifier, None).unwrap();

        let before = composer.context();
        let after = composer.set_network(Cluster::Testnet).unwrap();

        assert_eq!(after.endpoint(), "https://api.testnet.solana.com");
        for (old, new) in before.wallets().iter().zip(after.wallets()) {
            assert!(!Arc::ptr_eq(old, new));
            assert_eq!(new.network(), Cluster::Testnet);
        }

        // Re-selecting the same network is not a change
        let same = composer.set_network(Cluster::Testnet).unwrap();
        assert!(Arc::ptr_eq(&same, &after));
    }

    #[test]
    fn test_auto_connect_change_keeps_wallets() {
        let notifier = Arc::new(MemoryNotifier::new());
        let composer = ContextComposer::new(&config(Cluster::Devnet, None), notifier, None).unwrap();

        let before = composer.context();
        let after = composer.set_auto_connect(false).unwrap();

        assert!(!after.auto_connect());
        assert!(!Arc::ptr_eq(&before, &after));
        assert!(Arc::ptr_eq(&before.wallets()[0], &after.wallets()[0]));
    }

    #[test]
    fn test_unknown_wallet_is_relayed() {
        let notifier = Arc::new(MemoryNotifier::new());
        let composer = ContextComposer::new(
            &config(Cluster::Devnet, None),
            Arc::clone(&notifier) as Arc<dyn Notifier>,
            None,
        )
        .unwrap();

        let ctx = composer.context();
        assert_eq!(ctx.select_wallet("phantom").unwrap().name(), "Phantom");
        assert!(ctx.select_wallet("Backpack").is_err());

        let notes = notifier.drain();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].kind, NotificationKind::Error);
        assert!(notes[0].message.starts_with("WalletNotFoundError: "));
    }

    #[test]
    fn test_modal_closes_on_choice() {
        let notifier = Arc::new(MemoryNotifier::new());
        let composer = ContextComposer::new(&config(Cluster::Devnet, None), notifier, None).unwrap();
        let ctx = composer.context();

        let modal = WalletModal::new();
        modal.open();
        assert!(modal.choose(&ctx, "nope").is_err());
        assert!(modal.is_visible());

        let wallet = modal.choose(&ctx, "Torus").unwrap();
        assert_eq!(wallet.name(), "Torus");
        assert!(!modal.is_visible());
    }
}
