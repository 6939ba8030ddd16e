//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

mod balance;
pub mod logging;
mod settings;
pub mod wallet_context;

pub use balance::BalanceStore;
pub use logging::{EntryPoint, LogEntry, LogEvent, LoggingService};
pub use settings::SettingsService;
pub use wallet_context::{
    resolve_endpoint, rpc_connection_factory, ConnectionFactory, ContextComposer, WalletContext,
    WalletErrorRelay, WalletModal,
};
