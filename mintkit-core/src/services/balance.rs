//! Balance store - observable SOL balance with async refresh

use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::{AccountAddress, BalanceRecord, Commitment, FailurePolicy};
use crate::ports::LedgerClient;
use crate::services::logging::{LogEvent, LoggingService};

/// Shared balance state
///
/// Holds one `BalanceRecord`, starting at zero. Every refresh replaces the
/// whole record and wakes all subscribers. Concurrent refreshes are not
/// deduplicated: whichever completes last wins.
pub struct BalanceStore {
    state: watch::Sender<BalanceRecord>,
    policy: FailurePolicy,
    logger: Option<Arc<LoggingService>>,
}

impl BalanceStore {
    pub fn new(policy: FailurePolicy) -> Self {
        let (state, _) = watch::channel(BalanceRecord::default());
        Self {
            state,
            policy,
            logger: None,
        }
    }

    /// Record refresh outcomes in the diagnostic log
    pub fn with_logger(mut self, logger: Arc<LoggingService>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Latest balance record
    pub fn current(&self) -> BalanceRecord {
        self.state.borrow().clone()
    }

    /// Observe every overwrite of the balance record
    pub fn subscribe(&self) -> watch::Receiver<BalanceRecord> {
        self.state.subscribe()
    }

    /// Query the balance of `address` at confirmed commitment and store it
    ///
    /// Never fails: a query error is logged and the record is rewritten
    /// according to the failure policy. Returns the record this call wrote.
    pub async fn refresh_balance(
        &self,
        address: &AccountAddress,
        connection: &dyn LedgerClient,
    ) -> BalanceRecord {
        match connection.get_balance(address, Commitment::Confirmed).await {
            Ok(lamports) => {
                let record = BalanceRecord::from_lamports(lamports);
                self.state.send_replace(record.clone());
                self.log(LogEvent::new("balance_refreshed"));
                record
            }
            Err(e) => {
                let policy = self.policy;
                let mut written = BalanceRecord::default();
                self.state.send_modify(|record| {
                    *record = BalanceRecord::after_failure(record, policy);
                    written = record.clone();
                });
                self.log(
                    LogEvent::new("balance_refresh_failed")
                        .with_error(e.to_string())
                        .with_error_details(format!("policy={}", policy)),
                );
                written
            }
        }
    }

    fn log(&self, event: LogEvent) {
        if let Some(logger) = &self.logger {
            let _ = logger.log(event);
        }
    }
}

impl Default for BalanceStore {
    fn default() -> Self {
        Self::new(FailurePolicy::default())
    }
}
