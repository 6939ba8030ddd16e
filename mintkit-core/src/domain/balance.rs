//! Balance domain model

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of lamports in one SOL
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Convert lamports to a SOL amount
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

/// Exact decimal representation of a lamport amount in SOL
pub fn lamports_to_decimal(lamports: u64) -> Decimal {
    Decimal::from_i128_with_scale(lamports as i128, 9).normalize()
}

/// Consistency level requested for a ledger read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl Commitment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Commitment::Processed => "processed",
            Commitment::Confirmed => "confirmed",
            Commitment::Finalized => "finalized",
        }
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the balance store keeps when a refresh fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Overwrite the balance with zero
    #[default]
    Reset,
    /// Keep the last known balance and mark it stale
    Retain,
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::Reset => f.write_str("reset"),
            FailurePolicy::Retain => f.write_str("retain"),
        }
    }
}

/// The shared balance value held by the balance store
///
/// Always replaced as a whole; never patched field by field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BalanceRecord {
    /// Balance in SOL
    pub sol: f64,
    /// Raw lamports behind `sol`, when the value came from the ledger
    pub lamports: Option<u64>,
    /// When the record was last written (None until the first refresh)
    pub updated_at: Option<DateTime<Utc>>,
    /// True when the last refresh failed and `sol` is not a fresh read
    pub stale: bool,
}

impl BalanceRecord {
    /// Record for a successful ledger read
    pub fn from_lamports(lamports: u64) -> Self {
        Self {
            sol: lamports_to_sol(lamports),
            lamports: Some(lamports),
            updated_at: Some(Utc::now()),
            stale: false,
        }
    }

    /// Record written after a failed refresh
    pub fn after_failure(previous: &BalanceRecord, policy: FailurePolicy) -> Self {
        match policy {
            FailurePolicy::Reset => Self {
                sol: 0.0,
                lamports: None,
                updated_at: Some(Utc::now()),
                stale: false,
            },
            FailurePolicy::Retain => Self {
                updated_at: Some(Utc::now()),
                stale: true,
                ..previous.clone()
            },
        }
    }

    /// Exact SOL amount, if the record holds a ledger read
    pub fn as_decimal(&self) -> Option<Decimal> {
        self.lamports.map(lamports_to_decimal)
    }
}
