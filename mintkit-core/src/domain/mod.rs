//! Core domain entities
//!
//! Pure data structures with validation logic - no I/O or external dependencies.

pub mod address;
pub mod balance;
pub mod cluster;
pub mod notification;
pub mod result;
pub mod wallet;

pub use address::AccountAddress;
pub use balance::{BalanceRecord, Commitment, FailurePolicy, LAMPORTS_PER_SOL};
pub use cluster::Cluster;
pub use notification::{Notification, NotificationKind};
pub use wallet::{WalletError, WalletKind};
