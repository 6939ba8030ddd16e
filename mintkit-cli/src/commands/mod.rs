//! CLI command implementations

pub mod autoconnect;
pub mod balance;
pub mod logs;
pub mod network;
pub mod status;
pub mod wallets;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use mintkit_core::domain::{Notification, NotificationKind};
use mintkit_core::ports::Notifier;
use mintkit_core::{EntryPoint, LogEvent, LoggingService, MintkitContext};

use crate::output;

/// Prints notifications to the terminal
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        let line = match &notification.description {
            Some(description) => format!("{} - {}", notification.message, description),
            None => notification.message.clone(),
        };
        match notification.kind {
            NotificationKind::Error => output::error(&line),
            NotificationKind::Success => output::success(&line),
            NotificationKind::Info => output::info(&line),
        }
    }
}

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger() -> Option<LoggingService> {
    let mintkit_dir = get_mintkit_dir().ok()?;
    std::fs::create_dir_all(&mintkit_dir).ok()?;
    LoggingService::new(&mintkit_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Get the mintkit directory from environment or default
pub fn get_mintkit_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("MINTKIT_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".mintkit"))
        .context("Could not find home directory (set MINTKIT_DIR)")
}

/// Build the mintkit context
pub fn get_context() -> Result<MintkitContext> {
    let mintkit_dir = get_mintkit_dir()?;

    std::fs::create_dir_all(&mintkit_dir)
        .with_context(|| format!("Failed to create mintkit directory: {:?}", mintkit_dir))?;

    MintkitContext::new(
        &mintkit_dir,
        EntryPoint::Cli,
        env!("CARGO_PKG_VERSION"),
        Arc::new(ConsoleNotifier),
    )
    .context("Failed to initialize mintkit context")
}
