//! Logs command - inspect and prune the diagnostic log

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{TimeZone, Utc};
use clap::Subcommand;
use colored::Colorize;
use dialoguer::Confirm;

use mintkit_core::services::logging::now_ms;
use mintkit_core::services::LogEntry;
use mintkit_core::{EntryPoint, LoggingService};

use super::get_mintkit_dir;
use crate::output::{create_table, format_size};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

#[derive(Subcommand)]
pub enum LogsCommands {
    /// Show recent log entries
    List {
        /// Number of entries to show
        #[arg(short, long, default_value = "50")]
        limit: usize,
        /// Show only errors
        #[arg(long)]
        errors: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete old log entries
    Clear {
        /// Delete logs older than N days
        #[arg(long, default_value = "30")]
        older_than_days: u64,
        /// Skip confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Copy the log database to a file for troubleshooting
    Export {
        /// Destination path
        output: PathBuf,
    },
    /// Show log statistics and database path
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn open_logs() -> Result<LoggingService> {
    let mintkit_dir = get_mintkit_dir()?;
    std::fs::create_dir_all(&mintkit_dir)?;
    LoggingService::new(&mintkit_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION"))
}

fn format_timestamp(timestamp_ms: i64) -> String {
    Utc.timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| timestamp_ms.to_string())
}

fn entry_context(entry: &LogEntry) -> String {
    [
        entry.command.as_deref(),
        entry.network.as_deref(),
        entry.wallet.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(", ")
}

pub fn run(command: LogsCommands) -> Result<()> {
    let service = open_logs()?;

    match command {
        LogsCommands::List { limit, errors, json } => list(&service, limit, errors, json),
        LogsCommands::Clear {
            older_than_days,
            force,
            json,
        } => clear(&service, older_than_days, force, json),
        LogsCommands::Export { output } => export(&service, &output),
        LogsCommands::Stats { json } => stats(&service, json),
    }
}

fn list(service: &LoggingService, limit: usize, errors_only: bool, json: bool) -> Result<()> {
    let entries = if errors_only {
        service.get_errors(limit)?
    } else {
        service.get_recent(limit)?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No log entries found.");
        return Ok(());
    }

    let mut table = create_table();
    table.set_header(vec!["Time", "Event", "Context", "Error"]);
    for entry in &entries {
        table.add_row(vec![
            format_timestamp(entry.timestamp),
            entry.event.clone(),
            entry_context(entry),
            entry.error_message.clone().unwrap_or_default(),
        ]);
    }
    println!("{}", table);

    if !errors_only {
        let error_count = entries.iter().filter(|e| e.error_message.is_some()).count();
        if error_count > 0 {
            println!();
            println!(
                "{}",
                format!("{} of {} entries are errors", error_count, entries.len()).red()
            );
        }
    }

    Ok(())
}

/// Timestamp `older_than_days` before `now`; saturates instead of overflowing
fn cutoff_ms(now: i64, older_than_days: u64) -> i64 {
    i64::try_from(older_than_days)
        .ok()
        .and_then(|days| days.checked_mul(DAY_MS))
        .map_or(i64::MIN, |span| now.saturating_sub(span))
}

fn clear(service: &LoggingService, older_than_days: u64, force: bool, json: bool) -> Result<()> {
    let cutoff = cutoff_ms(now_ms(), older_than_days);

    if !force && !json {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete logs older than {} days?", older_than_days))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let deleted = service.delete_before(cutoff)?;

    if json {
        println!("{}", serde_json::json!({ "deleted": deleted }));
    } else {
        println!("Deleted {} log entries", deleted);
    }
    Ok(())
}

fn export(service: &LoggingService, output: &Path) -> Result<()> {
    let path = service.export(output)?;
    println!("Logs exported to {}", path.display().to_string().green());
    Ok(())
}

fn stats(service: &LoggingService, json: bool) -> Result<()> {
    let total = service.count()?;
    let errors = service.get_errors(10_000)?.len();
    let db_path = service.db_path();
    let size_bytes = std::fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);

    if json {
        println!(
            "{}",
            serde_json::json!({
                "total_entries": total,
                "error_count": errors,
                "database_path": db_path.to_string_lossy(),
                "database_size_bytes": size_bytes
            })
        );
        return Ok(());
    }

    println!("{}", "Log Statistics".bold());
    println!("  Total entries: {}", total);
    println!("  Errors: {}", errors);
    println!("  Database: {}", db_path.display());
    println!("  Size: {}", format_size(size_bytes));
    Ok(())
}
