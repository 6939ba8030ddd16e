//! Balance command - refresh and show an account's SOL balance

use std::collections::HashMap;
use std::time::Duration;

use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use mintkit_core::{AccountAddress, LogEvent, OperationResult};

use super::{get_context, get_logger, log_event};

pub fn run(address: &str, json: bool) -> Result<()> {
    let logger = get_logger();
    log_event(&logger, LogEvent::new("command_executed").with_command("balance"));

    let address = AccountAddress::parse(address)?;
    let ctx = get_context()?;
    let wallet_ctx = ctx.composer.context();

    let spinner = if json {
        None
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .context("Invalid spinner template")?,
        );
        pb.set_message(format!("Fetching balance from {}", wallet_ctx.network()));
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    };

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let record = runtime.block_on(ctx.refresh_balance(&address));

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    // A failed refresh leaves no fresh lamport reading behind
    let refreshed = record.lamports.is_some() && !record.stale;

    if json {
        let mut context = HashMap::new();
        context.insert("address".to_string(), serde_json::json!(address.as_str()));
        context.insert("network".to_string(), serde_json::json!(wallet_ctx.network()));

        let result = if refreshed {
            OperationResult::ok(record)
        } else {
            OperationResult {
                data: Some(record),
                ..OperationResult::fail("Balance refresh failed")
            }
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&result.with_context(context))?
        );
        return Ok(());
    }

    let amount = record
        .as_decimal()
        .map(|d| d.to_string())
        .unwrap_or_else(|| record.sol.to_string());

    println!("{} {}", "Address:".bold(), address);
    println!("{} {}", "Network:".bold(), wallet_ctx.network());
    if refreshed {
        println!("{} {} SOL", "Balance:".bold(), amount.green());
    } else if record.stale {
        println!(
            "{} {} SOL {}",
            "Balance:".bold(),
            amount.yellow(),
            "(stale - refresh failed)".dimmed()
        );
    } else {
        println!(
            "{} {} SOL {}",
            "Balance:".bold(),
            amount.red(),
            "(refresh failed - see 'mk logs list --errors')".dimmed()
        );
    }

    Ok(())
}
