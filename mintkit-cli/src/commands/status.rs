//! Status command - show the composed wallet context

use anyhow::Result;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use super::get_context;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let wallet_ctx = ctx.composer.context();
    let log_path = ctx
        .logger
        .as_ref()
        .map(|l| l.db_path().display().to_string());

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "network": wallet_ctx.network(),
                "endpoint": wallet_ctx.endpoint(),
                "autoConnect": wallet_ctx.auto_connect(),
                "wallets": wallet_ctx.wallets().len(),
                "balanceOnFailure": ctx.balance_store.policy(),
                "logDatabase": log_path,
            }))?
        );
        return Ok(());
    }

    println!("{}", "Mintkit Status".bold());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let auto_connect = if wallet_ctx.auto_connect() { "on" } else { "off" };
    table.add_row(vec!["Network", wallet_ctx.network().as_str()]);
    table.add_row(vec!["Endpoint", wallet_ctx.endpoint()]);
    table.add_row(vec!["Auto-connect", auto_connect]);
    table.add_row(vec!["Wallets".to_string(), wallet_ctx.wallets().len().to_string()]);
    table.add_row(vec!["Balance on failure".to_string(), ctx.balance_store.policy().to_string()]);
    table.add_row(vec![
        "Log database".to_string(),
        log_path.unwrap_or_else(|| "unavailable".to_string()),
    ]);

    println!("{}", table);

    Ok(())
}
