//! Wallets command - list the wallet adapters for the selected network

use anyhow::Result;
use colored::Colorize;

use crate::output::create_table;

use super::get_context;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let wallet_ctx = ctx.composer.context();

    if json {
        let wallets: Vec<_> = wallet_ctx
            .wallets()
            .iter()
            .map(|w| {
                serde_json::json!({
                    "name": w.name(),
                    "kind": w.kind(),
                    "url": w.url(),
                    "network": w.network(),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "network": wallet_ctx.network(),
                "endpoint": wallet_ctx.endpoint(),
                "autoConnect": wallet_ctx.auto_connect(),
                "wallets": wallets,
            }))?
        );
        return Ok(());
    }

    println!(
        "{} on {} ({})",
        "Wallets".bold(),
        wallet_ctx.network().to_string().green(),
        wallet_ctx.endpoint()
    );

    let mut table = create_table();
    table.set_header(vec!["#", "Wallet", "Website"]);
    for (i, wallet) in wallet_ctx.wallets().iter().enumerate() {
        table.add_row(vec![(i + 1).to_string(), wallet.name().to_string(), wallet.url().to_string()]);
    }
    println!("{}", table);

    Ok(())
}
