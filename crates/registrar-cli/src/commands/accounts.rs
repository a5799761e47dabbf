use alloy::primitives::utils::format_ether;
use eyre::{Context, Result};
use std::io::Write;

use super::common::create_wallet;
use crate::config::Config;

pub async fn handle_command(key: Option<String>, config: &Config) -> Result<()> {
    list_accounts(key.as_deref(), config, &mut std::io::stdout()).await
}

/// Prints every account in node order. Registrations are sent from index 0.
pub async fn list_accounts(key: Option<&str>, config: &Config, out: &mut impl Write) -> Result<()> {
    let wallet = create_wallet(key, config)?;
    let accounts = wallet
        .accounts()
        .await
        .wrap_err("Failed to list accounts")?;

    if accounts.is_empty() {
        writeln!(out, "No accounts available")?;
        return Ok(());
    }

    for (index, account) in accounts.iter().enumerate() {
        let balance = wallet.get_balance(*account).await?;
        let marker = if index == 0 { " (sender)" } else { "" };
        writeln!(
            out,
            "[{index}] {account}  {} ETH{marker}",
            format_ether(balance)
        )?;
    }

    Ok(())
}
