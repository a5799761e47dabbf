use alloy::primitives::U256;
use clap::Args;
use eyre::{Context, Result};
use shared::registration::{FarmerRegistry, Registrar};
use shared::web3::contracts::helpers::utils::SubmitOptions;
use shared::web3::contracts::structs::farmer::{Farmer, RegistrationReceipt};
use std::io::Write;
use std::time::Duration;

use super::common::{create_registration_contract, create_wallet};
use crate::config::Config;

pub const CONFIRMATION_MESSAGE: &str = "Farmer Registered!";

#[derive(Args, Debug, Clone, Default)]
pub struct RegisterArgs {
    /// Farmer name [default: John Doe]
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    /// Farmer country [default: India]
    #[arg(short = 'c', long)]
    pub country: Option<String>,

    /// Land size passed as the third registerFarmer argument [default: 10]
    #[arg(short = 'l', long)]
    pub land_size: Option<U256>,

    /// Private key source (env:VAR_NAME, file:/path, or prompt). Without one the node signs.
    #[arg(short = 'k', long)]
    pub key: Option<String>,

    /// Return once the transaction is accepted instead of waiting for it to be mined
    #[arg(long)]
    pub no_wait: bool,

    /// Confirmations to wait for
    #[arg(long)]
    pub confirmations: Option<u64>,

    /// Seconds to wait for the receipt
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

impl RegisterArgs {
    pub fn farmer(&self) -> Farmer {
        let defaults = Farmer::default();
        Farmer {
            name: self.name.clone().unwrap_or(defaults.name),
            country: self.country.clone().unwrap_or(defaults.country),
            land_size: self.land_size.unwrap_or(defaults.land_size),
        }
    }

    pub fn submit_options(&self, config: &Config) -> SubmitOptions {
        let defaults = SubmitOptions::default();
        SubmitOptions {
            wait_for_receipt: !self.no_wait,
            confirmations: self
                .confirmations
                .or(config.confirmations)
                .unwrap_or(defaults.confirmations),
            receipt_timeout: self
                .timeout_secs
                .or(config.receipt_timeout_secs)
                .map(Duration::from_secs)
                .unwrap_or(defaults.receipt_timeout),
        }
    }
}

pub async fn handle_command(args: RegisterArgs, config: &Config) -> Result<()> {
    run(&args, config, &mut std::io::stdout()).await.map(|_| ())
}

pub async fn run(
    args: &RegisterArgs,
    config: &Config,
    out: &mut impl Write,
) -> Result<RegistrationReceipt> {
    let wallet = create_wallet(args.key.as_deref(), config)?;
    let contract = create_registration_contract(&wallet, config)?;
    let registrar = Registrar::new(contract).with_options(args.submit_options(config));

    register_farmer(&registrar, &args.farmer(), out).await
}

pub async fn register_farmer<R: FarmerRegistry>(
    registrar: &Registrar<R>,
    farmer: &Farmer,
    out: &mut impl Write,
) -> Result<RegistrationReceipt> {
    let receipt = registrar
        .register(farmer)
        .await
        .wrap_err("Failed to register farmer")?;

    if receipt.confirmed {
        writeln!(out, "{CONFIRMATION_MESSAGE}")?;
    } else {
        writeln!(out, "Farmer registration submitted: {}", receipt.tx_hash)?;
    }
    Ok(receipt)
}
