use eyre::{Context, Result};
use shared::web3::{FarmerRegistrationContract, Wallet};

use crate::config::Config;
use crate::secure_key::get_private_key;

/// Node-managed unless a key source is given on the command line or in config.
pub fn create_wallet(key: Option<&str>, config: &Config) -> Result<Wallet> {
    let rpc_url = config.get_rpc_url()?;
    let key_source = key.or(config.private_key.as_deref());

    match get_private_key(key_source)? {
        Some(private_key) => {
            Wallet::new(&private_key, rpc_url).wrap_err("Wallet creation error")
        }
        None => Ok(Wallet::node_managed(rpc_url)),
    }
}

pub fn create_registration_contract(
    wallet: &Wallet,
    config: &Config,
) -> Result<FarmerRegistrationContract> {
    let address = config.get_contract_address()?;
    let abi = config
        .abi_source()
        .load()
        .wrap_err("Failed to load FarmerRegistration ABI")?;

    let contract = FarmerRegistrationContract::new(address, wallet, abi)?;
    log::debug!(
        "Bound FarmerRegistration at {} (selector {})",
        contract.address(),
        contract.register_selector()
    );
    Ok(contract)
}
