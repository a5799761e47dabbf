use alloy::primitives::Address;
use async_trait::async_trait;
use log::info;

use crate::web3::contracts::core::error::{ContractError, ContractResult};
use crate::web3::contracts::helpers::utils::SubmitOptions;
use crate::web3::contracts::structs::farmer::{Farmer, RegistrationReceipt};

pub mod mock;

pub use mock::MockFarmerRegistry;

#[async_trait]
pub trait FarmerRegistry: Send + Sync {
    /// Accounts that can send the registration, in the order the node lists them
    async fn accounts(&self) -> ContractResult<Vec<Address>>;

    /// Submit a single `registerFarmer` transaction from `from`
    async fn register_farmer(
        &self,
        from: Address,
        farmer: &Farmer,
        options: &SubmitOptions,
    ) -> ContractResult<RegistrationReceipt>;
}

/// Registers farmers from the first account the registry reports.
pub struct Registrar<R> {
    registry: R,
    options: SubmitOptions,
}

impl<R: FarmerRegistry> Registrar<R> {
    pub fn new(registry: R) -> Self {
        Self {
            registry,
            options: SubmitOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SubmitOptions) -> Self {
        self.options = options;
        self
    }

    pub async fn register(&self, farmer: &Farmer) -> ContractResult<RegistrationReceipt> {
        farmer.validate()?;

        let accounts = self.registry.accounts().await?;
        let from = *accounts.first().ok_or(ContractError::NoAccounts)?;
        info!(
            "Registering farmer {} ({}, land size {}) from {}",
            farmer.name, farmer.country, farmer.land_size, from
        );

        let receipt = self
            .registry
            .register_farmer(from, farmer, &self.options)
            .await?;

        if receipt.confirmed {
            info!(
                "Farmer {} registered in tx {} (block {:?})",
                farmer.name, receipt.tx_hash, receipt.block_number
            );
        } else {
            info!(
                "Farmer {} registration submitted in tx {}",
                farmer.name, receipt.tx_hash
            );
        }
        Ok(receipt)
    }
}
