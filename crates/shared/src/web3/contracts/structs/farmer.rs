use alloy::primitives::{Address, TxHash, U256};

use crate::web3::contracts::core::error::{ContractError, ContractResult};

pub const DEFAULT_FARMER_NAME: &str = "John Doe";
pub const DEFAULT_FARMER_COUNTRY: &str = "India";
pub const DEFAULT_LAND_SIZE: u64 = 10;

/// Arguments of a `registerFarmer` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Farmer {
    pub name: String,
    pub country: String,
    pub land_size: U256,
}

impl Default for Farmer {
    fn default() -> Self {
        Self {
            name: DEFAULT_FARMER_NAME.to_string(),
            country: DEFAULT_FARMER_COUNTRY.to_string(),
            land_size: U256::from(DEFAULT_LAND_SIZE),
        }
    }
}

impl Farmer {
    pub fn new(name: impl Into<String>, country: impl Into<String>, land_size: U256) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            land_size,
        }
    }

    pub fn validate(&self) -> ContractResult<()> {
        if self.name.trim().is_empty() {
            return Err(ContractError::InvalidFarmer("name is empty".into()));
        }
        if self.country.trim().is_empty() {
            return Err(ContractError::InvalidFarmer("country is empty".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationReceipt {
    pub from: Address,
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,
    /// False when the transaction was submitted without waiting for it to be mined.
    pub confirmed: bool,
}
