use alloy::dyn_abi::{DynSolType, DynSolValue};
use alloy::json_abi::{Function, JsonAbi};
use alloy::primitives::{Address, Bytes, Selector};
use async_trait::async_trait;
use log::info;

use crate::registration::FarmerRegistry;
use crate::web3::contracts::core::contract::Contract;
use crate::web3::contracts::core::error::{ContractError, ContractResult};
use crate::web3::contracts::helpers::utils::{await_receipt, get_selector, SubmitOptions};
use crate::web3::contracts::structs::farmer::{Farmer, RegistrationReceipt};
use crate::web3::wallet::{Wallet, WalletProvider};

pub const REGISTER_FARMER: &str = "registerFarmer";
const REGISTER_FARMER_SHAPE: &str = "(string, string, uint)";

#[derive(Clone)]
pub struct FarmerRegistrationContract {
    instance: Contract<WalletProvider>,
    wallet: Wallet,
    register_selector: Selector,
    land_size_bits: usize,
}

impl FarmerRegistrationContract {
    pub fn new(address: Address, wallet: &Wallet, abi: JsonAbi) -> ContractResult<Self> {
        let (register_selector, land_size_bits) = {
            let function = find_register_function(&abi)?;
            (
                get_selector(&function.signature()),
                land_size_bits(function)?,
            )
        };
        let instance = Contract::new(address, wallet.provider(), abi);

        Ok(Self {
            instance,
            wallet: wallet.clone(),
            register_selector,
            land_size_bits,
        })
    }

    pub fn address(&self) -> Address {
        *self.instance.address()
    }

    pub fn register_selector(&self) -> Selector {
        self.register_selector
    }

    fn encode_args(&self, farmer: &Farmer) -> ContractResult<Vec<DynSolValue>> {
        if farmer.land_size.bit_len() > self.land_size_bits {
            return Err(ContractError::ValueOutOfRange {
                value: farmer.land_size,
                ty: format!("uint{}", self.land_size_bits),
            });
        }

        Ok(vec![
            DynSolValue::String(farmer.name.clone()),
            DynSolValue::String(farmer.country.clone()),
            DynSolValue::Uint(farmer.land_size, self.land_size_bits),
        ])
    }

    /// ABI-encoded calldata of `registerFarmer` for this farmer.
    pub fn register_farmer_calldata(&self, farmer: &Farmer) -> ContractResult<Bytes> {
        let args = self.encode_args(farmer)?;
        let call = self
            .instance
            .instance()
            .function_from_selector(&self.register_selector, &args)?;
        Ok(call.calldata().clone())
    }

    pub async fn register_farmer(
        &self,
        from: Address,
        farmer: &Farmer,
        options: &SubmitOptions,
    ) -> ContractResult<RegistrationReceipt> {
        let args = self.encode_args(farmer)?;
        let pending = self
            .instance
            .instance()
            .function_from_selector(&self.register_selector, &args)?
            .from(from)
            .send()
            .await?;
        let tx_hash = *pending.tx_hash();
        info!("registerFarmer transaction {tx_hash} submitted from {from}");

        if !options.wait_for_receipt {
            return Ok(RegistrationReceipt {
                from,
                tx_hash,
                block_number: None,
                confirmed: false,
            });
        }

        let receipt = await_receipt(pending, options).await?;
        Ok(RegistrationReceipt {
            from,
            tx_hash,
            block_number: receipt.block_number,
            confirmed: true,
        })
    }
}

#[async_trait]
impl FarmerRegistry for FarmerRegistrationContract {
    async fn accounts(&self) -> ContractResult<Vec<Address>> {
        self.wallet.accounts().await
    }

    async fn register_farmer(
        &self,
        from: Address,
        farmer: &Farmer,
        options: &SubmitOptions,
    ) -> ContractResult<RegistrationReceipt> {
        FarmerRegistrationContract::register_farmer(self, from, farmer, options).await
    }
}

fn input_types(function: &Function) -> Option<Vec<DynSolType>> {
    function
        .inputs
        .iter()
        .map(|param| DynSolType::parse(&param.ty).ok())
        .collect()
}

fn has_register_shape(function: &Function) -> bool {
    matches!(
        input_types(function).as_deref(),
        Some([DynSolType::String, DynSolType::String, DynSolType::Uint(_)])
    )
}

/// Picks the `registerFarmer` overload taking `(string, string, uint<N>)`.
fn find_register_function(abi: &JsonAbi) -> ContractResult<&Function> {
    let overloads = abi
        .function(REGISTER_FARMER)
        .filter(|overloads| !overloads.is_empty())
        .ok_or_else(|| ContractError::MissingFunction(REGISTER_FARMER.to_string()))?;

    overloads
        .iter()
        .find(|function| has_register_shape(function))
        .ok_or_else(|| ContractError::UnexpectedInputs {
            signature: overloads[0].signature(),
            expected: REGISTER_FARMER_SHAPE,
        })
}

fn land_size_bits(function: &Function) -> ContractResult<usize> {
    match input_types(function).as_deref() {
        Some([_, _, DynSolType::Uint(bits)]) => Ok(*bits),
        _ => Err(ContractError::UnexpectedInputs {
            signature: function.signature(),
            expected: REGISTER_FARMER_SHAPE,
        }),
    }
}
