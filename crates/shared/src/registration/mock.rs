use alloy::primitives::{keccak256, Address, B256};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::FarmerRegistry;
use crate::web3::contracts::core::error::{ContractError, ContractResult};
use crate::web3::contracts::helpers::utils::SubmitOptions;
use crate::web3::contracts::structs::farmer::{Farmer, RegistrationReceipt};

/// In-memory registry that records every submission instead of sending it.
#[derive(Clone, Default)]
pub struct MockFarmerRegistry {
    accounts: Vec<Address>,
    revert: bool,
    account_requests: Arc<Mutex<usize>>,
    submissions: Arc<Mutex<Vec<(Address, Farmer)>>>,
}

impl MockFarmerRegistry {
    pub fn new(accounts: Vec<Address>) -> Self {
        Self {
            accounts,
            ..Self::default()
        }
    }

    /// Every submission is recorded and then reported as reverted.
    pub fn reverting(mut self) -> Self {
        self.revert = true;
        self
    }

    pub async fn submissions(&self) -> Vec<(Address, Farmer)> {
        self.submissions.lock().await.clone()
    }

    pub async fn account_requests(&self) -> usize {
        *self.account_requests.lock().await
    }
}

#[async_trait]
impl FarmerRegistry for MockFarmerRegistry {
    async fn accounts(&self) -> ContractResult<Vec<Address>> {
        *self.account_requests.lock().await += 1;
        Ok(self.accounts.clone())
    }

    async fn register_farmer(
        &self,
        from: Address,
        farmer: &Farmer,
        options: &SubmitOptions,
    ) -> ContractResult<RegistrationReceipt> {
        let mut submissions = self.submissions.lock().await;
        submissions.push((from, farmer.clone()));

        // Deterministic fake hash per submission
        let mut preimage = from.to_vec();
        preimage.extend_from_slice(&submissions.len().to_be_bytes());
        let tx_hash: B256 = keccak256(preimage);

        if self.revert {
            return Err(ContractError::Reverted(tx_hash));
        }

        Ok(RegistrationReceipt {
            from,
            tx_hash,
            block_number: options
                .wait_for_receipt
                .then_some(submissions.len() as u64),
            confirmed: options.wait_for_receipt,
        })
    }
}
