use alloy::network::{Ethereum, ReceiptResponse};
use alloy::primitives::{keccak256, Selector, TxHash};
use alloy::providers::{PendingTransactionBuilder, Provider};
use alloy::rpc::types::TransactionReceipt;
use log::{debug, info};
use std::time::Duration;

use crate::web3::contracts::core::error::{ContractError, ContractResult};

pub fn get_selector(fn_image: &str) -> Selector {
    let hash = keccak256(fn_image.as_bytes());
    Selector::from([hash[0], hash[1], hash[2], hash[3]])
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOptions {
    pub wait_for_receipt: bool,
    pub confirmations: u64,
    pub receipt_timeout: Duration,
}

impl Default for SubmitOptions {
    fn default() -> Self {
        Self {
            wait_for_receipt: true,
            confirmations: 1,
            receipt_timeout: Duration::from_secs(60),
        }
    }
}

/// Waits until the transaction has the requested confirmations, then fetches
/// its receipt. A receipt with a failed status is reported as
/// [`ContractError::Reverted`].
pub async fn await_receipt(
    pending: PendingTransactionBuilder<Ethereum>,
    options: &SubmitOptions,
) -> ContractResult<TransactionReceipt> {
    let provider = pending.provider().clone();
    let tx_hash: TxHash = *pending.tx_hash();
    debug!(
        "Transaction {} sent, waiting for {} confirmation(s)",
        tx_hash, options.confirmations
    );

    // get_receipt() ignores required confirmations once a receipt exists
    pending
        .with_required_confirmations(options.confirmations)
        .with_timeout(Some(options.receipt_timeout))
        .watch()
        .await?;

    let receipt = provider
        .get_transaction_receipt(tx_hash)
        .await?
        .ok_or(ContractError::ReceiptNotFound(tx_hash))?;

    if !receipt.status() {
        return Err(ContractError::Reverted(tx_hash));
    }

    info!(
        "Transaction {} mined in block {:?} (gas used {})",
        tx_hash,
        receipt.block_number(),
        receipt.gas_used()
    );
    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_selector_matches_known_values() {
        // ERC-20 transfer(address,uint256)
        assert_eq!(
            hex::encode(get_selector("transfer(address,uint256)")),
            "a9059cbb"
        );
        assert_eq!(
            get_selector("registerFarmer(string,string,uint256)"),
            Selector::from_slice(&keccak256("registerFarmer(string,string,uint256)")[..4])
        );
    }

    #[test]
    fn test_default_submit_options_wait_for_one_confirmation() {
        let options = SubmitOptions::default();
        assert!(options.wait_for_receipt);
        assert_eq!(options.confirmations, 1);
        assert_eq!(options.receipt_timeout, Duration::from_secs(60));
    }
}
