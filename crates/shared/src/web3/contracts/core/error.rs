use alloy::primitives::{TxHash, U256};
use alloy::providers::PendingTransactionError;
use alloy::signers::local::LocalSignerError;
use alloy::transports::TransportError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    // Initialization errors
    #[error("Failed to read ABI artifact {}: {source}", path.display())]
    ArtifactRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse ABI: {0}")]
    AbiParse(#[from] serde_json::Error),
    #[error("ABI does not declare a `{0}` function")]
    MissingFunction(String),
    #[error("ABI function {signature} does not take {expected}")]
    UnexpectedInputs {
        signature: String,
        expected: &'static str,
    },

    // Configuration errors
    #[error("Contract address not configured. Set CONTRACT_ADDRESS or use --contract-address")]
    AddressNotConfigured,
    #[error("Invalid contract address `{0}`")]
    InvalidAddress(String),
    #[error("Invalid private key: {0}")]
    Signer(#[from] LocalSignerError),

    // Input errors
    #[error("Invalid farmer: {0}")]
    InvalidFarmer(String),
    #[error("Value {value} does not fit in {ty}")]
    ValueOutOfRange { value: U256, ty: String },

    // Chain interaction errors
    #[error("No signing accounts available on the node")]
    NoAccounts,
    #[error("RPC request failed: {0}")]
    Transport(#[from] TransportError),
    #[error("Contract call failed: {0}")]
    Call(#[from] alloy::contract::Error),
    #[error("Waiting for transaction failed: {0}")]
    PendingTransaction(#[from] PendingTransactionError),
    #[error("No receipt found for transaction {0}")]
    ReceiptNotFound(TxHash),
    #[error("Transaction {0} reverted")]
    Reverted(TxHash),
}

pub type ContractResult<T> = Result<T, ContractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_read_names_the_path() {
        let err = ContractError::ArtifactRead {
            path: PathBuf::from("build/contracts/FarmerRegistration.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("build/contracts/FarmerRegistration.json"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn test_value_out_of_range_message() {
        let err = ContractError::ValueOutOfRange {
            value: U256::from(300),
            ty: "uint8".to_string(),
        };
        assert_eq!(err.to_string(), "Value 300 does not fit in uint8");
    }
}
