use alloy::{
    contract::{ContractInstance, Interface},
    json_abi::JsonAbi,
    primitives::Address,
    providers::Provider,
};
use serde::Deserialize;
use std::include_bytes;
use std::path::PathBuf;

use super::error::{ContractError, ContractResult};

macro_rules! include_abi {
    ($path:expr) => {{
        const ABI_BYTES: &[u8] = include_bytes!($path);
        ABI_BYTES
    }};
}

const FARMER_REGISTRATION_ABI: &[u8] =
    include_abi!("../../../../artifacts/abi/farmer_registration.json");

/// Where a contract's interface description comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AbiSource {
    /// The `FarmerRegistration` ABI compiled into the binary.
    #[default]
    Embedded,
    /// A build artifact on disk, either a Truffle/Hardhat JSON with an `abi`
    /// key or a bare ABI array.
    File(PathBuf),
}

impl AbiSource {
    pub fn load(&self) -> ContractResult<JsonAbi> {
        match self {
            AbiSource::Embedded => load_abi(FARMER_REGISTRATION_ABI),
            AbiSource::File(path) => {
                let bytes = std::fs::read(path).map_err(|source| ContractError::ArtifactRead {
                    path: path.clone(),
                    source,
                })?;
                load_abi(&bytes)
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Artifact {
    Bare(JsonAbi),
    Compiled { abi: JsonAbi },
}

/// Parses either a compiled artifact (`{"abi": [...], ...}`) or a bare ABI array.
pub fn load_abi(bytes: &[u8]) -> ContractResult<JsonAbi> {
    let artifact: Artifact = serde_json::from_slice(bytes)?;
    Ok(match artifact {
        Artifact::Bare(abi) | Artifact::Compiled { abi } => abi,
    })
}

#[derive(Clone)]
pub struct Contract<P: Provider> {
    instance: ContractInstance<P>,
}

impl<P: Provider> Contract<P> {
    pub fn new(address: Address, provider: P, abi: JsonAbi) -> Self {
        let instance = ContractInstance::new(address, provider, Interface::new(abi));
        Self { instance }
    }

    pub fn instance(&self) -> &ContractInstance<P> {
        &self.instance
    }

    pub fn address(&self) -> &Address {
        self.instance.address()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_abi_declares_register_farmer() {
        let abi = AbiSource::Embedded.load().unwrap();
        let functions = abi.function("registerFarmer").unwrap();
        assert_eq!(functions.len(), 1);
        assert_eq!(
            functions[0].signature(),
            "registerFarmer(string,string,uint256)"
        );
        assert!(abi.event("FarmerRegistered").is_some());
    }

    #[test]
    fn test_truffle_artifact_and_bare_array_load_the_same_abi() {
        let bare = load_abi(FARMER_REGISTRATION_ABI).unwrap();
        let bare_json: serde_json::Value = serde_json::from_slice(FARMER_REGISTRATION_ABI).unwrap();
        let artifact = serde_json::json!({
            "contractName": "FarmerRegistration",
            "abi": bare_json,
            "bytecode": "0x6080",
            "networks": {}
        });
        let compiled = load_abi(artifact.to_string().as_bytes()).unwrap();
        assert_eq!(bare, compiled);
    }

    #[test]
    fn test_malformed_abi_is_rejected() {
        let err = load_abi(b"{\"contractName\": \"FarmerRegistration\"").unwrap_err();
        assert!(matches!(err, ContractError::AbiParse(_)));
    }

    #[test]
    fn test_missing_artifact_file() {
        let source = AbiSource::File(PathBuf::from("/nonexistent/FarmerRegistration.json"));
        let err = source.load().unwrap_err();
        assert!(matches!(err, ContractError::ArtifactRead { .. }));
    }

    #[test]
    fn test_artifact_file_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("FarmerRegistration.json");
        let bare_json: serde_json::Value = serde_json::from_slice(FARMER_REGISTRATION_ABI).unwrap();
        std::fs::write(&path, serde_json::json!({ "abi": bare_json }).to_string()).unwrap();

        let abi = AbiSource::File(path).load().unwrap();
        assert!(abi.function("registerFarmer").is_some());
    }
}
