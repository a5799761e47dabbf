use alloy::primitives::Address;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use shared::web3::contracts::core::contract::AbiSource;
use shared::web3::contracts::core::error::ContractError;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use url::Url;

pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:7545";
pub const ADDRESS_PLACEHOLDER: &str = "YOUR_DEPLOYED_CONTRACT_ADDRESS";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub rpc_url: Option<String>,
    pub contract_address: Option<String>,
    pub abi_path: Option<PathBuf>,
    /// Key source, `env:VAR_NAME` or `file:/path`. Unset means the node signs.
    pub private_key: Option<String>,
    pub confirmations: Option<u64>,
    pub receipt_timeout_secs: Option<u64>,
}

impl Config {
    pub fn load(config_path: &Option<String>, env_file: &str) -> Result<Self> {
        dotenv::from_filename(env_file).ok();

        let mut config = if let Some(path) = config_path {
            Self::load_from_file(path)?
        } else {
            Self::default()
        };

        config.load_from_env();
        Ok(config)
    }

    pub fn load_from_file(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            log::warn!("Config file {path} not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {path}"))?;

        Ok(config)
    }

    pub fn load_from_env(&mut self) {
        self.apply_env(|name| std::env::var(name).ok());
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(rpc_url) = lookup("RPC_URL") {
            self.rpc_url = Some(rpc_url);
        }
        if let Some(address) = lookup("CONTRACT_ADDRESS") {
            self.contract_address = Some(address);
        }
        if let Some(abi_path) = lookup("ABI_PATH") {
            self.abi_path = Some(PathBuf::from(abi_path));
        }
        if lookup("PRIVATE_KEY").is_some() {
            self.private_key = Some("env:PRIVATE_KEY".to_string());
        }
    }

    pub fn with_rpc_url(mut self, rpc_url: Option<String>) -> Self {
        if rpc_url.is_some() {
            self.rpc_url = rpc_url;
        }
        self
    }

    pub fn with_contract_address(mut self, address: Option<String>) -> Self {
        if address.is_some() {
            self.contract_address = address;
        }
        self
    }

    pub fn with_abi_path(mut self, abi_path: Option<PathBuf>) -> Self {
        if abi_path.is_some() {
            self.abi_path = abi_path;
        }
        self
    }

    pub fn get_rpc_url(&self) -> Result<Url> {
        let rpc_url = self.rpc_url.as_deref().unwrap_or(DEFAULT_RPC_URL);
        Url::parse(rpc_url).with_context(|| format!("Invalid RPC URL: {rpc_url}"))
    }

    pub fn get_contract_address(&self) -> Result<Address, ContractError> {
        let raw = match self.contract_address.as_deref().map(str::trim) {
            None | Some("") | Some(ADDRESS_PLACEHOLDER) => {
                return Err(ContractError::AddressNotConfigured)
            }
            Some(raw) => raw,
        };
        Address::from_str(raw).map_err(|_| ContractError::InvalidAddress(raw.to_string()))
    }

    pub fn abi_source(&self) -> AbiSource {
        match &self.abi_path {
            Some(path) => AbiSource::File(path.clone()),
            None => AbiSource::Embedded,
        }
    }
}
