use alloy::{
    network::EthereumWallet,
    primitives::{Address, U256},
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
};
use url::Url;

use crate::web3::contracts::core::error::ContractResult;

pub type WalletProvider = DynProvider;

/// A connection to a node plus the source of signing accounts.
///
/// Without a local key the node signs for its own unlocked accounts
/// (`eth_sendTransaction`), which is how development chains such as Ganache
/// are normally driven. With a local key transactions are filled and signed
/// client-side and sent raw.
#[derive(Clone)]
pub struct Wallet {
    signer: Option<PrivateKeySigner>,
    provider: WalletProvider,
}

impl Wallet {
    pub fn node_managed(provider_url: Url) -> Self {
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_http(provider_url)
            .erased();

        Self {
            signer: None,
            provider,
        }
    }

    pub fn new(private_key: &str, provider_url: Url) -> ContractResult<Self> {
        let signer: PrivateKeySigner = private_key.trim().parse()?;
        let wallet = EthereumWallet::from(signer.clone());
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect_http(provider_url)
            .erased();

        Ok(Self {
            signer: Some(signer),
            provider,
        })
    }

    pub fn provider(&self) -> WalletProvider {
        self.provider.clone()
    }

    pub fn signer_address(&self) -> Option<Address> {
        self.signer.as_ref().map(|signer| signer.address())
    }

    /// Accounts able to send transactions through this wallet, in node order.
    pub async fn accounts(&self) -> ContractResult<Vec<Address>> {
        match self.signer_address() {
            Some(address) => Ok(vec![address]),
            None => Ok(self.provider.get_accounts().await?),
        }
    }

    pub async fn get_balance(&self, address: Address) -> ContractResult<U256> {
        Ok(self.provider.get_balance(address).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    // Anvil/Hardhat account #0
    const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const DEV_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    #[test]
    fn test_local_key_wallet_reports_signer_address() {
        let wallet = Wallet::new(DEV_KEY, Url::parse("http://localhost:8545").unwrap()).unwrap();
        assert_eq!(
            wallet.signer_address(),
            Some(DEV_ADDRESS.parse::<Address>().unwrap())
        );
    }

    #[test]
    fn test_invalid_private_key() {
        let result = Wallet::new("not-a-key", Url::parse("http://localhost:8545").unwrap());
        assert!(matches!(
            result,
            Err(crate::web3::contracts::core::error::ContractError::Signer(_))
        ));
    }

    #[tokio::test]
    async fn test_local_key_accounts_skip_the_node() {
        let wallet = Wallet::new(DEV_KEY, Url::parse("http://127.0.0.1:1").unwrap()).unwrap();
        let accounts = wallet.accounts().await.unwrap();
        assert_eq!(accounts, vec![DEV_ADDRESS.parse::<Address>().unwrap()]);
    }

    #[tokio::test]
    async fn test_node_managed_accounts_come_from_eth_accounts() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_body(Matcher::Regex(r#""method":"eth_accounts""#.to_string()))
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"jsonrpc":"2.0","id":0,"result":["0x627306090abab3a6e1400e9345bc60c78a8bef57","0xf17f52151ebef6c7334fad080c5704d77216b732"]}"#,
            )
            .expect(1)
            .create_async()
            .await;

        let wallet = Wallet::node_managed(Url::parse(&server.url()).unwrap());
        assert_eq!(wallet.signer_address(), None);
        let accounts = wallet.accounts().await.unwrap();

        assert_eq!(accounts.len(), 2);
        assert_eq!(
            accounts[0],
            "0x627306090abab3a6e1400e9345bc60c78a8bef57"
                .parse::<Address>()
                .unwrap()
        );
        mock.assert_async().await;
    }
}
