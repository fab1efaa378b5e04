use std::sync::Arc;

use alloy::{
    network::{Ethereum, EthereumWallet},
    primitives::Address,
    providers::{Provider, ProviderBuilder},
    rpc::types::{Block, BlockId, BlockNumberOrTag},
    signers::local::PrivateKeySigner,
};
use eyre::Result;
use tracing::info;

/// Ethereum RPC client shared by every contract wrapper
///
/// Wraps a typed alloy provider. When built with a signer the provider fills
/// nonce, gas and chain id and signs transactions locally; without one it can
/// only serve calls and log queries.
#[derive(Clone)]
pub struct EthereumClient {
    /// Typed provider for Ethereum network
    pub provider: Arc<dyn Provider<Ethereum>>,
    /// Address transactions are sent from, when a signer is attached
    pub default_sender: Option<Address>,
}

impl EthereumClient {
    /// Create a read-only client over HTTP
    ///
    /// Verifies the connection by fetching the latest block number.
    pub async fn new(rpc_url: &str) -> Result<Self> {
        let provider = ProviderBuilder::new()
            .network::<Ethereum>()
            .on_http(rpc_url.parse()?);

        let block_number = provider.get_block_number().await?;
        info!(block_number, "Connected to Ethereum node");

        Ok(Self {
            provider: Arc::new(provider),
            default_sender: None,
        })
    }

    /// Create a client that signs transactions with `private_key`
    ///
    /// # Arguments
    ///
    /// * `rpc_url` - URL of the Ethereum RPC endpoint
    /// * `private_key` - hex encoded secp256k1 key, with or without `0x`
    pub async fn with_signer(rpc_url: &str, private_key: &str) -> Result<Self> {
        let signer: PrivateKeySigner = private_key.parse()?;
        let sender = signer.address();
        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .on_http(rpc_url.parse()?);

        let block_number = provider.get_block_number().await?;
        info!(block_number, %sender, "Connected to Ethereum node with signer");

        Ok(Self {
            provider: Arc::new(provider),
            default_sender: Some(sender),
        })
    }

    /// Fetch the latest block from the Ethereum network
    pub async fn get_latest_block(&self) -> Result<Block> {
        let maybe_block = self
            .provider
            .get_block(BlockId::Number(BlockNumberOrTag::Latest))
            .await?;

        let block = maybe_block.ok_or_else(|| eyre::eyre!("No latest block returned"))?;
        Ok(block)
    }
}
