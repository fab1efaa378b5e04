use std::sync::Arc;

use alloy::{
    network::Ethereum,
    primitives::Address,
    providers::Provider,
};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::{
    bindings::{AggregatorFacade, KeeperRegistry, StakingPoolLib},
    contracts::{AggregatorFacadeContract, KeeperRegistryContract, KeeperRegistrySettings},
    error::ContractError,
    rpc::EthereumClient,
};

/// Constructor arguments of a keeper registry 1.2
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeeperRegistryOpts {
    /// LINK token the registry is paid in
    pub link: Address,
    /// LINK/ETH price feed
    pub link_eth_feed: Address,
    /// Fast gas price feed
    pub fast_gas_feed: Address,
    #[serde(default)]
    pub settings: KeeperRegistrySettings,
}

/// Deploys the bound contracts through a signing client
///
/// `KeeperRegistryBase` is abstract and has no deploy method.
#[derive(Clone)]
pub struct ContractDeployer {
    client: EthereumClient,
}

impl ContractDeployer {
    /// # Errors
    ///
    /// Fails when `client` has no signer attached.
    pub fn new(client: EthereumClient) -> Result<Self, ContractError> {
        if client.default_sender.is_none() {
            return Err(ContractError::MissingSigner("ContractDeployer"));
        }
        Ok(Self { client })
    }

    fn provider(&self) -> &Arc<dyn Provider<Ethereum>> {
        &self.client.provider
    }

    #[instrument(skip(self), err)]
    pub async fn deploy_aggregator_facade(
        &self,
        aggregator: Address,
        decimals: u8,
        description: String,
    ) -> Result<AggregatorFacadeContract, ContractError> {
        let facade = AggregatorFacade::deploy(self.provider(), aggregator, decimals, description).await?;
        let address = *facade.address();
        info!(%address, "Deployed AggregatorFacade");
        Ok(AggregatorFacadeContract::new(address, &self.client))
    }

    #[instrument(skip(self, opts), err)]
    pub async fn deploy_keeper_registry(
        &self,
        opts: &KeeperRegistryOpts,
    ) -> Result<KeeperRegistryContract, ContractError> {
        let registry = KeeperRegistry::deploy(
            self.provider(),
            opts.link,
            opts.link_eth_feed,
            opts.fast_gas_feed,
            (&opts.settings).into(),
        )
        .await
        .map_err(|e| {
            ContractError::from_call::<KeeperRegistry::KeeperRegistryErrors>("KeeperRegistry", e)
        })?;
        let address = *registry.address();
        info!(%address, link = %opts.link, "Deployed KeeperRegistry");
        Ok(KeeperRegistryContract::new(address, &self.client))
    }

    /// Deploy the staking pool library and return its address for linking
    #[instrument(skip(self), err)]
    pub async fn deploy_staking_pool_lib(&self) -> Result<Address, ContractError> {
        let library = StakingPoolLib::deploy(self.provider()).await?;
        let address = *library.address();
        info!(%address, "Deployed StakingPoolLib");
        Ok(address)
    }
}
