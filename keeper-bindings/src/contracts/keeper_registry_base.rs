use std::sync::Arc;

use alloy::{
    network::Ethereum,
    primitives::{Address, U256},
    providers::Provider,
    rpc::types::Log,
};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    bindings::KeeperRegistryBase::{self, KeeperRegistryBaseErrors, PaymentModel},
    error::ContractError,
    rpc::EthereumClient,
};

const CONTRACT: &str = "KeeperRegistryBase";

/// How a 2.0 registry prices the L1 data cost of a perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentKind {
    Default,
    Arbitrum,
    Optimism,
}

impl TryFrom<PaymentModel> for PaymentKind {
    type Error = ContractError;

    fn try_from(model: PaymentModel) -> Result<Self, Self::Error> {
        match model {
            PaymentModel::DEFAULT => Ok(PaymentKind::Default),
            PaymentModel::ARBITRUM => Ok(PaymentKind::Arbitrum),
            PaymentModel::OPTIMISM => Ok(PaymentKind::Optimism),
            other => Err(ContractError::InvalidReturn {
                contract: CONTRACT,
                reason: format!("unknown payment model {other:?}"),
            }),
        }
    }
}

/// Token and oracle addresses a 2.0 registry was built with
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryFeeds {
    pub link: Address,
    pub link_eth_feed: Address,
    pub fast_gas_feed: Address,
    pub arb_nitro_oracle: Address,
    pub optimism_oracle: Address,
}

/// Read-only view over a keeper registry 2.0
///
/// The base contract is abstract, so this only ever points at a concrete
/// registry deployed elsewhere.
#[derive(Clone)]
pub struct KeeperRegistryBaseContract {
    address: Address,
    provider: Arc<dyn Provider<Ethereum>>,
}

impl KeeperRegistryBaseContract {
    pub fn new(address: Address, client: &EthereumClient) -> Self {
        Self {
            address,
            provider: client.provider.clone(),
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub async fn owner(&self) -> Result<Address, ContractError> {
        let registry = KeeperRegistryBase::new(self.address, &self.provider);
        Ok(registry.owner().call().await.map_err(revert)?._0)
    }

    pub async fn paused(&self) -> Result<bool, ContractError> {
        let registry = KeeperRegistryBase::new(self.address, &self.provider);
        Ok(registry.paused().call().await.map_err(revert)?._0)
    }

    pub async fn payment_model(&self) -> Result<PaymentKind, ContractError> {
        let registry = KeeperRegistryBase::new(self.address, &self.provider);
        registry.PAYMENT_MODEL().call().await.map_err(revert)?._0.try_into()
    }

    /// Fixed gas the registry charges on top of every perform
    pub async fn registry_gas_overhead(&self) -> Result<U256, ContractError> {
        let registry = KeeperRegistryBase::new(self.address, &self.provider);
        Ok(registry.REGISTRY_GAS_OVERHEAD().call().await.map_err(revert)?._0)
    }

    #[instrument(skip(self), fields(registry = %self.address), err)]
    pub async fn feeds(&self) -> Result<RegistryFeeds, ContractError> {
        let registry = KeeperRegistryBase::new(self.address, &self.provider);
        Ok(RegistryFeeds {
            link: registry.LINK().call().await.map_err(revert)?._0,
            link_eth_feed: registry.LINK_ETH_FEED().call().await.map_err(revert)?._0,
            fast_gas_feed: registry.FAST_GAS_FEED().call().await.map_err(revert)?._0,
            arb_nitro_oracle: registry.ARB_NITRO_ORACLE().call().await.map_err(revert)?._0,
            optimism_oracle: registry.OPTIMISM_ORACLE().call().await.map_err(revert)?._0,
        })
    }

    /// `UpkeepPaused` logs emitted since `from_block`
    pub async fn upkeep_paused_events(
        &self,
        from_block: u64,
    ) -> Result<Vec<(KeeperRegistryBase::UpkeepPaused, Log)>, ContractError> {
        let registry = KeeperRegistryBase::new(self.address, &self.provider);
        let events = registry.UpkeepPaused_filter().from_block(from_block).query().await?;
        debug!(count = events.len(), from_block, "Queried UpkeepPaused logs");
        Ok(events)
    }

    /// `UpkeepPerformed` logs emitted since `from_block`
    pub async fn upkeep_performed_events(
        &self,
        from_block: u64,
    ) -> Result<Vec<(KeeperRegistryBase::UpkeepPerformed, Log)>, ContractError> {
        let registry = KeeperRegistryBase::new(self.address, &self.provider);
        Ok(registry.UpkeepPerformed_filter().from_block(from_block).query().await?)
    }
}

fn revert(err: alloy::contract::Error) -> ContractError {
    ContractError::from_call::<KeeperRegistryBaseErrors>(CONTRACT, err)
}
