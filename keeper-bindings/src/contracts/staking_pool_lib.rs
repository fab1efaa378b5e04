use std::sync::Arc;

use alloy::{
    network::Ethereum,
    primitives::{Address, B256},
    providers::Provider,
    rpc::types::{Filter, Log},
    sol_types::{SolEventInterface, SolInterface},
};
use tracing::{debug, warn};

use crate::{
    bindings::StakingPoolLib::{StakingPoolLibErrors, StakingPoolLibEvents},
    error::ContractError,
    rpc::EthereumClient,
};

/// Any event the staking pool library can emit
pub type StakingPoolEvent = StakingPoolLibEvents;

/// Decode a log emitted through `StakingPoolLib`
///
/// The library's events are emitted by whichever staking contract links it,
/// so the emitter address is not checked.
pub fn decode_event(log: &Log) -> Result<StakingPoolEvent, ContractError> {
    Ok(StakingPoolLibEvents::decode_raw_log(log.topics(), &log.data().data, true)?)
}

/// Decode revert data into one of the library's custom errors
pub fn decode_revert(data: &[u8]) -> Option<StakingPoolLibErrors> {
    StakingPoolLibErrors::abi_decode(data, true).ok()
}

/// Watches a staking contract that links `StakingPoolLib`
#[derive(Clone)]
pub struct StakingPoolLibContract {
    address: Address,
    provider: Arc<dyn Provider<Ethereum>>,
}

impl StakingPoolLibContract {
    pub fn new(address: Address, client: &EthereumClient) -> Self {
        Self {
            address,
            provider: client.provider.clone(),
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Pool events emitted by the contract since `from_block`, in log order
    ///
    /// Logs that match a pool topic but fail to decode are skipped.
    pub async fn events(&self, from_block: u64) -> Result<Vec<StakingPoolEvent>, ContractError> {
        let topics: Vec<B256> = StakingPoolLibEvents::SELECTORS
            .iter()
            .map(|selector| B256::from(*selector))
            .collect();
        let filter = Filter::new()
            .address(self.address)
            .event_signature(topics)
            .from_block(from_block);

        let logs = self
            .provider
            .get_logs(&filter)
            .await
            .map_err(|e| ContractError::RpcConnection(e.to_string()))?;

        let events: Vec<StakingPoolEvent> = logs
            .iter()
            .filter_map(|log| match decode_event(log) {
                Ok(event) => Some(event),
                Err(e) => {
                    warn!(tx_hash = ?log.transaction_hash, error = %e, "Skipping undecodable pool log");
                    None
                }
            })
            .collect();
        debug!(count = events.len(), from_block, "Queried staking pool logs");
        Ok(events)
    }
}
