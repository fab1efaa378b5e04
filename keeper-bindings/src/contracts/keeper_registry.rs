use std::sync::Arc;

use alloy::{
    network::Ethereum,
    primitives::{
        aliases::{U24, U96},
        Address, Bytes, TxHash, U256,
    },
    providers::Provider,
    rpc::types::Log,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::ensure_success;
use crate::{
    bindings::KeeperRegistry::{self, KeeperRegistryErrors},
    error::ContractError,
    rpc::EthereumClient,
};

const CONTRACT: &str = "KeeperRegistry";

/// Tunable fee and gas parameters of a keeper registry
///
/// Mirrors the on-chain `Config` struct. The defaults are the values the
/// keeper smoke tests deploy with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeeperRegistrySettings {
    /// Premium on top of gas reimbursement, in parts per billion
    pub payment_premium_ppb: u32,
    /// Flat fee per upkeep, in micro LINK
    pub flat_fee_micro_link: u32,
    /// Blocks each keeper holds its turn before the next one may perform
    pub block_count_per_turn: U24,
    /// Gas limit for `checkUpkeep` simulation
    pub check_gas_limit: u32,
    /// Seconds a feed may be stale before fallback prices apply
    pub staleness_seconds: U24,
    /// Multiplier on the fast gas price when computing the payment ceiling
    pub gas_ceiling_multiplier: u16,
    pub min_upkeep_spend: U96,
    pub max_perform_gas: u32,
    /// Gas price used when the fast gas feed is stale
    pub fallback_gas_price: U256,
    /// LINK/ETH price used when the LINK feed is stale
    pub fallback_link_price: U256,
    pub transcoder: Address,
    pub registrar: Address,
}

impl Default for KeeperRegistrySettings {
    fn default() -> Self {
        Self {
            payment_premium_ppb: 200_000_000,
            flat_fee_micro_link: 0,
            block_count_per_turn: U24::from(3u32),
            check_gas_limit: 2_500_000,
            staleness_seconds: U24::from(90_000u32),
            gas_ceiling_multiplier: 1,
            min_upkeep_spend: U96::ZERO,
            max_perform_gas: 5_000_000,
            fallback_gas_price: U256::from(200_000_000_000u64),
            fallback_link_price: U256::from(2_000_000_000_000_000_000u64),
            transcoder: Address::ZERO,
            registrar: Address::ZERO,
        }
    }
}

impl From<&KeeperRegistrySettings> for KeeperRegistry::Config {
    fn from(settings: &KeeperRegistrySettings) -> Self {
        Self {
            paymentPremiumPPB: settings.payment_premium_ppb,
            flatFeeMicroLink: settings.flat_fee_micro_link,
            blockCountPerTurn: settings.block_count_per_turn,
            checkGasLimit: settings.check_gas_limit,
            stalenessSeconds: settings.staleness_seconds,
            gasCeilingMultiplier: settings.gas_ceiling_multiplier,
            minUpkeepSpend: settings.min_upkeep_spend,
            maxPerformGas: settings.max_perform_gas,
            fallbackGasPrice: settings.fallback_gas_price,
            fallbackLinkPrice: settings.fallback_link_price,
            transcoder: settings.transcoder,
            registrar: settings.registrar,
        }
    }
}

impl From<KeeperRegistry::Config> for KeeperRegistrySettings {
    fn from(config: KeeperRegistry::Config) -> Self {
        Self {
            payment_premium_ppb: config.paymentPremiumPPB,
            flat_fee_micro_link: config.flatFeeMicroLink,
            block_count_per_turn: config.blockCountPerTurn,
            check_gas_limit: config.checkGasLimit,
            staleness_seconds: config.stalenessSeconds,
            gas_ceiling_multiplier: config.gasCeilingMultiplier,
            min_upkeep_spend: config.minUpkeepSpend,
            max_perform_gas: config.maxPerformGas,
            fallback_gas_price: config.fallbackGasPrice,
            fallback_link_price: config.fallbackLinkPrice,
            transcoder: config.transcoder,
            registrar: config.registrar,
        }
    }
}

/// Registry bookkeeping returned by `getState`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryState {
    pub nonce: u32,
    pub owner_link_balance: U256,
    pub expected_link_balance: U256,
    pub num_upkeeps: U256,
    pub config: KeeperRegistrySettings,
    pub keepers: Vec<Address>,
}

impl From<KeeperRegistry::getStateReturn> for RegistryState {
    fn from(ret: KeeperRegistry::getStateReturn) -> Self {
        Self {
            nonce: ret.state.nonce,
            owner_link_balance: U256::from(ret.state.ownerLinkBalance),
            expected_link_balance: ret.state.expectedLinkBalance,
            num_upkeeps: ret.state.numUpkeeps,
            config: ret.config.into(),
            keepers: ret.keepers,
        }
    }
}

/// A registered upkeep as stored by the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpkeepInfo {
    pub target: Address,
    pub execute_gas: u32,
    pub check_data: Bytes,
    pub balance: U256,
    pub last_keeper: Address,
    pub admin: Address,
    /// Block after which the upkeep is cancelled; `u64::MAX` while active
    pub max_valid_blocknumber: u64,
    pub amount_spent: U256,
}

impl UpkeepInfo {
    pub fn is_active(&self) -> bool {
        self.max_valid_blocknumber == u64::MAX
    }
}

impl From<KeeperRegistry::getUpkeepReturn> for UpkeepInfo {
    fn from(ret: KeeperRegistry::getUpkeepReturn) -> Self {
        Self {
            target: ret.target,
            execute_gas: ret.executeGas,
            check_data: ret.checkData,
            balance: U256::from(ret.balance),
            last_keeper: ret.lastKeeper,
            admin: ret.admin,
            max_valid_blocknumber: ret.maxValidBlocknumber,
            amount_spent: U256::from(ret.amountSpent),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeeperInfo {
    pub payee: Address,
    pub active: bool,
    pub balance: U256,
}

/// Outcome of simulating `checkUpkeep`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckUpkeepResult {
    pub perform_data: Bytes,
    pub max_link_payment: U256,
    pub gas_limit: U256,
    pub adjusted_gas_wei: U256,
    pub link_eth: U256,
}

/// Handle on a deployed keeper registry 1.2
#[derive(Clone)]
pub struct KeeperRegistryContract {
    address: Address,
    provider: Arc<dyn Provider<Ethereum>>,
}

impl KeeperRegistryContract {
    pub fn new(address: Address, client: &EthereumClient) -> Self {
        Self {
            address,
            provider: client.provider.clone(),
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Replace the registry configuration
    #[instrument(skip(self, settings), fields(registry = %self.address), err)]
    pub async fn set_config(&self, settings: &KeeperRegistrySettings) -> Result<TxHash, ContractError> {
        let registry = KeeperRegistry::new(self.address, &self.provider);
        let receipt = registry
            .setConfig(settings.into())
            .send()
            .await
            .map_err(revert)?
            .get_receipt()
            .await?;
        let receipt = ensure_success(receipt)?;
        info!(tx_hash = %receipt.transaction_hash, "Registry config updated");
        Ok(receipt.transaction_hash)
    }

    /// Point the registry at a new registrar, keeping the rest of the config
    pub async fn set_registrar(&self, registrar: Address) -> Result<TxHash, ContractError> {
        let mut settings = self.state().await?.config;
        settings.registrar = registrar;
        self.set_config(&settings).await
    }

    /// Replace the keeper set; `payees[i]` is paid for the work of `keepers[i]`
    #[instrument(skip(self), fields(registry = %self.address), err)]
    pub async fn set_keepers(
        &self,
        keepers: Vec<Address>,
        payees: Vec<Address>,
    ) -> Result<TxHash, ContractError> {
        let registry = KeeperRegistry::new(self.address, &self.provider);
        let receipt = registry
            .setKeepers(keepers, payees)
            .send()
            .await
            .map_err(revert)?
            .get_receipt()
            .await?;
        Ok(ensure_success(receipt)?.transaction_hash)
    }

    /// Register `target` as an upkeep and return the id the registry assigned
    #[instrument(skip(self, check_data), fields(registry = %self.address), err)]
    pub async fn register_upkeep(
        &self,
        target: Address,
        gas_limit: u32,
        admin: Address,
        check_data: Bytes,
    ) -> Result<U256, ContractError> {
        let registry = KeeperRegistry::new(self.address, &self.provider);
        let receipt = registry
            .registerUpkeep(target, gas_limit, admin, check_data)
            .send()
            .await
            .map_err(revert)?
            .get_receipt()
            .await?;
        let receipt = ensure_success(receipt)?;

        let id = registered_upkeep_id(self.address, receipt.inner.logs())
            .ok_or(ContractError::MissingEvent {
                event: "UpkeepRegistered",
                tx_hash: receipt.transaction_hash,
            })?;
        info!(upkeep_id = %id, %target, "Registered upkeep");
        Ok(id)
    }

    /// Top up an upkeep's balance; the caller must have approved the LINK
    pub async fn add_funds(&self, id: U256, amount: U96) -> Result<TxHash, ContractError> {
        let registry = KeeperRegistry::new(self.address, &self.provider);
        let receipt = registry
            .addFunds(id, amount)
            .send()
            .await
            .map_err(revert)?
            .get_receipt()
            .await?;
        Ok(ensure_success(receipt)?.transaction_hash)
    }

    pub async fn cancel_upkeep(&self, id: U256) -> Result<TxHash, ContractError> {
        let registry = KeeperRegistry::new(self.address, &self.provider);
        let receipt = registry
            .cancelUpkeep(id)
            .send()
            .await
            .map_err(revert)?
            .get_receipt()
            .await?;
        Ok(ensure_success(receipt)?.transaction_hash)
    }

    pub async fn set_upkeep_gas_limit(&self, id: U256, gas_limit: u32) -> Result<TxHash, ContractError> {
        let registry = KeeperRegistry::new(self.address, &self.provider);
        let receipt = registry
            .setUpkeepGasLimit(id, gas_limit)
            .send()
            .await
            .map_err(revert)?
            .get_receipt()
            .await?;
        Ok(ensure_success(receipt)?.transaction_hash)
    }

    pub async fn pause(&self) -> Result<TxHash, ContractError> {
        let registry = KeeperRegistry::new(self.address, &self.provider);
        let receipt = registry.pause().send().await.map_err(revert)?.get_receipt().await?;
        Ok(ensure_success(receipt)?.transaction_hash)
    }

    pub async fn unpause(&self) -> Result<TxHash, ContractError> {
        let registry = KeeperRegistry::new(self.address, &self.provider);
        let receipt = registry.unpause().send().await.map_err(revert)?.get_receipt().await?;
        Ok(ensure_success(receipt)?.transaction_hash)
    }

    pub async fn paused(&self) -> Result<bool, ContractError> {
        let registry = KeeperRegistry::new(self.address, &self.provider);
        Ok(registry.paused().call().await.map_err(revert)?._0)
    }

    pub async fn owner(&self) -> Result<Address, ContractError> {
        let registry = KeeperRegistry::new(self.address, &self.provider);
        Ok(registry.owner().call().await.map_err(revert)?._0)
    }

    pub async fn type_and_version(&self) -> Result<String, ContractError> {
        let registry = KeeperRegistry::new(self.address, &self.provider);
        Ok(registry.typeAndVersion().call().await.map_err(revert)?._0)
    }

    #[instrument(skip(self), fields(registry = %self.address), err)]
    pub async fn upkeep_info(&self, id: U256) -> Result<UpkeepInfo, ContractError> {
        let registry = KeeperRegistry::new(self.address, &self.provider);
        let upkeep = registry.getUpkeep(id).call().await.map_err(revert)?;
        Ok(upkeep.into())
    }

    pub async fn keeper_info(&self, keeper: Address) -> Result<KeeperInfo, ContractError> {
        let registry = KeeperRegistry::new(self.address, &self.provider);
        let info = registry.getKeeperInfo(keeper).call().await.map_err(revert)?;
        Ok(KeeperInfo {
            payee: info.payee,
            active: info.active,
            balance: U256::from(info.balance),
        })
    }

    #[instrument(skip(self), fields(registry = %self.address), err)]
    pub async fn state(&self) -> Result<RegistryState, ContractError> {
        let registry = KeeperRegistry::new(self.address, &self.provider);
        let state = registry.getState().call().await.map_err(revert)?;
        debug!(num_upkeeps = %state.state.numUpkeeps, keepers = state.keepers.len(), "Fetched registry state");
        Ok(state.into())
    }

    /// Ids of active upkeeps, `max_count == 0` meaning all from `start_index`
    pub async fn active_upkeep_ids(
        &self,
        start_index: U256,
        max_count: U256,
    ) -> Result<Vec<U256>, ContractError> {
        let registry = KeeperRegistry::new(self.address, &self.provider);
        Ok(registry
            .getActiveUpkeepIDs(start_index, max_count)
            .call()
            .await
            .map_err(revert)?
            ._0)
    }

    /// Simulate `checkUpkeep` as keeper `from`
    ///
    /// The registry only accepts the simulation when `tx.origin` is the zero
    /// address, so the call is issued from there.
    pub async fn check_upkeep(&self, id: U256, from: Address) -> Result<CheckUpkeepResult, ContractError> {
        let registry = KeeperRegistry::new(self.address, &self.provider);
        let ret = registry
            .checkUpkeep(id, from)
            .from(Address::ZERO)
            .call()
            .await
            .map_err(revert)?;
        Ok(CheckUpkeepResult {
            perform_data: ret.performData,
            max_link_payment: ret.maxLinkPayment,
            gas_limit: ret.gasLimit,
            adjusted_gas_wei: ret.adjustedGasWei,
            link_eth: ret.linkEth,
        })
    }

    pub async fn min_balance_for_upkeep(&self, id: U256) -> Result<U256, ContractError> {
        let registry = KeeperRegistry::new(self.address, &self.provider);
        let ret = registry.getMinBalanceForUpkeep(id).call().await.map_err(revert)?;
        Ok(U256::from(ret.minBalance))
    }

    pub async fn max_payment_for_gas(&self, gas_limit: U256) -> Result<U256, ContractError> {
        let registry = KeeperRegistry::new(self.address, &self.provider);
        let ret = registry.getMaxPaymentForGas(gas_limit).call().await.map_err(revert)?;
        Ok(U256::from(ret.maxPayment))
    }

    /// `UpkeepPerformed` logs emitted since `from_block`
    pub async fn upkeep_performed_events(
        &self,
        from_block: u64,
    ) -> Result<Vec<(KeeperRegistry::UpkeepPerformed, Log)>, ContractError> {
        let registry = KeeperRegistry::new(self.address, &self.provider);
        let events = registry.UpkeepPerformed_filter().from_block(from_block).query().await?;
        debug!(count = events.len(), from_block, "Queried UpkeepPerformed logs");
        Ok(events)
    }

    /// `ConfigSet` logs emitted since `from_block`
    pub async fn config_set_events(
        &self,
        from_block: u64,
    ) -> Result<Vec<(KeeperRegistry::ConfigSet, Log)>, ContractError> {
        let registry = KeeperRegistry::new(self.address, &self.provider);
        Ok(registry.ConfigSet_filter().from_block(from_block).query().await?)
    }

    /// `UpkeepRegistered` logs emitted since `from_block`
    pub async fn upkeep_registered_events(
        &self,
        from_block: u64,
    ) -> Result<Vec<(KeeperRegistry::UpkeepRegistered, Log)>, ContractError> {
        let registry = KeeperRegistry::new(self.address, &self.provider);
        Ok(registry.UpkeepRegistered_filter().from_block(from_block).query().await?)
    }
}

/// Upkeep id carried by an `UpkeepRegistered` log
pub fn parse_upkeep_id_from_registered_log(log: &Log) -> Result<U256, ContractError> {
    let registered = log.log_decode::<KeeperRegistry::UpkeepRegistered>()?;
    Ok(registered.inner.data.id)
}

/// Id from the first `UpkeepRegistered` log emitted by `registry`
fn registered_upkeep_id(registry: Address, logs: &[Log]) -> Option<U256> {
    logs.iter()
        .filter(|log| log.address() == registry)
        .find_map(|log| parse_upkeep_id_from_registered_log(log).ok())
}

fn revert(err: alloy::contract::Error) -> ContractError {
    ContractError::from_call::<KeeperRegistryErrors>(CONTRACT, err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::{
        primitives::{address, b256, LogData},
        sol_types::SolEvent,
    };

    #[test]
    fn settings_round_trip_through_the_onchain_config() {
        let settings = KeeperRegistrySettings {
            registrar: address!("00000000000000000000000000000000000000b0"),
            ..Default::default()
        };

        let config = KeeperRegistry::Config::from(&settings);
        assert_eq!(config.paymentPremiumPPB, 200_000_000);
        assert_eq!(config.blockCountPerTurn, U24::from(3u32));
        assert_eq!(config.registrar, settings.registrar);

        assert_eq!(KeeperRegistrySettings::from(config), settings);
    }

    #[test]
    fn registered_log_yields_upkeep_id() {
        let event = KeeperRegistry::UpkeepRegistered {
            id: U256::from(7u64),
            executeGas: 500_000,
            admin: address!("00000000000000000000000000000000000000ad"),
        };
        let log = Log {
            inner: alloy::primitives::Log {
                address: address!("00000000000000000000000000000000000000aa"),
                data: event.encode_log_data(),
            },
            ..Default::default()
        };

        assert_eq!(parse_upkeep_id_from_registered_log(&log).unwrap(), U256::from(7u64));
    }

    #[test]
    fn registered_id_comes_from_the_registry_itself() {
        let registry = address!("00000000000000000000000000000000000000aa");
        let log_from = |emitter: Address, id: u64| Log {
            inner: alloy::primitives::Log {
                address: emitter,
                data: KeeperRegistry::UpkeepRegistered {
                    id: U256::from(id),
                    executeGas: 500_000,
                    admin: Address::ZERO,
                }
                .encode_log_data(),
            },
            ..Default::default()
        };

        let logs = vec![
            log_from(address!("00000000000000000000000000000000000000bb"), 1),
            log_from(registry, 2),
        ];
        assert_eq!(registered_upkeep_id(registry, &logs), Some(U256::from(2u64)));
        assert_eq!(registered_upkeep_id(registry, &logs[..1]), None);
    }

    #[test]
    fn unrelated_log_is_rejected() {
        let log = Log {
            inner: alloy::primitives::Log {
                address: Address::ZERO,
                data: LogData::new_unchecked(
                    vec![b256!("5db9ee0a495bf2e6ff9c91a7834c1ba4fdd244a5e8aa4e537bd38aeae4b073aa")],
                    Bytes::from(vec![0u8; 32]),
                ),
            },
            ..Default::default()
        };

        assert!(matches!(
            parse_upkeep_id_from_registered_log(&log),
            Err(ContractError::LogDecode(_))
        ));
    }

    #[test]
    fn upkeep_is_active_until_cancelled() {
        let mut upkeep = UpkeepInfo {
            target: Address::ZERO,
            execute_gas: 100_000,
            check_data: Bytes::new(),
            balance: U256::ZERO,
            last_keeper: Address::ZERO,
            admin: Address::ZERO,
            max_valid_blocknumber: u64::MAX,
            amount_spent: U256::ZERO,
        };
        assert!(upkeep.is_active());

        upkeep.max_valid_blocknumber = 120;
        assert!(!upkeep.is_active());
    }
}
