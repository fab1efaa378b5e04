//! Domain wrappers over the generated bindings
//!
//! Each wrapper owns a contract address and a shared provider, and turns the
//! raw call returns into plain serialisable structs.

pub mod aggregator_facade;
pub mod keeper_registry;
pub mod keeper_registry_base;
pub mod staking_pool_lib;

use alloy::rpc::types::TransactionReceipt;

use crate::error::ContractError;

pub use aggregator_facade::{AggregatorFacadeContract, FeedData, RoundData};
pub use keeper_registry::{
    CheckUpkeepResult, KeeperInfo, KeeperRegistryContract, KeeperRegistrySettings, RegistryState,
    UpkeepInfo,
};
pub use keeper_registry_base::{KeeperRegistryBaseContract, PaymentKind, RegistryFeeds};
pub use staking_pool_lib::{StakingPoolEvent, StakingPoolLibContract};

/// Reject receipts of transactions that were mined but reverted
pub(crate) fn ensure_success(receipt: TransactionReceipt) -> Result<TransactionReceipt, ContractError> {
    if receipt.status() {
        Ok(receipt)
    } else {
        Err(ContractError::TransactionFailed(receipt.transaction_hash))
    }
}
