use alloy::primitives::{Address, U256};
use serde::Serialize;

use crate::artifacts::SelectorEntry;

/// Body of `POST /api/v1/health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub latest_block: u64,
    pub timestamp: u64,
}

/// Body of `GET /api/v1/abi/{contract}`
#[derive(Debug, Serialize)]
pub struct AbiResponse {
    pub contract: &'static str,
    /// False for abstract contracts that cannot be deployed
    pub deployable: bool,
    pub entries: Vec<SelectorEntry>,
}

/// Immutable description of a feed, cached per feed address
#[derive(Debug, Clone, Serialize)]
pub struct FeedMetadata {
    pub address: Address,
    pub description: String,
    pub decimals: u8,
    pub version: U256,
}
