use std::sync::Arc;

use alloy::{
    network::Ethereum,
    primitives::{aliases::U80, Address, I256, U256},
    providers::Provider,
    rpc::types::Log,
};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::{bindings::AggregatorFacade, error::ContractError, rpc::EthereumClient};

/// One round of a price feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundData {
    pub round_id: U256,
    pub answer: I256,
    pub started_at: U256,
    pub updated_at: U256,
    pub answered_in_round: U256,
}

impl From<AggregatorFacade::latestRoundDataReturn> for RoundData {
    fn from(round: AggregatorFacade::latestRoundDataReturn) -> Self {
        Self {
            round_id: U256::from(round.roundId),
            answer: round.answer,
            started_at: round.startedAt,
            updated_at: round.updatedAt,
            answered_in_round: U256::from(round.answeredInRound),
        }
    }
}

impl From<AggregatorFacade::getRoundDataReturn> for RoundData {
    fn from(round: AggregatorFacade::getRoundDataReturn) -> Self {
        Self {
            round_id: U256::from(round.roundId),
            answer: round.answer,
            started_at: round.startedAt,
            updated_at: round.updatedAt,
            answered_in_round: U256::from(round.answeredInRound),
        }
    }
}

/// Static description of a feed plus its latest round
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedData {
    pub description: String,
    pub decimals: u8,
    pub version: U256,
    pub latest_round: RoundData,
}

/// Handle on a deployed `AggregatorFacade`
#[derive(Clone)]
pub struct AggregatorFacadeContract {
    address: Address,
    provider: Arc<dyn Provider<Ethereum>>,
}

impl AggregatorFacadeContract {
    pub fn new(address: Address, client: &EthereumClient) -> Self {
        Self {
            address,
            provider: client.provider.clone(),
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Address of the underlying FluxAggregator
    pub async fn aggregator(&self) -> Result<Address, ContractError> {
        let feed = AggregatorFacade::new(self.address, &self.provider);
        Ok(feed.aggregator().call().await?._0)
    }

    pub async fn decimals(&self) -> Result<u8, ContractError> {
        let feed = AggregatorFacade::new(self.address, &self.provider);
        Ok(feed.decimals().call().await?._0)
    }

    pub async fn description(&self) -> Result<String, ContractError> {
        let feed = AggregatorFacade::new(self.address, &self.provider);
        Ok(feed.description().call().await?._0)
    }

    pub async fn version(&self) -> Result<U256, ContractError> {
        let feed = AggregatorFacade::new(self.address, &self.provider);
        Ok(feed.version().call().await?._0)
    }

    pub async fn latest_answer(&self) -> Result<I256, ContractError> {
        let feed = AggregatorFacade::new(self.address, &self.provider);
        Ok(feed.latestAnswer().call().await?._0)
    }

    pub async fn latest_round(&self) -> Result<U256, ContractError> {
        let feed = AggregatorFacade::new(self.address, &self.provider);
        Ok(feed.latestRound().call().await?._0)
    }

    pub async fn latest_timestamp(&self) -> Result<U256, ContractError> {
        let feed = AggregatorFacade::new(self.address, &self.provider);
        Ok(feed.latestTimestamp().call().await?._0)
    }

    /// Answer recorded for a past round
    pub async fn answer(&self, round_id: U256) -> Result<I256, ContractError> {
        let feed = AggregatorFacade::new(self.address, &self.provider);
        Ok(feed.getAnswer(round_id).call().await?._0)
    }

    /// Timestamp at which a past round was answered
    pub async fn timestamp(&self, round_id: U256) -> Result<U256, ContractError> {
        let feed = AggregatorFacade::new(self.address, &self.provider);
        Ok(feed.getTimestamp(round_id).call().await?._0)
    }

    #[instrument(skip(self), fields(feed = %self.address), err)]
    pub async fn latest_round_data(&self) -> Result<RoundData, ContractError> {
        let feed = AggregatorFacade::new(self.address, &self.provider);
        let round = feed.latestRoundData().call().await?;
        debug!(round_id = %round.roundId, answer = %round.answer, "Fetched latest round");
        Ok(round.into())
    }

    #[instrument(skip(self), fields(feed = %self.address), err)]
    pub async fn round_data(&self, round_id: U80) -> Result<RoundData, ContractError> {
        let feed = AggregatorFacade::new(self.address, &self.provider);
        let round = feed.getRoundData(round_id).call().await?;
        Ok(round.into())
    }

    /// Everything the feed exposes about itself in one round trip per field
    pub async fn contract_data(&self) -> Result<FeedData, ContractError> {
        Ok(FeedData {
            description: self.description().await?,
            decimals: self.decimals().await?,
            version: self.version().await?,
            latest_round: self.latest_round_data().await?,
        })
    }

    /// `AnswerUpdated` logs emitted since `from_block`
    pub async fn answer_updated_events(
        &self,
        from_block: u64,
    ) -> Result<Vec<(AggregatorFacade::AnswerUpdated, Log)>, ContractError> {
        let feed = AggregatorFacade::new(self.address, &self.provider);
        let events = feed.AnswerUpdated_filter().from_block(from_block).query().await?;
        debug!(count = events.len(), from_block, "Queried AnswerUpdated logs");
        Ok(events)
    }

    /// `NewRound` logs emitted since `from_block`
    pub async fn new_round_events(
        &self,
        from_block: u64,
    ) -> Result<Vec<(AggregatorFacade::NewRound, Log)>, ContractError> {
        let feed = AggregatorFacade::new(self.address, &self.provider);
        Ok(feed.NewRound_filter().from_block(from_block).query().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_data_widens_uint80_fields() {
        let round = AggregatorFacade::latestRoundDataReturn {
            roundId: U80::from(42u64),
            answer: I256::try_from(-5i64).unwrap(),
            startedAt: U256::from(1_000u64),
            updatedAt: U256::from(1_010u64),
            answeredInRound: U80::from(41u64),
        };

        let data = RoundData::from(round);
        assert_eq!(data.round_id, U256::from(42u64));
        assert_eq!(data.answered_in_round, U256::from(41u64));
        assert!(data.answer.is_negative());
    }

    #[test]
    fn round_data_serializes_with_camel_case_keys() {
        let data = RoundData {
            round_id: U256::from(1u64),
            answer: I256::ZERO,
            started_at: U256::ZERO,
            updated_at: U256::ZERO,
            answered_in_round: U256::from(1u64),
        };

        let json = serde_json::to_value(&data).unwrap();
        assert!(json.get("roundId").is_some());
        assert!(json.get("answeredInRound").is_some());
        assert!(json.get("round_id").is_none());
    }
}
