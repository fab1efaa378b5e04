//! End-to-end tests for the `AggregatorFacade` wrapper

use crate::helpers::{spawn_anvil, ANVIL_PRIVATE_KEY};
use crate::init_logger;
use alloy::primitives::{address, aliases::U80};

use keeper_bindings::{deployer::ContractDeployer, error::ContractError, rpc::EthereumClient};

#[tokio::test]
async fn test_deployed_facade_exposes_constructor_arguments() {
    init_logger();

    let (mut anvil_process, rpc_url) = spawn_anvil();
    let client = EthereumClient::with_signer(&rpc_url, ANVIL_PRIVATE_KEY)
        .await
        .unwrap();
    let deployer = ContractDeployer::new(client).unwrap();

    let aggregator = address!("70997970C51812dc3A010C7d01b50e0d17dc79C8");
    let feed = deployer
        .deploy_aggregator_facade(aggregator, 18, "ETH / USD".to_string())
        .await
        .unwrap();

    assert_eq!(feed.aggregator().await.unwrap(), aggregator);
    assert_eq!(feed.decimals().await.unwrap(), 18);
    assert_eq!(feed.description().await.unwrap(), "ETH / USD");

    // No new rounds without a live aggregator behind the facade.
    assert!(feed.answer_updated_events(0).await.unwrap().is_empty());
    assert!(feed.new_round_events(0).await.unwrap().is_empty());

    // Round reads are forwarded to the aggregator, which here has no code.
    assert!(feed.latest_round_data().await.is_err());
    assert!(feed.round_data(U80::from(1u64)).await.is_err());
    assert!(feed.contract_data().await.is_err());

    anvil_process.kill().expect("Failed to kill Anvil process");
}

#[tokio::test]
async fn test_read_only_client_cannot_deploy() {
    init_logger();

    let (mut anvil_process, rpc_url) = spawn_anvil();
    let client = EthereumClient::new(&rpc_url).await.unwrap();

    assert!(matches!(
        ContractDeployer::new(client),
        Err(ContractError::MissingSigner(_))
    ));

    anvil_process.kill().expect("Failed to kill Anvil process");
}
