//! End-to-end tests for the `StakingPoolLib` bindings

use crate::helpers::{spawn_anvil, ANVIL_PRIVATE_KEY};
use crate::init_logger;
use alloy::providers::Provider;

use keeper_bindings::{
    contracts::StakingPoolLibContract, deployer::ContractDeployer, rpc::EthereumClient,
};

#[tokio::test]
async fn test_library_deploys_with_code() {
    init_logger();

    let (mut anvil_process, rpc_url) = spawn_anvil();
    let client = EthereumClient::with_signer(&rpc_url, ANVIL_PRIVATE_KEY)
        .await
        .unwrap();
    let deployer = ContractDeployer::new(client.clone()).unwrap();

    let library = deployer.deploy_staking_pool_lib().await.unwrap();
    let code = client.provider.get_code_at(library).await.unwrap();
    assert!(!code.is_empty());

    // A library emits nothing on its own.
    let pool = StakingPoolLibContract::new(library, &client);
    assert!(pool.events(0).await.unwrap().is_empty());

    anvil_process.kill().expect("Failed to kill Anvil process");
}
