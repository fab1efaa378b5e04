//! End-to-end tests for the keeper registry wrappers

use crate::helpers::{spawn_anvil, ANVIL_PRIVATE_KEY};
use crate::init_logger;
use alloy::primitives::{address, aliases::U96, Address, Bytes, U256};

use keeper_bindings::{
    contracts::{KeeperRegistryBaseContract, KeeperRegistryContract, KeeperRegistrySettings},
    deployer::{ContractDeployer, KeeperRegistryOpts},
    error::ContractError,
    rpc::EthereumClient,
};

const KEEPER_1: Address = address!("70997970C51812dc3A010C7d01b50e0d17dc79C8");
const KEEPER_2: Address = address!("3C44CdDdB6a900fa2b585dd299e03d12FA4293BC");
const PAYEE: Address = address!("90F79bf6EB2c4f870365E785982E1f101E93b906");

fn registry_opts() -> KeeperRegistryOpts {
    KeeperRegistryOpts {
        link: address!("15d34AAf54267DB7D7c367839AAf71A00a2C6A65"),
        link_eth_feed: address!("9965507D1a55bcC2695C58ba16FB37d819B0A4dc"),
        fast_gas_feed: address!("976EA74026E726554dB657fA54763abd0C3a0aa9"),
        settings: KeeperRegistrySettings::default(),
    }
}

/// Spins up anvil and deploys a registry plus a contract to register as upkeep target
async fn setup() -> (std::process::Child, EthereumClient, KeeperRegistryContract, Address) {
    init_logger();

    let (anvil_process, rpc_url) = spawn_anvil();
    let client = EthereumClient::with_signer(&rpc_url, ANVIL_PRIVATE_KEY)
        .await
        .unwrap();
    let deployer = ContractDeployer::new(client.clone()).unwrap();

    let registry = deployer.deploy_keeper_registry(&registry_opts()).await.unwrap();
    let target = deployer
        .deploy_aggregator_facade(Address::ZERO, 8, "upkeep target".to_string())
        .await
        .unwrap()
        .address();

    (anvil_process, client, registry, target)
}

#[tokio::test]
async fn test_deployed_registry_reports_its_configuration() {
    let (mut anvil_process, client, registry, _) = setup().await;

    assert!(registry
        .type_and_version()
        .await
        .unwrap()
        .starts_with("KeeperRegistry 1.2"));
    assert_eq!(registry.owner().await.unwrap(), client.default_sender.unwrap());

    let state = registry.state().await.unwrap();
    assert_eq!(state.nonce, 0);
    assert_eq!(state.num_upkeeps, U256::ZERO);
    assert_eq!(state.config, KeeperRegistrySettings::default());
    assert!(state.keepers.is_empty());

    // The constructor applies the config through setConfig.
    assert_eq!(registry.config_set_events(0).await.unwrap().len(), 1);

    let settings = KeeperRegistrySettings {
        check_gas_limit: 3_000_000,
        ..Default::default()
    };
    registry.set_config(&settings).await.unwrap();
    assert_eq!(registry.state().await.unwrap().config.check_gas_limit, 3_000_000);
    assert_eq!(registry.config_set_events(0).await.unwrap().len(), 2);

    let registrar = address!("a0Ee7A142d267C1f36714E4a8F75612F20a79720");
    registry.set_registrar(registrar).await.unwrap();
    let config = registry.state().await.unwrap().config;
    assert_eq!(config.registrar, registrar);
    assert_eq!(config.check_gas_limit, 3_000_000);

    anvil_process.kill().expect("Failed to kill Anvil process");
}

#[tokio::test]
async fn test_upkeep_lifecycle() {
    let (mut anvil_process, client, registry, target) = setup().await;
    let admin = client.default_sender.unwrap();

    let id = registry
        .register_upkeep(target, 500_000, admin, Bytes::from_static(b"check"))
        .await
        .unwrap();

    let upkeep = registry.upkeep_info(id).await.unwrap();
    assert_eq!(upkeep.target, target);
    assert_eq!(upkeep.execute_gas, 500_000);
    assert_eq!(upkeep.admin, admin);
    assert_eq!(upkeep.check_data, Bytes::from_static(b"check"));
    assert_eq!(upkeep.balance, U256::ZERO);
    assert!(upkeep.is_active());

    assert_eq!(registry.state().await.unwrap().nonce, 1);
    assert_eq!(
        registry.active_upkeep_ids(U256::ZERO, U256::ZERO).await.unwrap(),
        vec![id]
    );
    let registered = registry.upkeep_registered_events(0).await.unwrap();
    assert_eq!(registered.len(), 1);
    assert_eq!(registered[0].0.id, id);

    registry.set_upkeep_gas_limit(id, 750_000).await.unwrap();
    assert_eq!(registry.upkeep_info(id).await.unwrap().execute_gas, 750_000);

    registry.cancel_upkeep(id).await.unwrap();
    assert!(!registry.upkeep_info(id).await.unwrap().is_active());

    // Nothing was performed on this registry.
    assert!(registry.upkeep_performed_events(0).await.unwrap().is_empty());

    anvil_process.kill().expect("Failed to kill Anvil process");
}

#[tokio::test]
async fn test_payment_views_read_the_price_feeds() {
    let (mut anvil_process, client, registry, target) = setup().await;
    let admin = client.default_sender.unwrap();
    let id = registry
        .register_upkeep(target, 500_000, admin, Bytes::new())
        .await
        .unwrap();

    // The simulated check passes the origin guard and then needs the feeds.
    if let Err(err) = registry.check_upkeep(id, KEEPER_1).await {
        assert!(
            !matches!(&err, ContractError::Reverted { reason, .. } if reason.contains("OnlySimulatedBackend")),
            "check ran from a non-zero origin: {err:?}"
        );
    }

    // Both feeds are plain accounts, so pricing reads fail.
    assert!(registry.min_balance_for_upkeep(id).await.is_err());
    assert!(registry.max_payment_for_gas(U256::from(500_000u64)).await.is_err());

    // So does funding, since LINK has no code to transfer from.
    assert!(registry.add_funds(id, U96::from(1u64)).await.is_err());
    assert_eq!(registry.upkeep_info(id).await.unwrap().balance, U256::ZERO);

    anvil_process.kill().expect("Failed to kill Anvil process");
}

#[tokio::test]
async fn test_custom_errors_are_decoded() {
    let (mut anvil_process, client, registry, target) = setup().await;
    let admin = client.default_sender.unwrap();

    // Upkeep targets must be contracts.
    let err = registry
        .register_upkeep(KEEPER_1, 500_000, admin, Bytes::new())
        .await
        .unwrap_err();
    assert!(
        matches!(&err, ContractError::Reverted { contract: "KeeperRegistry", reason } if reason.contains("NotAContract")),
        "unexpected error: {err:?}"
    );

    // Gas limits above maxPerformGas are rejected.
    let err = registry
        .register_upkeep(target, 10_000_000, admin, Bytes::new())
        .await
        .unwrap_err();
    assert!(
        matches!(&err, ContractError::Reverted { reason, .. } if reason.contains("GasLimitOutsideRange")),
        "unexpected error: {err:?}"
    );

    let err = registry
        .set_keepers(vec![KEEPER_1, KEEPER_2], vec![PAYEE])
        .await
        .unwrap_err();
    assert!(
        matches!(&err, ContractError::Reverted { reason, .. } if reason.contains("ParameterLengthError")),
        "unexpected error: {err:?}"
    );

    anvil_process.kill().expect("Failed to kill Anvil process");
}

#[tokio::test]
async fn test_keepers_and_pausing() {
    let (mut anvil_process, client, registry, _) = setup().await;

    registry
        .set_keepers(vec![KEEPER_1, KEEPER_2], vec![PAYEE, PAYEE])
        .await
        .unwrap();
    assert_eq!(registry.state().await.unwrap().keepers, vec![KEEPER_1, KEEPER_2]);

    let info = registry.keeper_info(KEEPER_1).await.unwrap();
    assert!(info.active);
    assert_eq!(info.payee, PAYEE);
    assert_eq!(info.balance, U256::ZERO);

    assert!(!registry.paused().await.unwrap());
    registry.pause().await.unwrap();
    assert!(registry.paused().await.unwrap());

    // owner() and paused() share their selectors with the 2.0 base contract.
    let base = KeeperRegistryBaseContract::new(registry.address(), &client);
    assert!(base.paused().await.unwrap());
    assert_eq!(base.owner().await.unwrap(), client.default_sender.unwrap());
    assert!(base.payment_model().await.is_err());

    registry.unpause().await.unwrap();
    assert!(!registry.paused().await.unwrap());

    anvil_process.kill().expect("Failed to kill Anvil process");
}
