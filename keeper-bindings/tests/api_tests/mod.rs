//! Integration tests for the API endpoints

use actix_web::{http::StatusCode, test, web, App};
use alloy::primitives::{address, Address, Bytes};
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

use keeper_bindings::{
    api::{self, AppState},
    deployer::{ContractDeployer, KeeperRegistryOpts},
    rpc::EthereumClient,
};

mod helpers;
use helpers::{spawn_anvil, ANVIL_PRIVATE_KEY};

#[actix_web::test]
async fn test_health_check() {
    // Spawn an Anvil process.
    let (mut anvil_process, rpc_url) = spawn_anvil();

    let client = EthereumClient::new(&rpc_url).await.unwrap();
    let state = Arc::new(AppState::new(client));

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(api::configure),
    )
    .await;

    // Make request to the health check endpoint.
    let req = test::TestRequest::post().uri("/api/v1/health").to_request();
    let resp = test::call_service(&app, req).await;

    // Verify a successful response.
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let response: serde_json::Value =
        serde_json::from_slice(&body).expect("Failed to parse JSON response");

    // Check that the response has the expected fields.
    assert_eq!(response["status"], "ok");
    assert!(response.get("latest_block").is_some());
    assert!(response.get("timestamp").is_some());

    // Clean up: kill the Anvil process.
    anvil_process.kill().expect("Failed to kill Anvil process");
}

#[actix_web::test]
async fn test_health_check_reports_unreachable_node() {
    let (mut anvil_process, rpc_url) = spawn_anvil();
    let client = EthereumClient::new(&rpc_url).await.unwrap();

    anvil_process.kill().expect("Failed to kill Anvil process");
    anvil_process.wait().expect("Anvil did not exit");

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(Arc::new(AppState::new(client))))
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::post().uri("/api/v1/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let body = test::read_body(resp).await;
    let response: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(response["error_code"], "RPC_CONNECTION_ERROR");
    let message = response["error"].as_str().unwrap();
    assert_eq!(message.matches("RPC connection error").count(), 1, "{message}");
}

#[actix_web::test]
async fn test_unconfigured_contracts_are_unavailable() {
    let (mut anvil_process, rpc_url) = spawn_anvil();

    let client = EthereumClient::new(&rpc_url).await.unwrap();
    let app = test::init_service(
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(Arc::new(AppState::new(client))))
            .configure(api::configure),
    )
    .await;

    for uri in [
        "/api/v1/feed/latest",
        "/api/v1/feed/metadata",
        "/api/v1/registry/state",
        "/api/v1/registry/upkeeps/1",
        "/api/v1/registry/v2/feeds",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE, "{uri}");

        let body = test::read_body(resp).await;
        let response: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(response["error_code"], "NOT_CONFIGURED");
    }

    anvil_process.kill().expect("Failed to kill Anvil process");
}

#[actix_web::test]
async fn test_feed_routes_serve_deployed_facade() {
    let (mut anvil_process, rpc_url) = spawn_anvil();

    let client = EthereumClient::with_signer(&rpc_url, ANVIL_PRIVATE_KEY)
        .await
        .unwrap();
    let deployer = ContractDeployer::new(client.clone()).unwrap();
    let feed = deployer
        .deploy_aggregator_facade(
            address!("70997970C51812dc3A010C7d01b50e0d17dc79C8"),
            8,
            "LINK / USD".to_string(),
        )
        .await
        .unwrap();

    let mut state = AppState::new(client);
    state.feed = Some(feed);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(Arc::new(state)))
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/feed/metadata").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let first = test::read_body(resp).await;
    let response: serde_json::Value = serde_json::from_slice(&first).unwrap();
    assert_eq!(response["description"], "LINK / USD");
    assert_eq!(response["decimals"], 8);

    // With the node gone, metadata can only come from the cache.
    anvil_process.kill().expect("Failed to kill Anvil process");
    anvil_process.wait().expect("Anvil did not exit");

    let req = test::TestRequest::get().uri("/api/v1/feed/metadata").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, first);

    let req = test::TestRequest::get()
        .uri("/api/v1/feed/rounds/not-a-round")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Round data is never cached.
    let req = test::TestRequest::get().uri("/api/v1/feed/latest").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}

#[actix_web::test]
async fn test_registry_routes_serve_deployed_registry() {
    let (mut anvil_process, rpc_url) = spawn_anvil();

    let client = EthereumClient::with_signer(&rpc_url, ANVIL_PRIVATE_KEY)
        .await
        .unwrap();
    let deployer = ContractDeployer::new(client.clone()).unwrap();
    let registry = deployer
        .deploy_keeper_registry(&KeeperRegistryOpts::default())
        .await
        .unwrap();
    let target = deployer
        .deploy_aggregator_facade(Address::ZERO, 8, "upkeep target".to_string())
        .await
        .unwrap()
        .address();
    let id = registry
        .register_upkeep(target, 500_000, client.default_sender.unwrap(), Bytes::new())
        .await
        .unwrap();

    let mut state = AppState::new(client);
    state.registry = Some(registry);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(Arc::new(state)))
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/registry/state").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let response: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(response["nonce"], 1);
    assert_eq!(response["config"]["paymentPremiumPpb"], 200_000_000);
    assert_eq!(response["keepers"].as_array().map(Vec::len), Some(0));

    // Decimal and hex ids name the same upkeep.
    let mut bodies = Vec::new();
    for uri in [
        format!("/api/v1/registry/upkeeps/{id}"),
        format!("/api/v1/registry/upkeeps/0x{id:x}"),
    ] {
        let req = test::TestRequest::get().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
        bodies.push(test::read_body(resp).await);
    }
    assert_eq!(bodies[0], bodies[1]);
    let upkeep: serde_json::Value = serde_json::from_slice(&bodies[0]).unwrap();
    assert_eq!(upkeep["target"], serde_json::to_value(target).unwrap());
    assert_eq!(upkeep["executeGas"], 500_000);

    for uri in ["/api/v1/registry/upkeeps/0xnothex", "/api/v1/registry/upkeeps/0x"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
    }

    anvil_process.kill().expect("Failed to kill Anvil process");
}

#[actix_web::test]
async fn test_abi_catalogue() {
    let app = test::init_service(App::new().configure(api::configure)).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/abi/keeper_registry_base")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let response: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(response["contract"], "KeeperRegistryBase");
    assert_eq!(response["deployable"], false);
    let entries = response["entries"].as_array().unwrap();
    assert!(entries
        .iter()
        .any(|e| e["signature"] == "PAYMENT_MODEL()" && e["kind"] == "function"));

    let req = test::TestRequest::get().uri("/api/v1/abi/LinkToken").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
