use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use keeper_bindings::{api, api::AppState, config, rpc};
use tracing::info;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

/// Application entry point
///
/// This is the main function that:
/// 1. Sets up logging
/// 2. Loads configuration
/// 3. Establishes connection to Ethereum node, with a signer when one is configured
/// 4. Binds the configured contracts
/// 5. Starts the HTTP server with all endpoints
#[actix_web::main] // Actix will build a multithreaded runtime
async fn main() -> eyre::Result<()> {
    // Configure logging with appropriate log levels for different components
    let filter = EnvFilter::from_default_env()
        .add_directive("keeper_bindings=info".parse()?)
        .add_directive("actix_web=error".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("reqwest=warn".parse()?);

    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = config::Config::from_env()?;

    let eth_client = match &config.private_key {
        Some(key) => rpc::EthereumClient::with_signer(&config.ethereum_rpc_url, key).await?,
        None => rpc::EthereumClient::new(&config.ethereum_rpc_url).await?,
    };

    let state = Arc::new(AppState::from_config(eth_client, &config));
    info!(
        feed = ?config.aggregator_facade_address,
        registry = ?config.keeper_registry_address,
        registry_v2 = ?config.keeper_registry_base_address,
        "Contracts bound"
    );

    HttpServer::new(move || {
        App::new()
            // Add logging middleware
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(api::configure)
    })
    .workers(config.workers)
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
