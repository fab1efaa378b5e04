use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse};
use alloy::primitives::Address;
use moka::future::Cache;
use tracing::{debug, error, info};

use crate::{
    artifacts::ContractKind,
    config::Config,
    contracts::{AggregatorFacadeContract, KeeperRegistryBaseContract, KeeperRegistryContract},
    error::ServiceError,
    models::{
        params::{parse_round_id, parse_u256},
        responses::{AbiResponse, FeedMetadata, HealthResponse},
    },
    rpc::EthereumClient,
};

/// Shared state behind every route
pub struct AppState {
    pub eth_client: EthereumClient,
    pub feed: Option<AggregatorFacadeContract>,
    pub registry: Option<KeeperRegistryContract>,
    pub registry_base: Option<KeeperRegistryBaseContract>,
    /// Description, decimals and version never change for a deployed feed
    metadata_cache: Cache<Address, FeedMetadata>,
}

impl AppState {
    pub fn new(eth_client: EthereumClient) -> Self {
        Self {
            eth_client,
            feed: None,
            registry: None,
            registry_base: None,
            metadata_cache: Cache::new(64),
        }
    }

    /// Bind every contract whose address is configured
    pub fn from_config(eth_client: EthereumClient, config: &Config) -> Self {
        let mut state = Self::new(eth_client);
        state.feed = config
            .aggregator_facade_address
            .map(|address| AggregatorFacadeContract::new(address, &state.eth_client));
        state.registry = config
            .keeper_registry_address
            .map(|address| KeeperRegistryContract::new(address, &state.eth_client));
        state.registry_base = config
            .keeper_registry_base_address
            .map(|address| KeeperRegistryBaseContract::new(address, &state.eth_client));
        state
    }

    fn feed(&self) -> Result<&AggregatorFacadeContract, ServiceError> {
        self.feed.as_ref().ok_or(ServiceError::NotConfigured("AggregatorFacade"))
    }

    fn registry(&self) -> Result<&KeeperRegistryContract, ServiceError> {
        self.registry.as_ref().ok_or(ServiceError::NotConfigured("KeeperRegistry"))
    }

    fn registry_base(&self) -> Result<&KeeperRegistryBaseContract, ServiceError> {
        self.registry_base
            .as_ref()
            .ok_or(ServiceError::NotConfigured("KeeperRegistryBase"))
    }
}

/// Service health check endpoint that verifies RPC connection is working
#[post("/api/v1/health")]
async fn health_check(state: web::Data<Arc<AppState>>) -> Result<HttpResponse, ServiceError> {
    info!("Health check requested");

    match state.eth_client.get_latest_block().await {
        Ok(block) => Ok(HttpResponse::Ok().json(HealthResponse {
            status: "ok",
            latest_block: block.header.number,
            timestamp: block.header.timestamp,
        })),
        Err(e) => {
            error!("Health check failed: {:?}", e);
            Err(ServiceError::RPCConnectionError(e.to_string()))
        }
    }
}

#[get("/api/v1/feed/latest")]
async fn latest_round(state: web::Data<Arc<AppState>>) -> Result<HttpResponse, ServiceError> {
    let latest = state.feed()?.latest_round_data().await?;
    Ok(HttpResponse::Ok().json(latest))
}

#[get("/api/v1/feed/rounds/{round_id}")]
async fn round(
    state: web::Data<Arc<AppState>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let feed = state.feed()?;
    let round_id = parse_round_id(&path).map_err(ServiceError::InvalidParameter)?;
    debug!(%round_id, "Round requested");
    let round = feed.round_data(round_id).await?;
    Ok(HttpResponse::Ok().json(round))
}

#[get("/api/v1/feed/metadata")]
async fn feed_metadata(state: web::Data<Arc<AppState>>) -> Result<HttpResponse, ServiceError> {
    let feed = state.feed()?.clone();
    let metadata = state
        .metadata_cache
        .try_get_with(feed.address(), async move {
            debug!(feed = %feed.address(), "Feed metadata cache miss");
            Ok::<_, crate::error::ContractError>(FeedMetadata {
                address: feed.address(),
                description: feed.description().await?,
                decimals: feed.decimals().await?,
                version: feed.version().await?,
            })
        })
        .await
        .map_err(|e| ServiceError::ContractCallError(e.to_string()))?;
    Ok(HttpResponse::Ok().json(metadata))
}

#[get("/api/v1/registry/state")]
async fn registry_state(state: web::Data<Arc<AppState>>) -> Result<HttpResponse, ServiceError> {
    let registry_state = state.registry()?.state().await?;
    Ok(HttpResponse::Ok().json(registry_state))
}

#[get("/api/v1/registry/upkeeps/{id}")]
async fn upkeep(
    state: web::Data<Arc<AppState>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let registry = state.registry()?;
    let id = parse_u256(&path).map_err(ServiceError::InvalidParameter)?;
    let upkeep = registry.upkeep_info(id).await?;
    Ok(HttpResponse::Ok().json(upkeep))
}

#[get("/api/v1/registry/v2/feeds")]
async fn registry_v2_feeds(state: web::Data<Arc<AppState>>) -> Result<HttpResponse, ServiceError> {
    let feeds = state.registry_base()?.feeds().await?;
    Ok(HttpResponse::Ok().json(feeds))
}

#[get("/api/v1/abi/{contract}")]
async fn abi(path: web::Path<String>) -> Result<HttpResponse, ServiceError> {
    let kind: ContractKind = path
        .parse()
        .map_err(|_| ServiceError::UnknownContract(path.into_inner()))?;
    let artifact = kind.artifact();
    Ok(HttpResponse::Ok().json(AbiResponse {
        contract: artifact.name(),
        deployable: artifact.bytecode.is_some(),
        entries: artifact.selectors()?,
    }))
}

/// Configure the API routes for the service
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(latest_round)
        .service(round)
        .service(feed_metadata)
        .service(registry_state)
        .service(upkeep)
        .service(registry_v2_feeds)
        .service(abi);
}
