use alloy::primitives::Address;
use eyre::Result;
use serde::Deserialize;

/// Service configuration structure
///
/// Values come from (lowest to highest precedence) the built-in defaults, an
/// optional `keeper-bindings.toml` next to the binary, and environment
/// variables. A `.env` file is loaded first when present.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Host address to bind the server to (default: 127.0.0.1)
    pub host: String,

    /// Port to listen on (default: 8080)
    pub port: u16,

    /// Number of HTTP worker threads (default: 4)
    pub workers: usize,

    /// Ethereum RPC endpoint URL for communicating with the blockchain
    pub ethereum_rpc_url: String,

    /// Key used to sign transactions; the client is read-only without it
    #[serde(default)]
    pub private_key: Option<String>,

    /// Deployed `AggregatorFacade` served by the feed routes
    #[serde(default)]
    pub aggregator_facade_address: Option<Address>,

    /// Deployed keeper registry 1.2 served by the registry routes
    #[serde(default)]
    pub keeper_registry_address: Option<Address>,

    /// Deployed keeper registry 2.0
    #[serde(default)]
    pub keeper_registry_base_address: Option<Address>,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// # Environment Variables
    ///
    /// * `HOST` - Server host address (default: "127.0.0.1")
    /// * `PORT` - Server port (default: 8080)
    /// * `WORKERS` - HTTP worker threads (default: 4)
    /// * `ETHEREUM_RPC_URL` - Ethereum RPC URL (default: "http://localhost:8545")
    /// * `PRIVATE_KEY` - optional signing key
    /// * `AGGREGATOR_FACADE_ADDRESS`, `KEEPER_REGISTRY_ADDRESS`,
    ///   `KEEPER_REGISTRY_BASE_ADDRESS` - optional contract addresses
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (useful for development)
        let _ = dotenv::dotenv();

        let settings = Self::builder()?
            .add_source(config::File::with_name("keeper-bindings").required(false))
            .add_source(config::Environment::default().try_parsing(true))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        Ok(config::Config::builder()
            .set_default("host", "127.0.0.1")?
            .set_default("port", 8080)?
            .set_default("workers", 4)?
            .set_default("ethereum_rpc_url", "http://localhost:8545")?)
    }
}
