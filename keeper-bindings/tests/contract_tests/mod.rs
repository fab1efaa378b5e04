//! Contract binding tests
//!
//! Deploys the bound contracts on a local anvil node and drives them through
//! the wrappers.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

pub mod aggregator_facade_tests;
pub mod keeper_registry_tests;
pub mod staking_pool_lib_tests;

#[path = "../api_tests/helpers.rs"]
mod helpers;

static INIT: Once = Once::new();

/// Initializes the global logger (only once).
pub fn init_logger() {
    INIT.call_once(|| {
        let filter = EnvFilter::from_default_env()
            .add_directive("keeper_bindings=info".parse().unwrap())
            .add_directive("hyper=warn".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .init();
    });
}
