// Export modules for the service binary and the integration tests
pub mod api;
pub mod artifacts;
pub mod bindings;
pub mod config;
pub mod contracts;
pub mod deployer;
pub mod error;
pub mod models;
pub mod rpc;
