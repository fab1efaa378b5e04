//! Generated contract bindings
//!
//! Each module embeds the contract's JSON ABI and, where the contract is
//! deployable, its creation bytecode. Call, transaction and log plumbing is
//! produced by `alloy::sol!`; nothing here re-encodes ABI data by hand.
//! View the expanded code with `cargo expand -p keeper-bindings --lib bindings`.

#![allow(missing_docs, clippy::too_many_arguments)]

pub mod aggregator_facade;
pub mod keeper_registry;
pub mod keeper_registry_base;
pub mod staking_pool_lib;

pub use aggregator_facade::AggregatorFacade;
pub use keeper_registry::KeeperRegistry;
pub use keeper_registry_base::KeeperRegistryBase;
pub use staking_pool_lib::StakingPoolLib;
