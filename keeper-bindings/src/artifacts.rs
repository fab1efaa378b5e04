//! Catalogue of the bound contracts' ABIs and bytecode
//!
//! Lets callers look a contract up by its Solidity name, list its selectors and
//! check that the embedded JSON ABI still matches what `sol!` compiled.

use std::{collections::BTreeSet, fmt, str::FromStr};

use alloy::{
    json_abi::JsonAbi,
    primitives::{hex, Bytes},
};
use serde::Serialize;
use thiserror::Error;

use crate::{
    bindings::{
        aggregator_facade, keeper_registry, keeper_registry_base, staking_pool_lib,
        AggregatorFacade, KeeperRegistry, KeeperRegistryBase, StakingPoolLib,
    },
    error::ContractError,
};

/// The contracts this crate carries bindings for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ContractKind {
    AggregatorFacade,
    KeeperRegistry,
    KeeperRegistryBase,
    StakingPoolLib,
}

#[derive(Debug, Error)]
#[error("unknown contract: {0}")]
pub struct UnknownContract(pub String);

impl ContractKind {
    pub const ALL: [ContractKind; 4] = [
        ContractKind::AggregatorFacade,
        ContractKind::KeeperRegistry,
        ContractKind::KeeperRegistryBase,
        ContractKind::StakingPoolLib,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ContractKind::AggregatorFacade => "AggregatorFacade",
            ContractKind::KeeperRegistry => "KeeperRegistry",
            ContractKind::KeeperRegistryBase => "KeeperRegistryBase",
            ContractKind::StakingPoolLib => "StakingPoolLib",
        }
    }

    pub fn artifact(&self) -> ContractArtifact {
        let (abi_json, bytecode) = match self {
            ContractKind::AggregatorFacade => {
                (aggregator_facade::ABI, Some(AggregatorFacade::BYTECODE.clone()))
            }
            ContractKind::KeeperRegistry => {
                (keeper_registry::ABI, Some(KeeperRegistry::BYTECODE.clone()))
            }
            ContractKind::KeeperRegistryBase => (keeper_registry_base::ABI, None),
            ContractKind::StakingPoolLib => {
                (staking_pool_lib::ABI, Some(StakingPoolLib::BYTECODE.clone()))
            }
        };
        ContractArtifact {
            kind: *self,
            abi_json,
            bytecode,
        }
    }

    /// Selectors compiled into the binding: functions, event topics, errors
    fn compiled_selectors(&self) -> (Vec<[u8; 4]>, Vec<[u8; 32]>, Vec<[u8; 4]>) {
        match self {
            ContractKind::AggregatorFacade => (
                AggregatorFacade::AggregatorFacadeCalls::SELECTORS.to_vec(),
                AggregatorFacade::AggregatorFacadeEvents::SELECTORS.to_vec(),
                Vec::new(),
            ),
            ContractKind::KeeperRegistry => (
                KeeperRegistry::KeeperRegistryCalls::SELECTORS.to_vec(),
                KeeperRegistry::KeeperRegistryEvents::SELECTORS.to_vec(),
                KeeperRegistry::KeeperRegistryErrors::SELECTORS.to_vec(),
            ),
            ContractKind::KeeperRegistryBase => (
                KeeperRegistryBase::KeeperRegistryBaseCalls::SELECTORS.to_vec(),
                KeeperRegistryBase::KeeperRegistryBaseEvents::SELECTORS.to_vec(),
                KeeperRegistryBase::KeeperRegistryBaseErrors::SELECTORS.to_vec(),
            ),
            ContractKind::StakingPoolLib => (
                Vec::new(),
                StakingPoolLib::StakingPoolLibEvents::SELECTORS.to_vec(),
                StakingPoolLib::StakingPoolLibErrors::SELECTORS.to_vec(),
            ),
        }
    }
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContractKind {
    type Err = UnknownContract;

    /// Accepts the Solidity name in any case, with or without underscores
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.chars().filter(|c| *c != '_').collect();
        ContractKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| UnknownContract(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Function,
    Event,
    Error,
}

/// One ABI entry and its selector (4 bytes) or topic (32 bytes), hex encoded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorEntry {
    pub kind: EntryKind,
    pub signature: String,
    pub selector: String,
}

/// ABI and creation bytecode of one contract
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    pub kind: ContractKind,
    pub abi_json: &'static str,
    /// `None` for abstract contracts
    pub bytecode: Option<Bytes>,
}

impl ContractArtifact {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn parse_abi(&self) -> Result<JsonAbi, ContractError> {
        Ok(serde_json::from_str(self.abi_json)?)
    }

    pub fn bytecode(&self) -> Result<&Bytes, ContractError> {
        self.bytecode
            .as_ref()
            .ok_or(ContractError::MissingBytecode(self.kind.name()))
    }

    /// Every function, event and error of the JSON ABI, sorted by kind then signature
    pub fn selectors(&self) -> Result<Vec<SelectorEntry>, ContractError> {
        let abi = self.parse_abi()?;
        let mut entries: Vec<SelectorEntry> = abi
            .functions()
            .map(|f| SelectorEntry {
                kind: EntryKind::Function,
                signature: f.signature(),
                selector: hex::encode_prefixed(f.selector()),
            })
            .chain(abi.events().map(|e| SelectorEntry {
                kind: EntryKind::Event,
                signature: e.signature(),
                selector: hex::encode_prefixed(e.selector()),
            }))
            .chain(abi.errors().map(|e| SelectorEntry {
                kind: EntryKind::Error,
                signature: e.signature(),
                selector: hex::encode_prefixed(e.selector()),
            }))
            .collect();
        entries.sort_by(|a, b| (a.kind, &a.signature).cmp(&(b.kind, &b.signature)));
        Ok(entries)
    }

    /// Check that the JSON ABI and the compiled binding expose the same
    /// functions, events and errors
    pub fn verify(&self) -> Result<(), ContractError> {
        let abi = self.parse_abi()?;
        let (calls, events, errors) = self.kind.compiled_selectors();

        let mut entries = Vec::new();
        entries.extend(diff(
            "function",
            abi.functions().map(|f| f.selector().0.to_vec()),
            calls.iter().map(|s| s.to_vec()),
        ));
        entries.extend(diff(
            "event",
            abi.events().map(|e| e.selector().0.to_vec()),
            events.iter().map(|s| s.to_vec()),
        ));
        entries.extend(diff(
            "error",
            abi.errors().map(|e| e.selector().0.to_vec()),
            errors.iter().map(|s| s.to_vec()),
        ));

        if entries.is_empty() {
            Ok(())
        } else {
            Err(ContractError::AbiMismatch {
                contract: self.kind.name(),
                entries,
            })
        }
    }
}

/// Selectors present on only one side, labelled with where they are missing
fn diff(
    label: &str,
    json: impl Iterator<Item = Vec<u8>>,
    compiled: impl Iterator<Item = Vec<u8>>,
) -> Vec<String> {
    let json: BTreeSet<Vec<u8>> = json.collect();
    let compiled: BTreeSet<Vec<u8>> = compiled.collect();

    let unbound = json
        .difference(&compiled)
        .map(|s| format!("{label} {} has no binding", hex::encode_prefixed(s)));
    let undeclared = compiled
        .difference(&json)
        .map(|s| format!("{label} {} is not in the ABI", hex::encode_prefixed(s)));
    unbound.chain(undeclared).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_embedded_abi_parses() {
        for kind in ContractKind::ALL {
            let abi = kind.artifact().parse_abi().unwrap();
            assert!(abi.events().count() > 0, "{kind} has no events");
        }
    }

    #[test]
    fn every_abi_matches_its_binding() {
        for kind in ContractKind::ALL {
            kind.artifact().verify().unwrap();
        }
    }

    #[test]
    fn only_the_abstract_registry_lacks_bytecode() {
        for kind in ContractKind::ALL {
            let artifact = kind.artifact();
            match kind {
                ContractKind::KeeperRegistryBase => assert!(matches!(
                    artifact.bytecode(),
                    Err(ContractError::MissingBytecode("KeeperRegistryBase"))
                )),
                _ => assert!(!artifact.bytecode().unwrap().is_empty()),
            }
        }
    }

    #[test]
    fn contract_names_parse_loosely() {
        assert_eq!("KeeperRegistry".parse::<ContractKind>().unwrap(), ContractKind::KeeperRegistry);
        assert_eq!(
            "keeper_registry_base".parse::<ContractKind>().unwrap(),
            ContractKind::KeeperRegistryBase
        );
        assert_eq!("aggregatorfacade".parse::<ContractKind>().unwrap(), ContractKind::AggregatorFacade);
        assert!("LinkToken".parse::<ContractKind>().is_err());

        for kind in ContractKind::ALL {
            assert_eq!(kind.to_string().parse::<ContractKind>().unwrap(), kind);
        }
    }

    #[test]
    fn selector_catalogue_lists_documented_entries() {
        let entries = ContractKind::AggregatorFacade.artifact().selectors().unwrap();

        let latest = entries
            .iter()
            .find(|e| e.signature == "latestRoundData()")
            .unwrap();
        assert_eq!(latest.kind, EntryKind::Function);
        assert_eq!(latest.selector, "0xfeaf968c");

        let new_round = entries
            .iter()
            .find(|e| e.signature == "NewRound(uint256,address,uint256)")
            .unwrap();
        assert_eq!(new_round.kind, EntryKind::Event);
        assert_eq!(new_round.selector.len(), 66);

        assert!(entries.windows(2).all(|w| w[0].kind <= w[1].kind));
    }

    #[test]
    fn mismatches_are_reported_both_ways() {
        let entries = diff(
            "function",
            vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8]].into_iter(),
            vec![vec![5, 6, 7, 8], vec![9, 9, 9, 9]].into_iter(),
        );
        assert_eq!(
            entries,
            vec![
                "function 0x01020304 has no binding".to_string(),
                "function 0x09090909 is not in the ABI".to_string(),
            ]
        );
    }
}
