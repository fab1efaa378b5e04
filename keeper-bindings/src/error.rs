use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use alloy::{
    primitives::{Bytes, TxHash},
    providers::PendingTransactionError,
    sol_types::SolInterface,
};
use serde::Serialize;
use thiserror::Error;

/// Errors raised while talking to one of the bound contracts
///
/// Chain-client failures are carried unchanged. The only interpretation added on
/// top is decoding revert data into the contract's own custom errors.
#[derive(Error, Debug)]
pub enum ContractError {
    /// Error connecting to the Ethereum RPC node
    #[error("RPC connection error: {0}")]
    RpcConnection(String),

    /// A call or transaction failed inside the chain client
    #[error("contract call failed: {0}")]
    Contract(#[from] alloy::contract::Error),

    /// Waiting for a transaction receipt failed
    #[error("pending transaction failed: {0}")]
    PendingTransaction(#[from] PendingTransactionError),

    /// The contract reverted with one of its declared custom errors
    #[error("{contract} reverted: {reason}")]
    Reverted {
        contract: &'static str,
        reason: String,
    },

    /// A call returned a value outside the range its ABI type declares
    #[error("{contract} returned an undecodable value: {reason}")]
    InvalidReturn {
        contract: &'static str,
        reason: String,
    },

    /// A transaction was requested through a client without a signer
    #[error("{0} requires a client with a signer")]
    MissingSigner(&'static str),

    /// The transaction was mined but its receipt reports failure
    #[error("transaction {0} was mined with a failed status")]
    TransactionFailed(TxHash),

    /// A receipt did not contain the log an operation depends on
    #[error("no {event} log in receipt of transaction {tx_hash}")]
    MissingEvent { event: &'static str, tx_hash: TxHash },

    /// A log could not be decoded as the requested event
    #[error("failed to decode log: {0}")]
    LogDecode(#[from] alloy::sol_types::Error),

    /// An embedded ABI document is not valid JSON ABI
    #[error("invalid ABI: {0}")]
    InvalidAbi(#[from] serde_json::Error),

    /// The JSON ABI and the compiled binding disagree on these entries
    #[error("{contract} ABI and binding disagree on {entries:?}")]
    AbiMismatch {
        contract: &'static str,
        entries: Vec<String>,
    },

    /// The contract is abstract and ships no creation bytecode
    #[error("{0} has no creation bytecode")]
    MissingBytecode(&'static str),
}

impl ContractError {
    /// Wrap a chain-client error, decoding revert data with the contract's
    /// custom error set `E` when possible.
    pub fn from_call<E: SolInterface + std::fmt::Debug>(
        contract: &'static str,
        err: alloy::contract::Error,
    ) -> Self {
        match revert_data(&err).and_then(|data| E::abi_decode(&data, true).ok()) {
            Some(decoded) => ContractError::Reverted {
                contract,
                reason: format!("{decoded:?}"),
            },
            None => ContractError::Contract(err),
        }
    }
}

/// Extract raw revert data from a failed call, if the node returned any.
pub fn revert_data(err: &alloy::contract::Error) -> Option<Bytes> {
    match err {
        alloy::contract::Error::TransportError(e) => {
            e.as_error_resp().and_then(|payload| payload.as_revert_data())
        }
        _ => None,
    }
}

/// Service-specific error types
///
/// Errors surfaced by the HTTP gateway. Each variant maps to a status code and a
/// machine-readable error code.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Error connecting to Ethereum RPC node
    #[error("RPC connection error: {0}")]
    RPCConnectionError(String),

    /// A contract call made on behalf of the request failed
    #[error("Contract call failed: {0}")]
    ContractCallError(String),

    /// A path or query parameter could not be parsed
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The gateway was started without the contract address the route needs
    #[error("{0} address is not configured")]
    NotConfigured(&'static str),

    /// No binding exists for the requested contract name
    #[error("Unknown contract: {0}")]
    UnknownContract(String),
}

impl From<ContractError> for ServiceError {
    fn from(err: ContractError) -> Self {
        match err {
            ContractError::RpcConnection(details) => ServiceError::RPCConnectionError(details),
            other => ServiceError::ContractCallError(other.to_string()),
        }
    }
}

/// Structured error response for the API
#[derive(Serialize)]
struct ErrorResponse {
    /// Human-readable error message
    error: String,

    /// Machine-readable error code
    error_code: String,

    /// Optional detailed error information
    details: Option<String>,
}

impl ServiceError {
    fn error_code(&self) -> &'static str {
        match self {
            ServiceError::RPCConnectionError(_) => "RPC_CONNECTION_ERROR",
            ServiceError::ContractCallError(_) => "CONTRACT_CALL_ERROR",
            ServiceError::InvalidParameter(_) => "INVALID_PARAMETER",
            ServiceError::NotConfigured(_) => "NOT_CONFIGURED",
            ServiceError::UnknownContract(_) => "UNKNOWN_CONTRACT",
        }
    }

    fn details(&self) -> Option<String> {
        match self {
            ServiceError::RPCConnectionError(details)
            | ServiceError::ContractCallError(details)
            | ServiceError::InvalidParameter(details)
            | ServiceError::UnknownContract(details) => Some(details.clone()),
            ServiceError::NotConfigured(_) => None,
        }
    }
}

impl ResponseError for ServiceError {
    /// Convert the error to an HTTP response with a JSON error body.
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            error_code: self.error_code().to_string(),
            details: self.details(),
        })
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            ServiceError::RPCConnectionError(_) => StatusCode::BAD_GATEWAY,
            ServiceError::ContractCallError(_) => StatusCode::BAD_GATEWAY,
            ServiceError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
            ServiceError::UnknownContract(_) => StatusCode::NOT_FOUND,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::{KeeperRegistry, StakingPoolLib};
    use alloy::{
        primitives::{address, U256},
        sol_types::SolError,
    };

    #[test]
    fn custom_errors_decode_through_the_contract_error_set() {
        let data = KeeperRegistry::UpkeepNotActive {}.abi_encode();
        let decoded = KeeperRegistry::KeeperRegistryErrors::abi_decode(&data, true).unwrap();
        assert_eq!(
            decoded,
            KeeperRegistry::KeeperRegistryErrors::UpkeepNotActive(KeeperRegistry::UpkeepNotActive {})
        );

        let data = StakingPoolLib::InsufficientStakeAmount {
            requiredAmount: U256::from(1_000u64),
        }
        .abi_encode();
        let decoded = StakingPoolLib::StakingPoolLibErrors::abi_decode(&data, true).unwrap();
        assert!(matches!(
            decoded,
            StakingPoolLib::StakingPoolLibErrors::InsufficientStakeAmount(e) if e.requiredAmount == U256::from(1_000u64)
        ));

        let data = StakingPoolLib::OperatorIsLocked {
            operator: address!("00000000000000000000000000000000000000aa"),
        }
        .abi_encode();
        assert!(KeeperRegistry::KeeperRegistryErrors::abi_decode(&data, true).is_err());
    }

    #[test]
    fn service_errors_map_to_status_codes() {
        assert_eq!(
            ServiceError::NotConfigured("KeeperRegistry").status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ServiceError::InvalidParameter("round".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::UnknownContract("Foo".into()).status_code(),
            StatusCode::NOT_FOUND
        );

        let err: ServiceError = ContractError::RpcConnection("refused".into()).into();
        assert!(matches!(err, ServiceError::RPCConnectionError(ref d) if d == "refused"));

        let err: ServiceError = ContractError::MissingBytecode("KeeperRegistryBase").into();
        assert_eq!(err.error_code(), "CONTRACT_CALL_ERROR");
    }
}
