//! Chaincode error types.

use handler_contract::ContractError;

/// Top-level error type for the chaincode crate.
///
/// Everything except `Transport` and `ResponseEncoding` is reported back
/// to the caller as an error response and the service loop continues.
#[derive(Debug, thiserror::Error)]
pub enum ChaincodeError {
    /// The contract rejected the invocation.
    #[error(transparent)]
    Contract(#[from] ContractError),

    /// Reading from or writing to the transport failed.
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),

    /// An inbound message was not a valid invocation.
    #[error("malformed invocation: {0}")]
    MalformedInvocation(#[source] serde_json::Error),

    /// A response could not be encoded.
    #[error("response encoding error: {0}")]
    ResponseEncoding(#[source] serde_json::Error),

    /// The invocation named a contract this chaincode does not host.
    #[error("Contract not found with name {0}")]
    ContractNotFound(String),

    /// Chaincode metadata could not be encoded.
    #[error("Failed to serialize metadata. {0}")]
    Metadata(#[source] serde_json::Error),
}

impl ChaincodeError {
    /// Errors after which the service loop can keep serving.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Transport(_) | Self::ResponseEncoding(_))
    }
}
