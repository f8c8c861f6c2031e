//! Contract error type.
//!
//! Messages are part of the contract's observable behavior: the host
//! returns them verbatim to whoever submitted the transaction.

use handler_hostapi::StubError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContractError {
    /// A store call failed. Raised by `HandlerExists` reads and by the
    /// put/delete of the mutating operations; the message is the store's.
    #[error(transparent)]
    Store(#[from] StubError),

    /// The existence check of a mutating or reading operation failed.
    #[error("Could not read from world state. {0}")]
    ReadFailure(#[source] StubError),

    /// `CreateHandler` on an occupied key.
    #[error("The asset {id} already exists")]
    AlreadyExists { id: String },

    /// `ReadHandler` / `UpdateHandler` / `DeleteHandler` on a vacant key.
    #[error("The asset {id} does not exist")]
    NotFound { id: String },

    /// Stored bytes are not a `Handler` record.
    #[error("Could not unmarshal world state data to type Handler")]
    DecodeFailure(#[source] serde_json::Error),

    /// A record could not be encoded.
    #[error("Could not marshal Handler. {0}")]
    Encode(#[source] serde_json::Error),

    /// The router received a name it does not know.
    #[error("Function {function} not found in contract {contract}")]
    UnknownFunction {
        function: String,
        contract: &'static str,
    },

    /// The router received the wrong number of arguments.
    #[error("Incorrect number of params. Expected {expected}, received {received}")]
    ArgumentCount {
        function: &'static str,
        expected: usize,
        received: usize,
    },
}
