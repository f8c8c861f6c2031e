//! Store accessor error type.
//!
//! `StubError` is returned by every `WorldState` and `StateStore` method.
//! Limit violations detected by the transaction layer have their own
//! variants; failures reported by a storage backend are carried in
//! `Internal` with the backend's message, which is displayed verbatim so
//! that contract code can surface it to the caller unchanged.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StubError {
    /// Writes and deletes require a non-empty key.
    #[error("key must not be an empty string")]
    EmptyKey,

    /// Key exceeds `ChaincodeConfig::max_key_len`.
    #[error("key length {len} exceeds the maximum of {max} bytes")]
    KeyTooLarge { len: usize, max: usize },

    /// Value exceeds `ChaincodeConfig::max_value_len`.
    #[error("value length {len} exceeds the maximum of {max} bytes")]
    ValueTooLarge { len: usize, max: usize },

    /// The transaction's cumulative writes exceed `ChaincodeConfig::max_write_bytes`.
    #[error("transaction write set exceeds the maximum of {max} bytes")]
    WriteLimit { max: u64 },

    /// Failure reported by the storage backend.
    #[error("{0}")]
    Internal(String),
}

impl StubError {
    /// Create a backend failure with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns true for errors caused by a limit in `ChaincodeConfig`.
    pub fn is_limit(&self) -> bool {
        matches!(
            self,
            Self::KeyTooLarge { .. } | Self::ValueTooLarge { .. } | Self::WriteLimit { .. }
        )
    }
}
