//! Per-transaction resource limits.
//!
//! `ChaincodeConfig` bundles the limits enforced by `Transaction` when
//! contract code writes to world state. The chaincode binary builds one
//! from its command line; tests use `Default`.

/// Default maximum key length in bytes.
pub const DEFAULT_MAX_KEY_LEN: usize = 1024;

/// Default maximum value length in bytes.
pub const DEFAULT_MAX_VALUE_LEN: usize = 1024 * 1024; // 1 MiB

/// Default maximum bytes written (keys + values) by one transaction.
pub const DEFAULT_MAX_WRITE_BYTES: u64 = 4 * 1024 * 1024; // 4 MiB

/// Resource limits for a single transaction.
///
/// These limits are enforced by the host-side `Transaction`. Contract
/// code sees a violation as a `StubError` from `put_state` / `del_state`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChaincodeConfig {
    /// Maximum length of a state key in bytes.
    pub max_key_len: usize,
    /// Maximum length of a state value in bytes.
    pub max_value_len: usize,
    /// Maximum total bytes that can be written to state in one transaction.
    pub max_write_bytes: u64,
}

impl Default for ChaincodeConfig {
    fn default() -> Self {
        Self {
            max_key_len: DEFAULT_MAX_KEY_LEN,
            max_value_len: DEFAULT_MAX_VALUE_LEN,
            max_write_bytes: DEFAULT_MAX_WRITE_BYTES,
        }
    }
}
