//! Committed world-state backend abstraction.
//!
//! `StateStore` is the read side of the ledger's world state as of the
//! start of a transaction. A `Transaction` combines a `StateStore` with a
//! `StateOverlay` (write buffer): reads check the overlay first, then fall
//! through to the store.
//!
//! Implementations:
//! - `MemStore` (this crate): in-memory BTreeMap for tests and local runs

use crate::error::StubError;

/// Abstraction over committed world state.
///
/// Keys are the flat string keyspace of the ledger. Implementations must
/// return the same value for a key until a write set is committed.
pub trait StateStore: Send + Sync {
    /// Get the committed value for a key.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StubError>;
}
