//! Store accessor traits — what contract code sees of the ledger.
//!
//! Contract operations never hold world state themselves. Every call
//! receives a `TransactionContext`, and all reads and writes go through
//! the `WorldState` accessor it exposes for that transaction only.
//!
//! - On a running host: implemented by `Transaction` (store + overlay)
//! - In tests: any `WorldState` double wrapped in `StubContext`

use crate::error::StubError;

/// Key-value accessor for the current transaction's view of world state.
pub trait WorldState {
    // ── Reads ──

    /// Read the value stored at `key`.
    ///
    /// Returns `Ok(None)` if no value is present. Reads reflect committed
    /// state plus any writes made earlier in the same transaction.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StubError>;

    // ── Writes ──

    /// Write `value` at `key`, replacing any existing value.
    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StubError>;

    /// Delete the value at `key`.
    fn del_state(&mut self, key: &str) -> Result<(), StubError>;
}

/// Per-transaction handle supplied by the host.
pub trait TransactionContext {
    /// The store accessor type for this context.
    type Stub: WorldState + ?Sized;

    /// Store accessor for reads.
    fn stub(&self) -> &Self::Stub;

    /// Store accessor for writes.
    fn stub_mut(&mut self) -> &mut Self::Stub;

    /// Identifier of the transaction this context belongs to.
    fn tx_id(&self) -> &str;
}

/// A `TransactionContext` that simply owns a `WorldState`.
///
/// Useful for driving contract operations against a test double.
#[derive(Debug, Clone, Default)]
pub struct StubContext<S> {
    tx_id: String,
    stub: S,
}

impl<S: WorldState> StubContext<S> {
    /// Wrap `stub` in a context for transaction `tx_id`.
    pub fn new(tx_id: impl Into<String>, stub: S) -> Self {
        Self {
            tx_id: tx_id.into(),
            stub,
        }
    }

    /// Unwrap the accessor, e.g. to inspect recorded calls.
    pub fn into_stub(self) -> S {
        self.stub
    }
}

impl<S: WorldState> TransactionContext for StubContext<S> {
    type Stub = S;

    fn stub(&self) -> &S {
        &self.stub
    }

    fn stub_mut(&mut self) -> &mut S {
        &mut self.stub
    }

    fn tx_id(&self) -> &str {
        &self.tx_id
    }
}
