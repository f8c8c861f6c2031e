//! Host-side transaction context.
//!
//! A `Transaction` is created fresh for each invocation. It reads through
//! a `StateOverlay` into committed state and buffers every write in the
//! overlay. The host decides afterwards whether the buffered write set is
//! committed (`into_writes` + `MemStore::apply`) or dropped.

use tracing::trace;

use crate::config::ChaincodeConfig;
use crate::error::StubError;
use crate::overlay::{OverlayResult, StateOverlay, WriteSet};
use crate::state_store::StateStore;
use crate::traits::{TransactionContext, WorldState};

/// One transaction's view of world state.
///
/// Reads check the overlay first, then fall through to the committed
/// store. Writes enforce the limits in `ChaincodeConfig`.
pub struct Transaction<'a, S: StateStore + ?Sized> {
    tx_id: String,
    store: &'a S,
    overlay: StateOverlay,
    config: ChaincodeConfig,
}

impl<'a, S: StateStore + ?Sized> Transaction<'a, S> {
    /// Open a transaction over committed state.
    pub fn new(tx_id: impl Into<String>, store: &'a S, config: ChaincodeConfig) -> Self {
        Self {
            tx_id: tx_id.into(),
            store,
            overlay: StateOverlay::new(),
            config,
        }
    }

    /// Buffered writes so far.
    pub fn overlay(&self) -> &StateOverlay {
        &self.overlay
    }

    /// Close the transaction and return its write set for commit.
    pub fn into_writes(self) -> WriteSet {
        self.overlay.drain()
    }

    fn check_key(&self, key: &str) -> Result<(), StubError> {
        if key.is_empty() {
            return Err(StubError::EmptyKey);
        }
        if key.len() > self.config.max_key_len {
            return Err(StubError::KeyTooLarge {
                len: key.len(),
                max: self.config.max_key_len,
            });
        }
        Ok(())
    }

    fn check_write_budget(&self) -> Result<(), StubError> {
        if self.overlay.total_write_bytes() > self.config.max_write_bytes {
            return Err(StubError::WriteLimit {
                max: self.config.max_write_bytes,
            });
        }
        Ok(())
    }
}

impl<S: StateStore + ?Sized> WorldState for Transaction<'_, S> {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StubError> {
        match self.overlay.get(key) {
            OverlayResult::Found(v) => Ok(Some(v)),
            OverlayResult::Deleted => Ok(None),
            OverlayResult::NotInOverlay => self.store.get(key),
        }
    }

    /// A write that breaks the budget stays in the overlay; the error
    /// aborts the transaction, so the overlay is dropped with it.
    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StubError> {
        self.check_key(key)?;
        if value.len() > self.config.max_value_len {
            return Err(StubError::ValueTooLarge {
                len: value.len(),
                max: self.config.max_value_len,
            });
        }
        trace!(tx_id = %self.tx_id, key, bytes = value.len(), "put_state");
        self.overlay.set(key.to_string(), value.to_vec());
        self.check_write_budget()
    }

    fn del_state(&mut self, key: &str) -> Result<(), StubError> {
        self.check_key(key)?;
        trace!(tx_id = %self.tx_id, key, "del_state");
        self.overlay.delete(key.to_string());
        self.check_write_budget()
    }
}

impl<S: StateStore + ?Sized> TransactionContext for Transaction<'_, S> {
    type Stub = Self;

    fn stub(&self) -> &Self {
        self
    }

    fn stub_mut(&mut self) -> &mut Self {
        self
    }

    fn tx_id(&self) -> &str {
        &self.tx_id
    }
}
