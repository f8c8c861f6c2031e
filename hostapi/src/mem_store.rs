//! In-memory world state.
//!
//! `MemStore` implements `StateStore` using a `BTreeMap` for ordered keys.
//! It backs the local service loop and the lifecycle tests, where a real
//! ledger is not available.

use std::collections::BTreeMap;

use crate::error::StubError;
use crate::overlay::WriteSet;
use crate::state_store::StateStore;

/// In-memory world state backed by `BTreeMap`.
#[derive(Debug, Clone, Default)]
pub struct MemStore {
    data: BTreeMap<String, Vec<u8>>,
}

impl MemStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key-value pair into the store.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        self.data.insert(key.into(), value.into());
    }

    /// Commit a transaction's write set.
    ///
    /// Puts overwrite, deletes remove. Returns the number of keys touched.
    pub fn apply(&mut self, writes: WriteSet) -> usize {
        let touched = writes.len();
        for (key, value) in writes {
            match value {
                Some(value) => {
                    self.data.insert(key, value);
                }
                None => {
                    self.data.remove(&key);
                }
            }
        }
        touched
    }

    /// Borrow the committed value for a key without going through `StateStore`.
    pub fn peek(&self, key: &str) -> Option<&[u8]> {
        self.data.get(key).map(Vec::as_slice)
    }

    /// Returns the number of entries in the store.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl StateStore for MemStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StubError> {
        Ok(self.data.get(key).cloned())
    }
}
