//! Transactional write buffer over committed world state.
//!
//! The overlay records one transaction's puts and deletes and makes them
//! visible to later reads in the same transaction. When the transaction
//! succeeds the host commits the buffered writes as a unit; when it fails
//! they are dropped.

use std::collections::BTreeMap;

/// Buffered writes: key → `Some(value)` for puts, key → `None` for deletes.
pub type WriteSet = BTreeMap<String, Option<Vec<u8>>>;

/// One transaction's pending writes.
///
/// Each key holds only its latest put or delete, and the byte total tracks
/// exactly what a commit of the current write set would write.
#[derive(Debug, Clone, Default)]
pub struct StateOverlay {
    writes: WriteSet,
    total_write_bytes: u64,
}

/// Outcome of an overlay lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayResult {
    Found(Vec<u8>),
    Deleted,
    /// Nothing pending for the key; committed state decides.
    NotInOverlay,
}

impl StateOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer a put, superseding any pending write for `key`.
    pub fn set(&mut self, key: String, value: Vec<u8>) {
        self.release(&key);
        self.total_write_bytes = self
            .total_write_bytes
            .saturating_add((key.len() + value.len()) as u64);
        self.writes.insert(key, Some(value));
    }

    /// Buffer a delete. The key's bytes count toward the budget.
    pub fn delete(&mut self, key: String) {
        self.release(&key);
        self.total_write_bytes = self.total_write_bytes.saturating_add(key.len() as u64);
        self.writes.insert(key, None);
    }

    fn release(&mut self, key: &str) {
        if let Some(prev) = self.writes.get(key) {
            let prev_bytes = key.len() as u64 + prev.as_ref().map_or(0, |v| v.len() as u64);
            self.total_write_bytes = self.total_write_bytes.saturating_sub(prev_bytes);
        }
    }

    pub fn get(&self, key: &str) -> OverlayResult {
        match self.writes.get(key) {
            Some(Some(value)) => OverlayResult::Found(value.clone()),
            Some(None) => OverlayResult::Deleted,
            None => OverlayResult::NotInOverlay,
        }
    }

    /// Consume the overlay, yielding the write set to commit.
    pub fn drain(self) -> WriteSet {
        self.writes
    }

    /// Number of keys with a pending write.
    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    pub fn total_write_bytes(&self) -> u64 {
        self.total_write_bytes
    }
}
