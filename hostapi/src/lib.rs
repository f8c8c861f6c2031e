//! `handler-hostapi` — the world-state capability handed to contract code.
//!
//! This crate defines the seam between contract logic and the ledger host.
//! It provides:
//!
//! - `WorldState` trait — `get_state` / `put_state` / `del_state` for one transaction
//! - `TransactionContext` trait — the per-transaction handle exposing the store accessor
//! - `StateStore` trait — committed world-state backend abstraction
//! - `MemStore` — in-memory `StateStore` for tests and local runs
//! - `StateOverlay` — write buffer holding one transaction's puts and deletes
//! - `Transaction` — `TransactionContext` over a store plus overlay, enforcing limits
//! - `StubContext` — `TransactionContext` wrapping any `WorldState` (test doubles)
//! - `ChaincodeConfig` — per-transaction resource limits
//! - `StubError` — store accessor error type

pub mod error;
pub mod config;
pub mod state_store;
pub mod mem_store;
pub mod overlay;
pub mod traits;
pub mod transaction;

// Re-export commonly used types at the crate root.
pub use error::StubError;
pub use config::ChaincodeConfig;
pub use state_store::StateStore;
pub use mem_store::MemStore;
pub use overlay::{OverlayResult, StateOverlay, WriteSet};
pub use traits::{StubContext, TransactionContext, WorldState};
pub use transaction::Transaction;
